//! Signed request construction.
//!
//! A [`Request`] is bound at the type level to one [`Resource`]: only that resource's
//! parameters and filters can be passed to it. Construction resolves the absolute URL,
//! appends the authentication triple, and then callers append typed parameters:
//!
//! ```
//! use marvel_client_sdk::auth::Credentials;
//! use marvel_client_sdk::characters::Character;
//! use marvel_client_sdk::characters::types::request::CharacterParameter;
//! use marvel_client_sdk::request::Request;
//!
//! let credentials = Credentials::new("public", "private");
//!
//! let request = Request::<Character>::new(&credentials).with_parameters(&[
//!     CharacterParameter::Name("Spider-Man".to_owned()),
//!     CharacterParameter::Limit(20),
//! ]);
//!
//! let url = request.url().expect("fixed host always resolves");
//! assert_eq!(url.path(), "/v1/public/characters");
//! ```
//!
//! Construction never panics. If the URL cannot be formed the request carries no URL and
//! [`Request::url`] returns `None`; appending parameters to such a request is a no-op.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::{Credentials, Signature};
use crate::error::Error;
use crate::query::{QueryParameter, append_query_items, to_query_items};
use crate::{DEFAULT_HOST, Result};

const METHOD: &str = "GET";

/// The top-level collections exposed by the API.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Character,
    Comic,
    Creator,
    Event,
    Series,
    Story,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Character,
        ResourceKind::Comic,
        ResourceKind::Creator,
        ResourceKind::Event,
        ResourceKind::Series,
        ResourceKind::Story,
    ];

    /// Path segment of the collection, relative to the API host.
    #[must_use]
    pub const fn base_path(self) -> &'static str {
        match self {
            ResourceKind::Character => "characters",
            ResourceKind::Comic => "comics",
            ResourceKind::Creator => "creators",
            ResourceKind::Event => "events",
            ResourceKind::Series => "series",
            ResourceKind::Story => "stories",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_path())
    }
}

/// A resource the API can list and look up.
///
/// Implemented by the decoded response type of each collection, tying it to the parameter and
/// filter vocabulary that collection accepts.
pub trait Resource: DeserializeOwned {
    const KIND: ResourceKind;

    /// Query parameters accepted when listing this resource.
    type Parameter: QueryParameter;

    /// Parent collections this resource can be listed under.
    type Relation: Relation;
}

/// A parent collection under which a resource can be listed, e.g. the comics of a character.
pub trait Relation: Copy + fmt::Debug {
    fn parent(self) -> ResourceKind;
}

/// Lists the resources related to one parent item, e.g. `characters/1009368/comics`.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter<Rel> {
    pub relation: Rel,
    pub id: u32,
}

impl<Rel: Relation> Filter<Rel> {
    #[must_use]
    pub fn new(relation: Rel, id: u32) -> Self {
        Self { relation, id }
    }
}

/// What a request addresses. Single-item lookups and filtered listings are mutually exclusive.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<Rel> {
    /// The whole collection, e.g. `characters`.
    Collection,
    /// One item by ID, e.g. `characters/1009368`.
    Item(u32),
    /// Items related to a parent, e.g. `characters/1009368/comics` for comics.
    Related(Filter<Rel>),
}

/// Resolves the path of `target` relative to the API host.
#[must_use]
pub fn resolve_path<R: Resource>(target: &Target<R::Relation>) -> String {
    let base = R::KIND.base_path();
    match target {
        Target::Collection => base.to_owned(),
        Target::Item(id) => format!("{base}/{id}"),
        Target::Related(filter) => {
            format!("{}/{}/{base}", filter.relation.parent().base_path(), filter.id)
        }
    }
}

/// A signed request URL for resource `R`, ready to hand to an HTTP transport.
pub struct Request<R: Resource> {
    url: Option<Url>,
    resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Request<R> {
    /// Lists the collection, e.g. `GET /v1/public/characters`.
    #[must_use]
    pub fn new(credentials: &Credentials) -> Self {
        Self::with_target(credentials, Target::Collection)
    }

    /// Fetches a single item, e.g. `GET /v1/public/characters/1009368`.
    #[must_use]
    pub fn by_id(credentials: &Credentials, id: u32) -> Self {
        Self::with_target(credentials, Target::Item(id))
    }

    /// Lists items related to a parent, e.g. `GET /v1/public/characters/1009368/comics`.
    #[must_use]
    pub fn filtered(credentials: &Credentials, filter: Filter<R::Relation>) -> Self {
        Self::with_target(credentials, Target::Related(filter))
    }

    fn with_target(credentials: &Credentials, target: Target<R::Relation>) -> Self {
        match Url::parse(DEFAULT_HOST) {
            Ok(host) => Self::from_parts(&host, target, &credentials.sign()),
            Err(e) => Self::unresolved(&e),
        }
    }

    /// Builds a request against `host` with an already computed signature.
    ///
    /// `host` is treated as a directory: `https://h/v1/public` and `https://h/v1/public/`
    /// resolve identically.
    #[must_use]
    pub fn from_parts(host: &Url, target: Target<R::Relation>, signature: &Signature) -> Self {
        let path = resolve_path::<R>(&target);
        let url = match absolute_url(host, &path) {
            Ok(url) => url,
            Err(e) => return Self::unresolved(&e),
        };

        Self {
            url: Some(append_query_items(url, &signature.query_items())),
            resource: PhantomData,
        }
    }

    fn unresolved(reason: &dyn fmt::Display) -> Self {
        #[cfg(feature = "tracing")]
        tracing::warn!(kind = %R::KIND, %reason, "unable to build request url");
        #[cfg(not(feature = "tracing"))]
        let _ = reason;

        Self {
            url: None,
            resource: PhantomData,
        }
    }

    /// Appends `parameters` after everything already on the URL, in the given order.
    #[must_use]
    pub fn with_parameters(mut self, parameters: &[R::Parameter]) -> Self {
        self.url = self
            .url
            .map(|url| append_query_items(url, &to_query_items(parameters)));
        self
    }

    /// The resource kind this request addresses.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        R::KIND
    }

    /// The HTTP method. The API is read-only, so this is always `GET`.
    #[must_use]
    pub fn method(&self) -> &'static str {
        METHOD
    }

    /// The signed URL, or `None` if it could not be constructed.
    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    #[must_use]
    pub fn into_url(self) -> Option<Url> {
        self.url
    }

    /// Like [`Self::into_url`], reporting a missing URL as a validation error.
    pub fn try_into_url(self) -> Result<Url> {
        self.url.ok_or_else(|| {
            Error::validation(format!("unable to build a request url for {}", R::KIND))
        })
    }
}

impl<R: Resource> Clone for Request<R> {
    fn clone(&self) -> Self {
        Self {
            url: self.url.clone(),
            resource: PhantomData,
        }
    }
}

impl<R: Resource> fmt::Debug for Request<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("kind", &R::KIND)
            .field("url", &self.url.as_ref().map(Url::as_str))
            .finish()
    }
}

fn absolute_url(host: &Url, path: &str) -> std::result::Result<Url, url::ParseError> {
    if host.cannot_be_a_base() {
        return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
    }

    let mut base = host.clone();
    if !base.path().ends_with('/') {
        let directory = format!("{}/", base.path());
        base.set_path(&directory);
    }

    base.join(path)
}
