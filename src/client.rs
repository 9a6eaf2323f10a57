//! HTTP transport for signed requests.
//!
//! **Feature flag:** `client`
//!
//! Request construction never touches the network. This client is a thin layer on top: it
//! stamps requests with fresh signatures against its configured host and decodes the
//! [`DataWrapper`] envelope from responses.
//!
//! # Example
//!
//! ```no_run
//! use marvel_client_sdk::characters::Character;
//! use marvel_client_sdk::characters::types::request::CharacterParameter;
//! use marvel_client_sdk::client::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::from_env()?;
//!
//! let request = client
//!     .request::<Character>()
//!     .with_parameters(&[CharacterParameter::NameStartsWith("Spider".to_owned())]);
//!
//! let response = client.send(request).await?;
//! for character in response.results() {
//!     println!("{:?}", character.name);
//! }
//! # Ok(())
//! # }
//! ```

use bon::Builder;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderMap, HeaderValue},
};
use url::Url;

use crate::auth::Credentials;
use crate::request::{Filter, Request, Resource, Target};
use crate::response::DataWrapper;
use crate::{DEFAULT_HOST, Result};

const DEFAULT_USER_AGENT: &str = concat!("marvel-client-sdk/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`Client`]
#[derive(Clone, Debug, Default, Builder)]
pub struct Config {
    /// Override for the API host. Defaults to `https://gateway.marvel.com/v1/public/`.
    /// This is primarily useful for testing.
    #[builder(into)]
    host: Option<String>,
    /// Override for the `User-Agent` header.
    #[builder(into)]
    user_agent: Option<String>,
}

/// HTTP client for the Marvel Comics API.
///
/// Holds the [`Credentials`] so every request it builds is signed at construction time.
#[derive(Clone, Debug)]
pub struct Client {
    credentials: Credentials,
    /// The [`Url`] request paths are resolved against.
    host: Url,
    client: ReqwestClient,
}

impl Client {
    pub fn new(credentials: Credentials, config: Config) -> Result<Client> {
        let mut headers = HeaderMap::new();

        let user_agent = match &config.user_agent {
            Some(user_agent) => HeaderValue::from_str(user_agent)?,
            None => HeaderValue::from_static(DEFAULT_USER_AGENT),
        };
        headers.insert("User-Agent", user_agent);
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Self {
            credentials,
            host: Url::parse(config.host.as_deref().unwrap_or(DEFAULT_HOST))?,
            client,
        })
    }

    /// Creates a client with the default [`Config`] and [`Credentials::from_env`].
    pub fn from_env() -> Result<Client> {
        Self::new(Credentials::from_env()?, Config::default())
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// A freshly signed request listing the `R` collection.
    #[must_use]
    pub fn request<R: Resource>(&self) -> Request<R> {
        self.signed(Target::Collection)
    }

    /// A freshly signed request for the `R` with the given ID.
    #[must_use]
    pub fn request_by_id<R: Resource>(&self, id: u32) -> Request<R> {
        self.signed(Target::Item(id))
    }

    /// A freshly signed request listing the `R` related to a parent item.
    #[must_use]
    pub fn request_filtered<R: Resource>(&self, filter: Filter<R::Relation>) -> Request<R> {
        self.signed(Target::Related(filter))
    }

    fn signed<R: Resource>(&self, target: Target<R::Relation>) -> Request<R> {
        Request::from_parts(&self.host, target, &self.credentials.sign())
    }

    /// Issues `request` and decodes the response envelope.
    ///
    /// A request without a URL fails with a validation error before anything is sent.
    pub async fn send<R: Resource>(&self, request: Request<R>) -> Result<DataWrapper<R>> {
        self.get(request, None).await
    }

    /// Like [`Self::send`], but lets the server answer `304 Not Modified` when the content
    /// still matches `etag` (taken from [`DataWrapper::etag`] of a previous response).
    ///
    /// An unchanged resource surfaces as a status error with status code 304.
    pub async fn send_if_none_match<R: Resource>(
        &self,
        request: Request<R>,
        etag: &str,
    ) -> Result<DataWrapper<R>> {
        let mut headers = HeaderMap::new();
        headers.insert("If-None-Match", HeaderValue::from_str(etag)?);

        self.get(request, Some(headers)).await
    }

    async fn get<R: Resource>(
        &self,
        request: Request<R>,
        headers: Option<HeaderMap>,
    ) -> Result<DataWrapper<R>> {
        let url = request.try_into_url()?;
        let request = self.client.request(Method::GET, url).build()?;

        crate::execute(&self.client, request, headers).await
    }
}
