#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
pub mod characters;
#[cfg(feature = "client")]
pub mod client;
pub mod comics;
pub mod creators;
pub mod error;
pub mod events;
pub(crate) mod hash;
pub mod query;
pub mod request;
pub mod response;
#[cfg(feature = "client")]
pub(crate) mod serde_helpers;
pub mod series;
pub mod stories;
pub mod types;

#[cfg(feature = "client")]
use reqwest::header::HeaderMap;
#[cfg(feature = "client")]
use serde::de::DeserializeOwned;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Base URL every request path is resolved against.
pub const DEFAULT_HOST: &str = "https://gateway.marvel.com/v1/public/";

pub const PUBLIC_KEY_VAR: &str = "MARVEL_PUBLIC_KEY";
pub const PRIVATE_KEY_VAR: &str = "MARVEL_PRIVATE_KEY";

/// Timestamp in milliseconds since [`std::time::UNIX_EPOCH`]
pub type Timestamp = i64;

#[cfg(feature = "client")]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request, headers),
        fields(path = request.url().path(), status_code)
    )
)]
async fn execute<Response: DeserializeOwned>(
    client: &reqwest::Client,
    mut request: reqwest::Request,
    headers: Option<HeaderMap>,
) -> Result<Response> {
    let path = request.url().path().to_owned();

    if let Some(h) = headers {
        request.headers_mut().extend(h);
    }

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            path = %path,
            message = %message,
            "API request failed"
        );

        return Err(Error::status(status_code.as_u16(), path, message));
    }

    let json_value = response.json::<serde_json::Value>().await?;
    serde_helpers::deserialize_with_warnings(json_value)
}
