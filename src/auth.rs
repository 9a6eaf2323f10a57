//! Request authentication.
//!
//! Every call to the API carries three query parameters: the public key (`apikey`), a
//! timestamp (`ts`) and `hash = md5(ts + private_key + public_key)`. The signature is derived
//! fresh for each request since the server rejects stale timestamps.

use chrono::Utc;
/// Secret string types that redact values in debug output for security.
pub use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;
use crate::hash::hex_digest;
use crate::query::QueryItem;
use crate::{PRIVATE_KEY_VAR, PUBLIC_KEY_VAR, Result, Timestamp};

pub(crate) const API_KEY: &str = "apikey";
pub(crate) const TS: &str = "ts";
pub(crate) const HASH: &str = "hash";

/// The public/private key pair issued for an API account.
///
/// Created once by the embedding application and passed by reference to every request
/// construction. Read-only, so it can be shared freely across threads.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub(crate) public_key: String,
    pub(crate) private_key: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new<P: Into<String>, S: Into<String>>(public_key: P, private_key: S) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: SecretString::from(private_key.into()),
        }
    }

    /// Reads the key pair from [`PUBLIC_KEY_VAR`] and [`PRIVATE_KEY_VAR`].
    pub fn from_env() -> Result<Self> {
        let read = |var: &str| {
            std::env::var(var)
                .ok()
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::validation(format!("environment variable {var} is not set")))
        };

        Ok(Self::new(read(PUBLIC_KEY_VAR)?, read(PRIVATE_KEY_VAR)?))
    }

    /// Returns the public API key.
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Returns the private API key.
    #[must_use]
    pub fn private_key(&self) -> &SecretString {
        &self.private_key
    }

    /// Signs with the current wall-clock time.
    #[must_use]
    pub fn sign(&self) -> Signature {
        self.sign_at(Utc::now().timestamp_millis())
    }

    /// Signs with an explicit timestamp.
    #[must_use]
    pub fn sign_at(&self, timestamp: Timestamp) -> Signature {
        let timestamp = timestamp.to_string();
        let hash = hex_digest(&to_message(
            &timestamp,
            self.private_key.expose_secret(),
            &self.public_key,
        ));

        Signature {
            api_key: self.public_key.clone(),
            timestamp,
            hash,
        }
    }
}

/// The `{apikey, ts, hash}` triple proving a request was issued by the key holder.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub api_key: String,
    pub timestamp: String,
    pub hash: String,
}

impl Signature {
    /// The signature as query items, in the order `apikey`, `ts`, `hash`.
    #[must_use]
    pub fn query_items(&self) -> [QueryItem; 3] {
        [
            QueryItem::new(API_KEY, self.api_key.clone()),
            QueryItem::new(TS, self.timestamp.clone()),
            QueryItem::new(HASH, self.hash.clone()),
        ]
    }
}

#[must_use]
fn to_message(timestamp: &str, private_key: &str, public_key: &str) -> String {
    format!("{timestamp}{private_key}{public_key}")
}
