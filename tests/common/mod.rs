#![allow(
    unused,
    reason = "Each test binary uses a different subset of these helpers"
)]

use marvel_client_sdk::auth::{Credentials, Signature};

pub const PUBLIC_KEY: &str = "PUB";
pub const PRIVATE_KEY: &str = "PRIV";

/// Milliseconds since the epoch for 2023-11-14T22:13:20Z.
pub const TIMESTAMP: i64 = 1_700_000_000_000;

/// `md5("1700000000000PRIVPUB")`
pub const HASH: &str = "a77aa205d1b163653fa9df03b66e07ec";

#[must_use]
pub fn credentials() -> Credentials {
    Credentials::new(PUBLIC_KEY, PRIVATE_KEY)
}

#[must_use]
pub fn signature() -> Signature {
    credentials().sign_at(TIMESTAMP)
}

/// The query prefix every request signed with [`signature`] starts with.
#[must_use]
pub fn signed_query() -> String {
    format!("apikey={PUBLIC_KEY}&ts={TIMESTAMP}&hash={HASH}")
}
