//! Re-exported types from external crates for convenience.
//!
//! These types appear in parameter payloads and are re-exported here
//! so users don't need to add these dependencies to their `Cargo.toml`.

/// Date and time types for `modifiedSince` and `dateRange` filters.
pub use chrono::{DateTime, NaiveDate, TimeZone, Utc};
/// The URL type produced by request construction.
pub use url::Url;
