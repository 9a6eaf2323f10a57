//! The `comics` collection.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/comics` | List comics |
//! | `/comics/{comicId}` | Fetch a single comic by ID |
//! | `/characters/{characterId}/comics` | List comics featuring a character |
//! | `/creators/{creatorId}/comics` | List comics a creator worked on |
//! | `/events/{eventId}/comics` | List comics which take place in an event |
//! | `/series/{seriesId}/comics` | List comics in a series |
//! | `/stories/{storyId}/comics` | List comics in which a story appears |
//!
//! # Example
//!
//! ```
//! use marvel_client_sdk::auth::Credentials;
//! use marvel_client_sdk::comics::Comic;
//! use marvel_client_sdk::comics::types::{ComicFormat, DateDescriptor};
//! use marvel_client_sdk::comics::types::request::ComicParameter;
//! use marvel_client_sdk::request::Request;
//!
//! let credentials = Credentials::new("public", "private");
//!
//! let request = Request::<Comic>::new(&credentials).with_parameters(&[
//!     ComicParameter::Format(ComicFormat::TradePaperback),
//!     ComicParameter::DateDescriptor(DateDescriptor::ThisWeek),
//! ]);
//!
//! let url = request.url().expect("fixed host always resolves");
//! assert!(url.as_str().ends_with("&format=trade+paperback&dateDescriptor=thisWeek"));
//! ```

pub mod types;

pub use types::response::Comic;
