//! The `characters` collection.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/characters` | List characters |
//! | `/characters/{characterId}` | Fetch a single character by ID |
//! | `/comics/{comicId}/characters` | List characters which appear in a comic |
//! | `/events/{eventId}/characters` | List characters which appear in an event |
//! | `/series/{seriesId}/characters` | List characters which appear in a series |
//! | `/stories/{storyId}/characters` | List characters which appear in a story |
//!
//! # Example
//!
//! ```
//! use marvel_client_sdk::auth::Credentials;
//! use marvel_client_sdk::characters::Character;
//! use marvel_client_sdk::characters::types::request::{
//!     CharacterOrder, CharacterParameter, CharacterRelation,
//! };
//! use marvel_client_sdk::request::{Filter, Request};
//!
//! let credentials = Credentials::new("public", "private");
//!
//! let request = Request::<Character>::filtered(
//!     &credentials,
//!     Filter::new(CharacterRelation::Comic, 21_366),
//! )
//! .with_parameters(&[CharacterParameter::OrderBy(vec![CharacterOrder::NameAscending])]);
//!
//! let url = request.url().expect("fixed host always resolves");
//! assert_eq!(url.path(), "/v1/public/comics/21366/characters");
//! ```

pub mod types;

pub use types::response::Character;
