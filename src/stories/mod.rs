//! The `stories` collection: the indivisible, reusable units of comic content.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/stories` | List stories |
//! | `/stories/{storyId}` | Fetch a single story by ID |
//! | `/characters/{characterId}/stories` | List stories featuring a character |
//! | `/comics/{comicId}/stories` | List stories contained in a comic |
//! | `/creators/{creatorId}/stories` | List stories by a creator |
//! | `/events/{eventId}/stories` | List stories which take place in an event |
//! | `/series/{seriesId}/stories` | List stories in a series |

pub mod types;

pub use types::response::Story;
