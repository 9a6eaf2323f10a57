//! The `events` collection: big, universe-changing storylines.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/events` | List events |
//! | `/events/{eventId}` | Fetch a single event by ID |
//! | `/characters/{characterId}/events` | List events in which a character appears |
//! | `/comics/{comicId}/events` | List events in which a comic takes place |
//! | `/creators/{creatorId}/events` | List events featuring work by a creator |
//! | `/series/{seriesId}/events` | List events which occur in a series |
//! | `/stories/{storyId}/events` | List events in which a story appears |

pub mod types;

pub use types::response::Event;
