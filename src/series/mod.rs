//! The `series` collection.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/series` | List comic series |
//! | `/series/{seriesId}` | Fetch a single series by ID |
//! | `/characters/{characterId}/series` | List series in which a character appears |
//! | `/comics/{comicId}/series` | List series containing a comic |
//! | `/creators/{creatorId}/series` | List series a creator worked on |
//! | `/events/{eventId}/series` | List series in which an event takes place |
//! | `/stories/{storyId}/series` | List series in which a story appears |

pub mod types;

pub use types::response::Series;
