//! The `creators` collection: writers, artists, editors and everyone else credited on a comic.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/creators` | List creators |
//! | `/creators/{creatorId}` | Fetch a single creator by ID |
//! | `/comics/{comicId}/creators` | List creators who worked on a comic |
//! | `/events/{eventId}/creators` | List creators who worked on an event |
//! | `/series/{seriesId}/creators` | List creators who worked on a series |
//! | `/stories/{storyId}/creators` | List creators who worked on a story |

pub mod types;

pub use types::response::Creator;
