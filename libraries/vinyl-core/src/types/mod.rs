//! Domain types for Vinyl Player

mod ids;
mod track;

pub use ids::TrackId;
pub use track::{Track, TrackSource};
