//! Vinyl Player Core
//!
//! Domain types and error handling shared across the Vinyl Player crates.
//!
//! This crate defines:
//! - **Domain Types**: [`Track`], [`TrackId`], [`TrackSource`]
//! - **Error Handling**: the [`VinylError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use vinyl_core::Track;
//!
//! // A track streamed from a remote URL
//! let track = Track::remote(
//!     "Night Drive",
//!     "SoundHelix",
//!     "https://example.com/night-drive.mp3",
//! );
//! assert!(!track.is_local());
//!
//! // A track backed by a session-scoped object URL from a file upload
//! let upload = Track::local_file("my recording", "blob:abc123");
//! assert_eq!(upload.artist, Track::LOCAL_FILE_ARTIST);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

pub use error::{Result, VinylError};
pub use types::{Track, TrackId, TrackSource};
