//! Vinyl Player - Playback Management
//!
//! Platform-agnostic playlist and playback-state management.
//!
//! This crate provides:
//! - Append-only playlist with a selection cursor
//! - Transport commands (play/pause toggle, next, previous-with-restart)
//! - Volume control with mute/unmute restoration
//! - Seek by fraction or by keyboard step
//! - File-to-track ingestion for user uploads
//! - Derived display values (time labels, progress, tonearm angle)
//!
//! # Architecture
//!
//! `vinyl-playback` never touches a real audio device or the DOM. The
//! platform supplies the playback primitive behind the [`AudioElement`]
//! trait and feeds its notifications back in as [`ElementEvent`] values;
//! the controller mirrors the resulting state out as [`PlayerEvent`]s,
//! which the embedder drains after each call and renders from.
//!
//! Everything runs on one control thread: no command blocks, and the only
//! asynchronous operation is the play request, whose acceptance or
//! rejection arrives later as an element notification.
//!
//! # Example
//!
//! ```rust
//! use vinyl_playback::{
//!     AudioElement, ElementEvent, PlaybackController, PlaybackState, PlayerConfig,
//! };
//!
//! // Platform-provided audio element (a real embedder wraps a media element)
//! struct SilentElement {
//!     source: Option<String>,
//!     position: f64,
//!     volume: f32,
//!     paused: bool,
//! }
//!
//! impl AudioElement for SilentElement {
//!     fn set_source(&mut self, url: &str) {
//!         self.source = Some(url.to_string());
//!     }
//!     fn load(&mut self) {
//!         self.position = 0.0;
//!     }
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn position(&self) -> f64 {
//!         self.position
//!     }
//!     fn set_position(&mut self, secs: f64) {
//!         self.position = secs;
//!     }
//!     fn duration(&self) -> Option<f64> {
//!         None
//!     }
//!     fn volume(&self) -> f32 {
//!         self.volume
//!     }
//!     fn set_volume(&mut self, level: f32) {
//!         self.volume = level;
//!     }
//!     fn paused(&self) -> bool {
//!         self.paused
//!     }
//! }
//!
//! let element = SilentElement {
//!     source: None,
//!     position: 0.0,
//!     volume: 1.0,
//!     paused: true,
//! };
//! let mut player = PlaybackController::new(Box::new(element), PlayerConfig::default());
//!
//! // Populate with the bundled demo set; the first track auto-binds
//! player.add_tracks(vinyl_playback::sample_tracks());
//! assert_eq!(player.state(), PlaybackState::Paused);
//!
//! // Request playback; the element reports the outcome asynchronously
//! player.toggle_play(false);
//! player.handle_element_event(ElementEvent::PlaybackStarted);
//! assert_eq!(player.state(), PlaybackState::Playing);
//!
//! // Forward pending events to the presentation layer
//! let events = player.drain_events();
//! assert!(!events.is_empty());
//! ```

mod controller;
pub mod display;
mod element;
mod events;
mod ingest;
mod input;
mod playlist;
mod samples;
pub mod types;
mod volume;

// Public exports
pub use controller::PlaybackController;
pub use element::{AudioElement, ElementEvent};
pub use events::PlayerEvent;
pub use ingest::{track_from_upload, UploadedFile};
pub use input::Key;
pub use playlist::Playlist;
pub use samples::sample_tracks;
pub use types::{PlaybackState, PlayerConfig};
pub use volume::{VolumeControl, VolumeIcon};

// Re-export the domain types so embedders need only one crate
pub use vinyl_core::{Track, TrackId, TrackSource, VinylError};
