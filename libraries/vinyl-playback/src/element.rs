//! Playback-primitive contract
//!
//! Abstracts the single audio element the controller drives. The platform
//! (a web view, a native media pipeline, a test harness) supplies the
//! implementation and feeds the element's notifications back into the
//! controller as [`ElementEvent`] values.

use serde::{Deserialize, Serialize};

/// The audio element the controller drives
///
/// Positions and durations are in seconds, volume is linear in [0, 1],
/// mirroring the media-element property model. `play` is a request only:
/// the host may reject it (autoplay policy), and the outcome arrives later
/// as [`ElementEvent::PlaybackStarted`] or [`ElementEvent::PlayRejected`].
pub trait AudioElement {
    /// Assign a new source reference
    fn set_source(&mut self, url: &str);

    /// Reload the current source; resets the position to zero
    fn load(&mut self);

    /// Request playback to start or resume
    fn play(&mut self);

    /// Pause playback
    fn pause(&mut self);

    /// Current playback position in seconds
    fn position(&self) -> f64;

    /// Move the playback position
    fn set_position(&mut self, secs: f64);

    /// Total duration in seconds, `None` until metadata is known
    fn duration(&self) -> Option<f64>;

    /// Current volume (0.0-1.0)
    fn volume(&self) -> f32;

    /// Set the volume (0.0-1.0)
    fn set_volume(&mut self, level: f32);

    /// Whether the element is currently paused
    fn paused(&self) -> bool;
}

/// Notifications delivered by the audio element
///
/// The embedder translates native element events into these and hands them
/// to [`PlaybackController::handle_element_event`](crate::PlaybackController::handle_element_event).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementEvent {
    /// A play request completed and playback is running
    PlaybackStarted,

    /// Playback paused
    PlaybackPaused,

    /// The playback position moved
    PositionChanged,

    /// The total duration became known or changed
    DurationChanged,

    /// The current track played to its natural end
    Ended,

    /// The element failed to load or decode the source
    Faulted {
        /// Host-provided fault description
        message: String,
    },

    /// A play request was rejected by the host
    PlayRejected {
        /// Host-provided rejection reason
        reason: String,
    },
}
