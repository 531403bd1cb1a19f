//! Player events
//!
//! Event-based communication for UI synchronization. The controller appends
//! events to an internal queue as it mutates state; the embedder drains them
//! after each call and redraws from the payloads, never the other way round.

use crate::volume::VolumeIcon;
use serde::{Deserialize, Serialize};
use vinyl_core::Track;

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The playlist contents or the active row changed
    ///
    /// Carries the full ordered track list so the presentation layer can
    /// redraw without querying back.
    PlaylistChanged {
        /// All tracks in insertion order
        tracks: Vec<Track>,
        /// Index of the active track, if any
        active_index: Option<usize>,
    },

    /// A different track became active
    TrackChanged {
        /// The new active track
        track: Track,
        /// Its playlist index
        index: usize,
    },

    /// Playback started or stopped
    PlayStateChanged {
        /// Whether the element is now playing
        playing: bool,
    },

    /// Playback position moved
    Progress {
        /// Current position in seconds
        position_secs: f64,
        /// Total duration in seconds, if known
        duration_secs: Option<f64>,
        /// Fractional progress in [0, 1] (0 when duration unknown)
        fraction: f64,
        /// Decorative tonearm angle, 0-15 degrees
        tracking_angle: f32,
        /// Elapsed-time label, `M:SS`
        elapsed: String,
    },

    /// The total duration became known or changed
    DurationChanged {
        /// Duration in seconds, if known
        duration_secs: Option<f64>,
        /// Duration label, `M:SS` (`"0:00"` when unknown)
        label: String,
    },

    /// Volume level or mute state changed
    VolumeChanged {
        /// Linear volume level (0.0-1.0)
        level: f32,
        /// Whether audio is muted
        muted: bool,
        /// Tri-state indicator for the volume icon
        icon: VolumeIcon,
    },

    /// The element reported a load/decode fault
    Error {
        /// Fault description
        message: String,
    },
}
