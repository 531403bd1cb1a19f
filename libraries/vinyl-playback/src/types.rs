//! Core types for playback management

use serde::{Deserialize, Serialize};

/// Playback state
///
/// Mirrors the audio element's actual state; the controller only changes
/// `Playing`/`Paused` in response to element notifications, never on the
/// assumption that a play request will succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No track bound to the element yet
    Idle,

    /// A track is bound but playback is not running
    Paused,

    /// The element is playing
    Playing,

    /// The element reported a load/decode fault
    Error,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Volume applied to the element at construction (0.0-1.0, default: 1.0)
    pub initial_volume: f32,

    /// "Previous" restarts the current track instead of skipping back when
    /// playback is further in than this (seconds, default: 3.0)
    pub restart_threshold_secs: f64,

    /// Keyboard seek step for the arrow keys (seconds, default: 5.0)
    pub seek_step_secs: f64,

    /// Keyboard volume step for the arrow keys (default: 0.1)
    pub volume_step: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_volume: 1.0,
            restart_threshold_secs: 3.0,
            seek_step_secs: 5.0,
            volume_step: 0.1,
        }
    }
}
