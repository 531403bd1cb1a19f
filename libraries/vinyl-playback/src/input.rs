//! Keyboard bindings
//!
//! Space toggles playback, left/right nudge the seek position, up/down nudge
//! the volume. All bindings are suppressed while a text input holds focus so
//! typing never drives the player.

use crate::controller::PlaybackController;
use serde::{Deserialize, Serialize};

/// Keys the player responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Toggle play/pause
    Space,

    /// Seek backward by the configured step
    ArrowLeft,

    /// Seek forward by the configured step
    ArrowRight,

    /// Volume up by the configured step
    ArrowUp,

    /// Volume down by the configured step
    ArrowDown,
}

impl PlaybackController {
    /// Apply a keyboard shortcut
    ///
    /// No-op while a text input holds focus. Volume arrows take the plain
    /// volume path: the muted flag is untouched even when the level reaches
    /// zero.
    pub fn handle_key(&mut self, key: Key, text_input_focused: bool) {
        if text_input_focused {
            return;
        }

        let seek_step = self.config().seek_step_secs;
        let volume_step = self.config().volume_step;

        match key {
            Key::Space => self.toggle_play(false),
            Key::ArrowLeft => self.seek_by(-seek_step),
            Key::ArrowRight => self.seek_by(seek_step),
            Key::ArrowUp => self.set_volume(self.volume_level() + volume_step),
            Key::ArrowDown => self.set_volume(self.volume_level() - volume_step),
        }
    }
}
