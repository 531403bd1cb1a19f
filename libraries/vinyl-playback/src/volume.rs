//! Volume state with mute/unmute restoration
//!
//! The audio element contract takes a linear level in [0, 1], so no
//! perceptual scaling happens here; this module only tracks the level, the
//! muted flag and the level to restore on unmute.

use serde::{Deserialize, Serialize};

/// Tri-state volume indicator for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeIcon {
    /// Volume at or above 0.5
    Normal,

    /// Volume below 0.5 but audible
    Low,

    /// Volume exactly 0
    Muted,
}

impl VolumeIcon {
    /// Icon for a linear volume level
    pub fn for_level(level: f32) -> Self {
        if level == 0.0 {
            VolumeIcon::Muted
        } else if level < 0.5 {
            VolumeIcon::Low
        } else {
            VolumeIcon::Normal
        }
    }
}

/// Volume controller
///
/// `prev_level` holds the level stored by the last mute so unmute can
/// restore it. A slider dragged to zero flips the muted flag but does not
/// store into `prev_level`; only [`toggle_mute`](Self::toggle_mute) does.
#[derive(Debug, Clone)]
pub struct VolumeControl {
    /// Linear level (0.0-1.0), kept in sync with the element
    level: f32,

    /// Mute state
    muted: bool,

    /// Level to restore on unmute
    prev_level: f32,
}

impl VolumeControl {
    /// Create a new volume controller
    pub fn new(level: f32) -> Self {
        Self {
            level: level.clamp(0.0, 1.0),
            muted: false,
            prev_level: 1.0,
        }
    }

    /// Set the level, clamped to [0, 1]; returns the clamped value
    ///
    /// Leaves the muted flag alone: keyboard volume changes recompute the
    /// icon but do not enter the mute bookkeeping.
    pub fn set_level(&mut self, level: f32) -> f32 {
        self.level = level.clamp(0.0, 1.0);
        self.level
    }

    /// Current level (0.0-1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Set the muted flag without touching `prev_level`
    ///
    /// Used for the slider-at-zero path, which counts as muted for icon
    /// purposes but must not disturb the stored restore level.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Toggle mute state; returns the level to apply to the element
    ///
    /// Muting stores the current level and drops to zero. Unmuting restores
    /// the stored level, falling back to full volume when that was also zero.
    pub fn toggle_mute(&mut self) -> f32 {
        if self.muted {
            self.muted = false;
            self.level = if self.prev_level == 0.0 {
                1.0
            } else {
                self.prev_level
            };
        } else {
            self.prev_level = self.level;
            self.muted = true;
            self.level = 0.0;
        }
        self.level
    }

    /// Icon for the current level
    pub fn icon(&self) -> VolumeIcon {
        VolumeIcon::for_level(self.level)
    }
}

impl Default for VolumeControl {
    fn default() -> Self {
        Self::new(1.0)
    }
}
