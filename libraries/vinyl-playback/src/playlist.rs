//! Append-only playlist with a selection cursor
//!
//! The store owns track order and selection only; it has no knowledge of
//! play/pause state. Starting playback after a selection change is the
//! controller's decision.

use vinyl_core::Track;

/// Ordered, append-only collection of tracks plus a selection cursor
///
/// Invariants:
/// - an empty playlist has no selection
/// - a selection always points at an existing track
/// - appending never reorders existing tracks
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
    current_index: Option<usize>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            current_index: None,
        }
    }

    /// Append tracks, preserving their relative order
    ///
    /// If the playlist had no selection and is non-empty afterwards, the
    /// first track becomes selected. Returns `true` when that auto-selection
    /// fired, so the caller can bind the newly active track.
    pub fn add_tracks(&mut self, new_tracks: Vec<Track>) -> bool {
        self.tracks.extend(new_tracks);

        if self.current_index.is_none() && !self.tracks.is_empty() {
            self.current_index = Some(0);
            true
        } else {
            false
        }
    }

    /// Select the track at `index`
    ///
    /// Out-of-range indices are a silent no-op (`None`); selection and
    /// tracks are left unchanged. On success returns the new active track.
    pub fn select(&mut self, index: usize) -> Option<&Track> {
        if index >= self.tracks.len() {
            return None;
        }
        self.current_index = Some(index);
        self.tracks.get(index)
    }

    /// Index of the track after the current one, if any (no wraparound)
    pub fn next_index(&self) -> Option<usize> {
        let index = self.current_index?;
        (index + 1 < self.tracks.len()).then_some(index + 1)
    }

    /// Index of the track before the current one, if any (no wraparound)
    pub fn previous_index(&self) -> Option<usize> {
        self.current_index?.checked_sub(1)
    }

    /// Whether a track exists after the current one
    pub fn has_next(&self) -> bool {
        self.next_index().is_some()
    }

    /// Whether a track exists before the current one
    pub fn has_previous(&self) -> bool {
        self.previous_index().is_some()
    }

    /// The currently selected track
    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.current_index?)
    }

    /// The selection cursor
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Track at `index`
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// All tracks in insertion order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the playlist holds no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
