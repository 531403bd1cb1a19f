//! Playback controller - core orchestration
//!
//! Binds the playlist's active track to the audio element, exposes the
//! transport commands, and mirrors element state out as [`PlayerEvent`]s.

use crate::{
    display,
    element::{AudioElement, ElementEvent},
    events::PlayerEvent,
    ingest::{self, UploadedFile},
    playlist::Playlist,
    types::{PlaybackState, PlayerConfig},
    volume::{VolumeControl, VolumeIcon},
};
use vinyl_core::{Track, VinylError};

/// Central playback controller
///
/// Owns the playlist, the audio element, and the mirrored playback state.
/// All mutation funnels through its methods; observers receive the results
/// by draining the pending-event queue after each call.
///
/// Play requests are asynchronous: issuing one never changes state here.
/// The state flips to `Playing`/`Paused` only when the element reports it
/// through [`handle_element_event`](Self::handle_element_event).
pub struct PlaybackController {
    playlist: Playlist,
    element: Box<dyn AudioElement>,
    state: PlaybackState,
    volume: VolumeControl,
    config: PlayerConfig,

    // Title to surface; the fixed error label after a fault
    display_title: Option<String>,

    // Last fault reported by the element, cleared on the next track bind
    last_error: Option<VinylError>,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlaybackController {
    /// Create a controller around an audio element
    ///
    /// Applies the configured initial volume to the element and emits the
    /// matching `VolumeChanged` so indicators start in sync.
    pub fn new(mut element: Box<dyn AudioElement>, config: PlayerConfig) -> Self {
        let volume = VolumeControl::new(config.initial_volume);
        element.set_volume(volume.level());

        let mut controller = Self {
            playlist: Playlist::new(),
            element,
            state: PlaybackState::Idle,
            volume,
            config,
            display_title: None,
            last_error: None,
            pending_events: Vec::new(),
        };
        controller.emit_volume_changed();
        controller
    }

    // ===== Playlist =====

    /// Append tracks to the playlist
    ///
    /// Emits `PlaylistChanged`; if this was the first population, the first
    /// track is auto-selected and bound to the element (without starting
    /// playback).
    pub fn add_tracks(&mut self, new_tracks: Vec<Track>) {
        let auto_selected = self.playlist.add_tracks(new_tracks);
        self.emit_playlist_changed();

        if auto_selected {
            self.bind_current_track();
        }
    }

    /// Ingest user-selected files and append the derived tracks
    pub fn ingest_files(&mut self, files: Vec<UploadedFile>) {
        let tracks: Vec<Track> = files.iter().map(ingest::track_from_upload).collect();
        self.add_tracks(tracks);
    }

    // ===== Transport =====

    /// Select and bind the track at `index`
    ///
    /// Silent no-op when out of range. If the controller was playing, a play
    /// request is re-issued after the source swap so playback continues on
    /// the new track.
    pub fn play_track_at(&mut self, index: usize) {
        if self.playlist.select(index).is_none() {
            return;
        }
        self.emit_playlist_changed();
        self.bind_current_track();
    }

    /// Toggle between play and pause
    ///
    /// No-op on an empty playlist; the element is never touched. With
    /// `force_play` a play request is issued even while playing (used when a
    /// playlist row is clicked).
    pub fn toggle_play(&mut self, force_play: bool) {
        if self.playlist.is_empty() {
            return;
        }

        if force_play || self.element.paused() {
            self.element.play();
        } else {
            self.element.pause();
        }
    }

    /// Skip to the next track; no-op at the last one
    pub fn play_next(&mut self) {
        if let Some(next) = self.playlist.next_index() {
            self.play_track_at(next);
        }
    }

    /// Skip back, or restart the current track
    ///
    /// Past the restart threshold this resets the position to zero without
    /// changing tracks; before it, the previous track is selected. No-op at
    /// the first track near its start.
    pub fn play_previous(&mut self) {
        if self.element.position() > self.config.restart_threshold_secs {
            self.element.set_position(0.0);
            return;
        }

        if let Some(previous) = self.playlist.previous_index() {
            self.play_track_at(previous);
        }
    }

    // ===== Seek =====

    /// Seek to a fraction of the total duration
    ///
    /// No-op while the duration is unknown (source not loaded yet).
    pub fn seek_to(&mut self, fraction: f64) {
        let Some(duration) = self.element.duration().filter(|d| *d > 0.0) else {
            return;
        };
        self.element
            .set_position(fraction.clamp(0.0, 1.0) * duration);
    }

    /// Nudge the position by `delta_secs` (keyboard seek)
    ///
    /// Backward nudges clamp at zero; forward nudges clamp at the duration,
    /// which is treated as zero while unknown.
    pub fn seek_by(&mut self, delta_secs: f64) {
        let target = self.element.position() + delta_secs;
        let target = if delta_secs < 0.0 {
            target.max(0.0)
        } else {
            target.min(self.element.duration().unwrap_or(0.0))
        };
        self.element.set_position(target);
    }

    // ===== Volume =====

    /// Set the volume level (0.0-1.0, clamped)
    ///
    /// Leaves the muted flag alone; this is the keyboard/API path.
    pub fn set_volume(&mut self, level: f32) {
        let level = self.volume.set_level(level);
        self.element.set_volume(level);
        self.emit_volume_changed();
    }

    /// Set the volume from the slider
    ///
    /// Dragging to exactly zero counts as muted for icon purposes, but does
    /// not store into the unmute-restore level; the slider path and the
    /// mute-toggle path stay distinct.
    pub fn set_volume_from_slider(&mut self, level: f32) {
        let level = self.volume.set_level(level);
        self.volume.set_muted(level == 0.0);
        self.element.set_volume(level);
        self.emit_volume_changed();
    }

    /// Toggle mute; unmuting restores the pre-mute volume
    pub fn toggle_mute(&mut self) {
        let level = self.volume.toggle_mute();
        self.element.set_volume(level);
        self.emit_volume_changed();
    }

    // ===== Element notifications =====

    /// Consume a notification from the audio element
    pub fn handle_element_event(&mut self, event: ElementEvent) {
        match event {
            ElementEvent::PlaybackStarted => {
                self.state = PlaybackState::Playing;
                tracing::debug!("playback started");
                self.emit(PlayerEvent::PlayStateChanged { playing: true });
            }
            ElementEvent::PlaybackPaused => {
                self.state = PlaybackState::Paused;
                tracing::debug!("playback paused");
                self.emit(PlayerEvent::PlayStateChanged { playing: false });
            }
            ElementEvent::PositionChanged => {
                self.emit_progress();
            }
            ElementEvent::DurationChanged => {
                let duration = self.element.duration();
                self.emit(PlayerEvent::DurationChanged {
                    duration_secs: duration,
                    label: display::format_time(duration.unwrap_or(f64::NAN)),
                });
            }
            ElementEvent::Ended => {
                if self.playlist.has_next() {
                    // Chained advance: select, bind, and request play in one
                    // step, with no idle pause in between
                    self.play_next();
                    self.element.play();
                } else {
                    self.state = PlaybackState::Paused;
                    self.emit(PlayerEvent::PlayStateChanged { playing: false });
                }
            }
            ElementEvent::Faulted { message } => {
                let err = VinylError::ElementFault(message.clone());
                tracing::error!(error = %err, "audio element fault");
                self.state = PlaybackState::Error;
                self.display_title = Some(display::ERROR_TRACK_TITLE.to_string());
                self.last_error = Some(err);
                self.emit(PlayerEvent::Error { message });
            }
            ElementEvent::PlayRejected { reason } => {
                // Terminal for this attempt; never retried, state unchanged
                let err = VinylError::PlayRejected(reason);
                tracing::warn!(error = %err, "play request rejected");
            }
        }
    }

    // ===== State queries =====

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// The controller's configuration
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// The playlist
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// The currently active track
    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.current()
    }

    /// Current element position in seconds
    pub fn position(&self) -> f64 {
        self.element.position()
    }

    /// Current element duration in seconds, if known
    pub fn duration(&self) -> Option<f64> {
        self.element.duration()
    }

    /// Current volume level (0.0-1.0)
    pub fn volume_level(&self) -> f32 {
        self.volume.level()
    }

    /// Whether audio is muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Tri-state indicator for the volume icon
    pub fn volume_icon(&self) -> VolumeIcon {
        self.volume.icon()
    }

    /// Title to display: the active track's, or the fixed error label
    pub fn display_title(&self) -> Option<&str> {
        self.display_title.as_deref()
    }

    /// Last fault reported by the element, cleared on the next track bind
    pub fn last_error(&self) -> Option<&VinylError> {
        self.last_error.as_ref()
    }

    /// Whether the previous-skip control should be enabled
    ///
    /// Unavailable only at the first track (or with nothing selected) while
    /// still within the restart threshold.
    pub fn can_skip_previous(&self) -> bool {
        let at_first = self.playlist.current_index().map_or(true, |i| i == 0);
        !(at_first && self.element.position() <= self.config.restart_threshold_secs)
    }

    /// Whether the next-skip control should be enabled
    pub fn can_skip_next(&self) -> bool {
        self.playlist.has_next()
    }

    // ===== Events =====

    /// Take all pending events (clears the queue)
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Bind the playlist's active track to the element
    ///
    /// Assigns the source, reloads (position resets to zero), refreshes the
    /// display title, and re-issues a play request when the controller was
    /// already playing. A fault display is cleared by binding a new track.
    fn bind_current_track(&mut self) {
        let Some(index) = self.playlist.current_index() else {
            return;
        };
        let Some(track) = self.playlist.current().cloned() else {
            return;
        };

        self.element.set_source(track.source.url());
        self.element.load();
        self.display_title = Some(track.title.clone());
        self.last_error = None;

        if self.state == PlaybackState::Idle || self.state == PlaybackState::Error {
            self.state = PlaybackState::Paused;
        }

        tracing::debug!(track = %track.id, index, "track bound");
        self.emit(PlayerEvent::TrackChanged { track, index });

        if self.state == PlaybackState::Playing {
            self.element.play();
        }
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }

    fn emit_playlist_changed(&mut self) {
        self.emit(PlayerEvent::PlaylistChanged {
            tracks: self.playlist.tracks().to_vec(),
            active_index: self.playlist.current_index(),
        });
    }

    fn emit_progress(&mut self) {
        let position = self.element.position();
        let duration = self.element.duration();
        let fraction = display::progress_fraction(position, duration);

        self.emit(PlayerEvent::Progress {
            position_secs: position,
            duration_secs: duration,
            fraction,
            tracking_angle: display::tracking_angle(fraction),
            elapsed: display::format_time(position),
        });
    }

    fn emit_volume_changed(&mut self) {
        self.emit(PlayerEvent::VolumeChanged {
            level: self.volume.level(),
            muted: self.volume.is_muted(),
            icon: self.volume.icon(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::fake::FakeElement;
    use crate::samples::sample_tracks;

    fn controller_with_element() -> (PlaybackController, FakeElement) {
        let element = FakeElement::new();
        let handle = element.clone();
        let controller = PlaybackController::new(Box::new(element), PlayerConfig::default());
        (controller, handle)
    }

    fn drain(controller: &mut PlaybackController) -> Vec<PlayerEvent> {
        controller.drain_events()
    }

    #[test]
    fn construction_applies_initial_volume() {
        let (mut controller, element) = controller_with_element();
        assert_eq!(element.state.borrow().volume, 1.0);

        let events = drain(&mut controller);
        assert!(matches!(
            events.as_slice(),
            [PlayerEvent::VolumeChanged { level, .. }] if *level == 1.0
        ));
    }

    #[test]
    fn toggle_play_on_empty_playlist_never_touches_element() {
        let (mut controller, element) = controller_with_element();
        controller.toggle_play(false);
        controller.toggle_play(true);

        assert_eq!(element.state.borrow().play_requests, 0);
        assert_eq!(element.state.borrow().pause_requests, 0);
    }

    #[test]
    fn first_population_binds_track_without_playing() {
        let (mut controller, element) = controller_with_element();
        drain(&mut controller);

        controller.add_tracks(sample_tracks());

        assert_eq!(controller.state(), PlaybackState::Paused);
        assert_eq!(element.state.borrow().play_requests, 0);
        assert_eq!(element.state.borrow().load_count, 1);
        assert_eq!(
            element.state.borrow().source.as_deref(),
            Some("https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3")
        );

        let events = drain(&mut controller);
        assert!(matches!(events[0], PlayerEvent::PlaylistChanged { .. }));
        assert!(
            matches!(&events[1], PlayerEvent::TrackChanged { index, .. } if *index == 0)
        );
    }

    #[test]
    fn toggle_play_requests_play_when_paused_and_pause_when_playing() {
        let (mut controller, element) = controller_with_element();
        controller.add_tracks(sample_tracks());

        controller.toggle_play(false);
        assert_eq!(element.state.borrow().play_requests, 1);

        element.state.borrow_mut().paused = false;
        controller.handle_element_event(ElementEvent::PlaybackStarted);
        controller.toggle_play(false);
        assert_eq!(element.state.borrow().pause_requests, 1);
    }

    #[test]
    fn force_play_requests_play_even_while_playing() {
        let (mut controller, element) = controller_with_element();
        controller.add_tracks(sample_tracks());
        element.state.borrow_mut().paused = false;

        controller.toggle_play(true);
        assert_eq!(element.state.borrow().play_requests, 1);
        assert_eq!(element.state.borrow().pause_requests, 0);
    }

    #[test]
    fn selecting_another_track_while_playing_re_issues_play() {
        let (mut controller, element) = controller_with_element();
        controller.add_tracks(sample_tracks());
        controller.handle_element_event(ElementEvent::PlaybackStarted);

        controller.play_track_at(2);

        assert_eq!(controller.playlist().current_index(), Some(2));
        assert_eq!(element.state.borrow().play_requests, 1);
        assert_eq!(controller.state(), PlaybackState::Playing);
    }

    #[test]
    fn play_rejection_leaves_state_unchanged() {
        let (mut controller, _element) = controller_with_element();
        controller.add_tracks(sample_tracks());
        drain(&mut controller);

        controller.handle_element_event(ElementEvent::PlayRejected {
            reason: "autoplay blocked".to_string(),
        });

        assert_eq!(controller.state(), PlaybackState::Paused);
        assert!(drain(&mut controller).is_empty());
    }

    #[test]
    fn seek_to_without_duration_is_a_no_op() {
        let (mut controller, element) = controller_with_element();
        controller.add_tracks(sample_tracks());
        element.state.borrow_mut().position = 10.0;

        controller.seek_to(0.5);
        assert_eq!(element.state.borrow().position, 10.0);
    }

    #[test]
    fn seek_to_fraction_of_known_duration() {
        let (mut controller, element) = controller_with_element();
        controller.add_tracks(sample_tracks());
        element.state.borrow_mut().duration = Some(180.0);

        controller.seek_to(0.5);
        assert_eq!(element.state.borrow().position, 90.0);

        controller.seek_to(1.5);
        assert_eq!(element.state.borrow().position, 180.0);
    }

    #[test]
    fn seek_by_clamps_at_track_edges() {
        let (mut controller, element) = controller_with_element();
        controller.add_tracks(sample_tracks());
        element.state.borrow_mut().duration = Some(60.0);
        element.state.borrow_mut().position = 2.0;

        controller.seek_by(-5.0);
        assert_eq!(element.state.borrow().position, 0.0);

        element.state.borrow_mut().position = 58.0;
        controller.seek_by(5.0);
        assert_eq!(element.state.borrow().position, 60.0);
    }

    #[test]
    fn forward_seek_with_unknown_duration_clamps_to_zero() {
        let (mut controller, element) = controller_with_element();
        controller.add_tracks(sample_tracks());
        element.state.borrow_mut().position = 10.0;

        controller.seek_by(5.0);
        assert_eq!(element.state.borrow().position, 0.0);
    }

    #[test]
    fn backward_seek_with_unknown_duration_still_works() {
        let (mut controller, element) = controller_with_element();
        controller.add_tracks(sample_tracks());
        element.state.borrow_mut().position = 10.0;

        controller.seek_by(-5.0);
        assert_eq!(element.state.borrow().position, 5.0);
    }

    #[test]
    fn volume_slider_at_zero_sets_muted_flag() {
        let (mut controller, _element) = controller_with_element();
        drain(&mut controller);

        controller.set_volume_from_slider(0.0);
        assert!(controller.is_muted());
        assert_eq!(controller.volume_icon(), VolumeIcon::Muted);

        controller.set_volume_from_slider(0.3);
        assert!(!controller.is_muted());
        assert_eq!(controller.volume_icon(), VolumeIcon::Low);
    }

    #[test]
    fn keyboard_volume_to_zero_does_not_set_muted_flag() {
        let (mut controller, _element) = controller_with_element();
        controller.set_volume(0.0);

        assert!(!controller.is_muted());
        assert_eq!(controller.volume_icon(), VolumeIcon::Muted);
    }

    #[test]
    fn mute_toggle_round_trip_restores_volume() {
        let (mut controller, element) = controller_with_element();
        controller.set_volume(0.7);

        controller.toggle_mute();
        assert!(controller.is_muted());
        assert_eq!(element.state.borrow().volume, 0.0);

        controller.toggle_mute();
        assert!(!controller.is_muted());
        assert_eq!(element.state.borrow().volume, 0.7);
    }

    #[test]
    fn skip_availability_truth_table() {
        let (mut controller, element) = controller_with_element();

        // Empty playlist: both unavailable
        assert!(!controller.can_skip_previous());
        assert!(!controller.can_skip_next());

        controller.add_tracks(sample_tracks());

        // First track, near start
        assert!(!controller.can_skip_previous());
        assert!(controller.can_skip_next());

        // First track, past the threshold: previous restarts
        element.state.borrow_mut().position = 4.0;
        assert!(controller.can_skip_previous());

        // Last track
        element.state.borrow_mut().position = 0.0;
        controller.play_track_at(3);
        assert!(controller.can_skip_previous());
        assert!(!controller.can_skip_next());
    }

    #[test]
    fn fault_sets_error_state_and_fixed_title() {
        let (mut controller, _element) = controller_with_element();
        controller.add_tracks(sample_tracks());
        drain(&mut controller);

        controller.handle_element_event(ElementEvent::Faulted {
            message: "network error".to_string(),
        });

        assert_eq!(controller.state(), PlaybackState::Error);
        assert_eq!(controller.display_title(), Some(display::ERROR_TRACK_TITLE));
        assert!(controller.last_error().is_some());
        // Playlist untouched, no auto-advance
        assert_eq!(controller.playlist().len(), 4);
        assert_eq!(controller.playlist().current_index(), Some(0));

        let events = drain(&mut controller);
        assert!(matches!(
            events.as_slice(),
            [PlayerEvent::Error { message }] if message == "network error"
        ));
    }

    #[test]
    fn binding_a_new_track_clears_the_fault() {
        let (mut controller, _element) = controller_with_element();
        controller.add_tracks(sample_tracks());
        controller.handle_element_event(ElementEvent::Faulted {
            message: "network error".to_string(),
        });

        controller.play_track_at(1);

        assert_eq!(controller.state(), PlaybackState::Paused);
        assert!(controller.last_error().is_none());
        assert_eq!(controller.display_title(), Some("Summer Breeze"));
    }

    #[test]
    fn progress_notification_emits_derived_values() {
        let (mut controller, element) = controller_with_element();
        controller.add_tracks(sample_tracks());
        element.state.borrow_mut().duration = Some(180.0);
        element.state.borrow_mut().position = 90.0;
        drain(&mut controller);

        controller.handle_element_event(ElementEvent::PositionChanged);

        let events = drain(&mut controller);
        match events.as_slice() {
            [PlayerEvent::Progress {
                position_secs,
                fraction,
                tracking_angle,
                elapsed,
                ..
            }] => {
                assert_eq!(*position_secs, 90.0);
                assert_eq!(*fraction, 0.5);
                assert_eq!(*tracking_angle, 7.5);
                assert_eq!(elapsed, "1:30");
            }
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn duration_notification_emits_label() {
        let (mut controller, element) = controller_with_element();
        controller.add_tracks(sample_tracks());
        element.state.borrow_mut().duration = Some(599.0);
        drain(&mut controller);

        controller.handle_element_event(ElementEvent::DurationChanged);

        let events = drain(&mut controller);
        assert!(matches!(
            events.as_slice(),
            [PlayerEvent::DurationChanged { label, .. }] if label == "9:59"
        ));
    }
}
