//! Derived display values
//!
//! Pure functions of element state, recomputed on every position/duration
//! notification. Nothing here touches the controller; the presentation layer
//! consumes these through [`PlayerEvent`](crate::PlayerEvent) payloads.

/// Title shown when the element reports a load/decode fault
pub const ERROR_TRACK_TITLE: &str = "Error loading track";

/// Upper bound of the decorative tonearm tracking angle, in degrees
pub const MAX_TRACKING_ANGLE_DEG: f64 = 15.0;

/// Format seconds as `M:SS`
///
/// Unknown values (non-finite, negative, zero) render as `"0:00"`, matching
/// a media element's NaN duration before metadata loads.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }

    let total = seconds as u64;
    let mins = total / 60;
    let secs = total % 60;
    format!("{mins}:{secs:02}")
}

/// Fractional playback progress in [0, 1]
///
/// Zero when the duration is unknown or zero.
pub fn progress_fraction(position_secs: f64, duration_secs: Option<f64>) -> f64 {
    match duration_secs {
        Some(duration) if duration > 0.0 => (position_secs / duration).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

/// Tonearm tracking angle for a progress fraction
///
/// Linear map of [0, 1] onto [0, 15] degrees.
pub fn tracking_angle(fraction: f64) -> f32 {
    (fraction.clamp(0.0, 1.0) * MAX_TRACKING_ANGLE_DEG) as f32
}

/// Pluralized track-count label, e.g. `"1 track"` / `"3 tracks"`
pub fn track_count_label(count: usize) -> String {
    if count == 1 {
        "1 track".to_string()
    } else {
        format!("{count} tracks")
    }
}
