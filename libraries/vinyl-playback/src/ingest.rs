//! File-to-track ingestion
//!
//! The controller never inspects file contents; the platform wraps each
//! selected file's bytes into a session-scoped object URL and passes the
//! name alongside.

use vinyl_core::Track;

/// One user-selected file, already wrapped into a playable reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// File name as reported by the picker, extension included
    pub name: String,

    /// Session-scoped object URL for the file's bytes
    pub object_url: String,
}

impl UploadedFile {
    /// Create an uploaded-file record
    pub fn new(name: impl Into<String>, object_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            object_url: object_url.into(),
        }
    }
}

/// Derive a playable track from an uploaded file
///
/// Title is the file name with its final extension removed; the artist is
/// the fixed local-file label and the id is freshly generated.
pub fn track_from_upload(file: &UploadedFile) -> Track {
    Track::local_file(strip_extension(&file.name), file.object_url.clone())
}

/// Remove the final `.ext` segment from a file name
///
/// Only the last dot-delimited segment goes; earlier dots stay
/// (`"a.b.mp3"` becomes `"a.b"`). Names without a dot pass through.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if !name[idx + 1..].is_empty() && !name[idx + 1..].contains('/') => &name[..idx],
        _ => name,
    }
}
