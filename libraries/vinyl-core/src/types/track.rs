/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// Where a track's audio bytes come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackSource {
    /// A plain resolvable URL
    Remote {
        /// The audio URL
        url: String,
    },

    /// A session-scoped object URL created from a user upload.
    /// Only valid for the lifetime of the current page/session.
    Local {
        /// The object URL wrapping the uploaded bytes
        object_url: String,
    },
}

impl TrackSource {
    /// The reference to hand to the audio element
    pub fn url(&self) -> &str {
        match self {
            TrackSource::Remote { url } => url,
            TrackSource::Local { object_url } => object_url,
        }
    }

    /// Whether this source is only valid for the current session
    pub fn is_local(&self) -> bool {
        matches!(self, TrackSource::Local { .. })
    }
}

/// One playable audio item with display metadata and a source reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Where the audio bytes come from
    pub source: TrackSource,

    /// Album art image URL, if available
    pub album_art: Option<String>,
}

impl Track {
    /// Artist label applied to tracks created from user file uploads
    pub const LOCAL_FILE_ARTIST: &'static str = "Local File";

    /// Create a track backed by a remote URL
    pub fn remote(
        title: impl Into<String>,
        artist: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            artist: artist.into(),
            source: TrackSource::Remote { url: url.into() },
            album_art: None,
        }
    }

    /// Create a track from a user-uploaded file
    ///
    /// The object URL is a session-scoped reference to the file's bytes.
    pub fn local_file(title: impl Into<String>, object_url: impl Into<String>) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            artist: Self::LOCAL_FILE_ARTIST.to_string(),
            source: TrackSource::Local {
                object_url: object_url.into(),
            },
            album_art: None,
        }
    }

    /// Attach an album art URL
    #[must_use]
    pub fn with_album_art(mut self, url: impl Into<String>) -> Self {
        self.album_art = Some(url.into());
        self
    }

    /// Replace the generated ID with a fixed one (used for bundled tracks)
    #[must_use]
    pub fn with_id(mut self, id: TrackId) -> Self {
        self.id = id;
        self
    }

    /// Whether this track was created from a user file upload
    pub fn is_local(&self) -> bool {
        self.source.is_local()
    }
}
