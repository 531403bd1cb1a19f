//! Bundled sample tracks
//!
//! Demo set used to populate the playlist at startup so the player is
//! usable before any files are uploaded.

use vinyl_core::{Track, TrackId};

/// The four bundled SoundHelix demo tracks
pub fn sample_tracks() -> Vec<Track> {
    vec![
        Track::remote(
            "Chill Vibes",
            "SoundHelix",
            "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3",
        )
        .with_album_art("https://picsum.photos/seed/album1/300/300")
        .with_id(TrackId::new("track-1")),
        Track::remote(
            "Summer Breeze",
            "SoundHelix",
            "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3",
        )
        .with_album_art("https://picsum.photos/seed/album2/300/300")
        .with_id(TrackId::new("track-2")),
        Track::remote(
            "Night Drive",
            "SoundHelix",
            "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-3.mp3",
        )
        .with_album_art("https://picsum.photos/seed/album3/300/300")
        .with_id(TrackId::new("track-3")),
        Track::remote(
            "Morning Coffee",
            "SoundHelix",
            "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-4.mp3",
        )
        .with_album_art("https://picsum.photos/seed/album4/300/300")
        .with_id(TrackId::new("track-4")),
    ]
}
