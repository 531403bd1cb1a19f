/// Core error types for Vinyl Player
use thiserror::Error;

/// Result type alias using `VinylError`
pub type Result<T> = std::result::Result<T, VinylError>;

/// Core error type for Vinyl Player
///
/// Boundary conditions (out-of-range selection, skipping past either end of
/// the playlist, seeking with an unknown duration) are silent no-ops, not
/// errors. Only genuine playback faults are represented here.
#[derive(Error, Debug)]
pub enum VinylError {
    /// The audio element reported a load or decode fault
    #[error("audio element fault: {0}")]
    ElementFault(String),

    /// An asynchronous play request was rejected by the host
    /// (e.g. an autoplay policy block)
    #[error("play request rejected: {0}")]
    PlayRejected(String),
}
