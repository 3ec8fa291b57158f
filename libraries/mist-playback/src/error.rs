//! Error types for playback management

use thiserror::Error;

use crate::transport::MediaErrorKind;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The media resource failed to load (terminal for that load attempt)
    #[error("Media error: {0}")]
    Media(MediaErrorKind),

    /// The environment refused to start playback (e.g. autoplay policy)
    #[error("Playback blocked by environment")]
    PlaybackBlocked,

    /// Queue index out of bounds
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
