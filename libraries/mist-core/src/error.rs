//! Core error types for Mist Player

use thiserror::Error;

use crate::types::PlaylistId;

/// Result type alias using `MistError`
pub type Result<T> = std::result::Result<T, MistError>;

/// Core error type for Mist Player
///
/// Collaborator implementations map their own error types into these
/// variants at the trait boundary.
#[derive(Error, Debug)]
pub enum MistError {
    /// Catalog request failed (network unreachable, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Catalog returned an error response or an unusable payload
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Durable storage failed to read or write
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Download failed
    #[error("Download error: {0}")]
    Download(String),

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Duplicate entry
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
