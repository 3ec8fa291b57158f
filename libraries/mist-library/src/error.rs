//! Error types for library management

use mist_core::types::PlaylistId;
use thiserror::Error;

/// Library errors
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Entry already present in the target collection
    #[error("Already in collection: {0}")]
    Duplicate(String),

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Rejected input (empty playlist name, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The backing store failed; the in-memory change was kept
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;

impl From<LibraryError> for mist_core::MistError {
    fn from(e: LibraryError) -> Self {
        use mist_core::MistError;
        match e {
            LibraryError::Duplicate(entry) => MistError::Duplicate(entry),
            LibraryError::PlaylistNotFound(id) => MistError::PlaylistNotFound(id),
            LibraryError::InvalidInput(m) => MistError::InvalidInput(m),
            LibraryError::Persistence(m) => MistError::Persistence(m),
        }
    }
}
