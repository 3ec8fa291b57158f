//! Error types for the catalog client

use mist_core::MistError;
use thiserror::Error;

/// Catalog client errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Invalid base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The catalog could not be reached (connect failure or timeout)
    #[error("Catalog unreachable: {0}")]
    Unreachable(String),

    /// HTTP request failed
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog reported an error code
    #[error("Catalog error {code}: {message}")]
    Api {
        /// Error code from the response envelope (or HTTP status)
        code: i64,
        /// Error message from the catalog
        message: String,
    },

    /// The response body did not match the expected shape
    #[error("Failed to parse catalog response: {0}")]
    Parse(String),

    /// The catalog returned a song entry without a media URL
    #[error("No media URL for '{0}'")]
    EmptyMediaUrl(String),

    /// IO error while writing a download
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

impl From<CatalogError> for MistError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Unreachable(m) => MistError::Network(m),
            CatalogError::Request(e) => MistError::Network(e.to_string()),
            CatalogError::Io(e) => MistError::Io(e),
            other => MistError::Catalog(other.to_string()),
        }
    }
}
