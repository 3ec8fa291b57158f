//! Mist Player Core
//!
//! Platform-agnostic core types, collaborator traits, and error handling for
//! Mist Player.
//!
//! The core crate defines:
//! - **Domain Types**: [`Track`], [`Playlist`], [`LibraryCollections`], id newtypes
//! - **Collaborator Traits**: [`CatalogService`], [`PersistenceStore`], [`Downloader`]
//! - **Error Handling**: unified [`MistError`] and [`Result`] types
//!
//! The playback engine (`mist-playback`) and the library store
//! (`mist-library`) consume these types; concrete network-facing
//! collaborators live in `mist-catalog`.
//!
//! # Example
//!
//! ```rust
//! use mist_core::types::{Track, TrackId};
//!
//! // A catalog reference that has not been resolved to a media URL yet
//! let track = Track::unresolved(
//!     TrackId::new("1207"),
//!     "Night Drive",
//!     "The Streetlights",
//!     "https://img.example.com/cover.jpg",
//! );
//! assert!(!track.is_resolved());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{MistError, Result};
pub use traits::{CatalogService, Downloader, PersistenceStore};
pub use types::{
    LibraryCollections, LyricLine, Playlist, PlaylistId, Rankings, RawSongRef, Track, TrackId,
};
