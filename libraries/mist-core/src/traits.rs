//! Collaborator traits for Mist Player
//!
//! The playback core and the library store depend on these seams, never on
//! concrete network or filesystem code. `mist-catalog` provides the HTTP
//! implementations; tests substitute in-memory fakes.

use async_trait::async_trait;
use std::path::Path;

use crate::error::Result;
use crate::types::{LibraryCollections, Rankings, RawSongRef, Track};

/// Third-party song catalog
///
/// Rankings and search return display-only references; `resolve` turns a
/// reference into a playable [`Track`] with a usable media URL and lyrics.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetch the four curated ranking lists
    async fn fetch_rankings(&self) -> Result<Rankings>;

    /// Search the catalog
    async fn search(&self, query: &str) -> Result<Vec<RawSongRef>>;

    /// Resolve the `n`-th match for `query` into a playable track
    ///
    /// # Errors
    /// Fails if the catalog is unreachable, reports an error code, or
    /// returns an entry without a media URL.
    async fn resolve(&self, query: &str, n: u32) -> Result<Track>;
}

/// Durable key-value persistence for the library collections
///
/// A single blob, synchronous from the caller's point of view. Durability
/// is best-effort: a failed `save` is reported but never rolls back
/// in-memory state.
pub trait PersistenceStore: Send + Sync {
    /// Load the persisted collections; `None` if nothing was ever saved
    fn load(&self) -> Result<Option<LibraryCollections>>;

    /// Persist the collections, replacing any previous blob
    fn save(&self, collections: &LibraryCollections) -> Result<()>;
}

/// Media file downloader
///
/// Fire-and-forget from the player's perspective; not part of playback
/// state.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Download `media_url` to `dest_path`
    async fn download(&self, media_url: &str, dest_path: &Path) -> Result<()>;
}
