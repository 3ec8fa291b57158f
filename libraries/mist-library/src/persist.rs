//! JSON file persistence
//!
//! The whole library (favorites plus playlists) is one serialized
//! [`LibraryCollections`] blob, loaded once at startup and rewritten after
//! every mutation. The collections are small enough that rewriting the
//! full blob is cheaper than tracking deltas.

use std::fs;
use std::path::{Path, PathBuf};

use mist_core::{LibraryCollections, MistError, PersistenceStore};
use tracing::debug;

/// Persists the library as a single JSON file
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path
    ///
    /// The file (and its parent directories) are created lazily on the
    /// first save; a missing file loads as an empty library.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceStore for JsonFileStore {
    fn load(&self) -> mist_core::Result<Option<LibraryCollections>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no library file yet, starting empty");
                return Ok(None);
            }
            Err(e) => return Err(MistError::Io(e)),
        };

        let collections = serde_json::from_slice(&bytes)?;
        Ok(Some(collections))
    }

    fn save(&self, collections: &LibraryCollections) -> mist_core::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec_pretty(collections)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "library saved");
        Ok(())
    }
}
