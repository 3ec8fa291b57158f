//! Library management
//!
//! The user's personal collections: a favorites list and named playlists,
//! persisted through a pluggable [`PersistenceStore`](mist_core::PersistenceStore).
//! Ships a JSON-file implementation; hosts with other storage (browser
//! local storage, a database) implement the trait themselves.
//!
//! # Example
//!
//! ```no_run
//! use mist_library::{JsonFileStore, LibraryStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut library = LibraryStore::open(Box::new(JsonFileStore::new("library.json")))?;
//! let playlist_id = library.create_playlist("Late night")?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod persist;
pub mod store;

pub use error::{LibraryError, Result};
pub use persist::JsonFileStore;
pub use store::LibraryStore;
