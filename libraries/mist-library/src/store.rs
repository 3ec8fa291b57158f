//! Library store
//!
//! Owns the user's collections (favorites and named playlists) and keeps
//! them durable through an injected [`PersistenceStore`]. Every mutation is
//! committed in memory first and then saved; if the save fails the mutation
//! stands and the error is surfaced, so the session keeps working and only
//! durability is lost.

use mist_core::types::{Playlist, PlaylistId, Track, TrackId};
use mist_core::{LibraryCollections, PersistenceStore};
use tracing::{info, warn};

use crate::error::{LibraryError, Result};

/// Favorites and playlist management
pub struct LibraryStore {
    store: Box<dyn PersistenceStore>,
    collections: LibraryCollections,
}

impl LibraryStore {
    /// Open the library, hydrating collections from the backing store
    ///
    /// A store with no saved state yields an empty library.
    pub fn open(store: Box<dyn PersistenceStore>) -> Result<Self> {
        let collections = store
            .load()
            .map_err(|e| LibraryError::Persistence(e.to_string()))?
            .unwrap_or_default();

        info!(
            favorites = collections.favorites.len(),
            playlists = collections.playlists.len(),
            "library loaded"
        );

        Ok(Self { store, collections })
    }

    // ===== Favorites =====

    /// All favorited tracks, in the order they were added
    pub fn favorites(&self) -> &[Track] {
        &self.collections.favorites
    }

    /// Whether a track is favorited
    pub fn is_favorite(&self, track_id: &TrackId) -> bool {
        self.collections.favorites.iter().any(|t| &t.id == track_id)
    }

    /// Add a track to favorites
    ///
    /// # Errors
    /// [`LibraryError::Duplicate`] if the track is already favorited.
    pub fn add_favorite(&mut self, track: Track) -> Result<()> {
        if self.is_favorite(&track.id) {
            return Err(LibraryError::Duplicate(track.id.to_string()));
        }
        self.collections.favorites.push(track);
        self.persist()
    }

    /// Remove a track from favorites (no-op if it was not favorited)
    pub fn remove_favorite(&mut self, track_id: &TrackId) -> Result<()> {
        let before = self.collections.favorites.len();
        self.collections.favorites.retain(|t| &t.id != track_id);
        if self.collections.favorites.len() == before {
            return Ok(());
        }
        self.persist()
    }

    // ===== Playlists =====

    /// All playlists, oldest first
    pub fn playlists(&self) -> &[Playlist] {
        &self.collections.playlists
    }

    /// Look up a playlist by id
    pub fn playlist(&self, playlist_id: &PlaylistId) -> Option<&Playlist> {
        self.collections.playlists.iter().find(|p| &p.id == playlist_id)
    }

    /// Create a new empty playlist and return its id
    ///
    /// # Errors
    /// [`LibraryError::InvalidInput`] if the name is blank.
    pub fn create_playlist(&mut self, name: &str) -> Result<PlaylistId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LibraryError::InvalidInput(
                "playlist name cannot be empty".to_string(),
            ));
        }

        let playlist = Playlist::new(name);
        let id = playlist.id.clone();
        self.collections.playlists.push(playlist);
        self.persist()?;
        Ok(id)
    }

    /// Delete a playlist (no-op if it does not exist)
    pub fn remove_playlist(&mut self, playlist_id: &PlaylistId) -> Result<()> {
        let before = self.collections.playlists.len();
        self.collections.playlists.retain(|p| &p.id != playlist_id);
        if self.collections.playlists.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Add a track to a playlist
    ///
    /// # Errors
    /// [`LibraryError::PlaylistNotFound`] if the playlist does not exist;
    /// [`LibraryError::Duplicate`] if the track is already in it.
    pub fn add_to_playlist(&mut self, playlist_id: &PlaylistId, track: Track) -> Result<()> {
        let playlist = self
            .collections
            .playlists
            .iter_mut()
            .find(|p| &p.id == playlist_id)
            .ok_or_else(|| LibraryError::PlaylistNotFound(playlist_id.clone()))?;

        if playlist.contains(&track.id) {
            return Err(LibraryError::Duplicate(track.id.to_string()));
        }

        playlist.tracks.push(track);
        self.persist()
    }

    /// Remove a track from a playlist (no-op if the track is not in it)
    ///
    /// # Errors
    /// [`LibraryError::PlaylistNotFound`] if the playlist does not exist.
    pub fn remove_from_playlist(
        &mut self,
        playlist_id: &PlaylistId,
        track_id: &TrackId,
    ) -> Result<()> {
        let playlist = self
            .collections
            .playlists
            .iter_mut()
            .find(|p| &p.id == playlist_id)
            .ok_or_else(|| LibraryError::PlaylistNotFound(playlist_id.clone()))?;

        let before = playlist.tracks.len();
        playlist.tracks.retain(|t| &t.id != track_id);
        if playlist.tracks.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Owned snapshot of both collections (for display or export)
    pub fn collections(&self) -> LibraryCollections {
        self.collections.clone()
    }

    /// Write the current collections through to the backing store
    fn persist(&self) -> Result<()> {
        self.store.save(&self.collections).map_err(|e| {
            warn!(error = %e, "library save failed, in-memory state kept");
            LibraryError::Persistence(e.to_string())
        })
    }
}
