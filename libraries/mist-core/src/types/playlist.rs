//! Playlist and persisted-collection types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{PlaylistId, TrackId};
use super::track::Track;

/// A user-created playlist
///
/// Track ids are unique within one playlist; the same track may appear in
/// any number of different playlists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist identifier
    pub id: PlaylistId,

    /// User-visible name
    pub name: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Ordered tracks
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Create a new empty playlist with a generated id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            created_at: Utc::now(),
            tracks: Vec::new(),
        }
    }

    /// Whether the playlist already contains a track with this id
    pub fn contains(&self, track_id: &TrackId) -> bool {
        self.tracks.iter().any(|t| &t.id == track_id)
    }
}

/// The persisted library collections: favorites plus custom playlists
///
/// Serialized as a single blob by the `PersistenceStore`. Favorites have
/// set semantics keyed by track id but preserve insertion order for
/// display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryCollections {
    /// Favorite tracks, unique by id, in insertion order
    pub favorites: Vec<Track>,

    /// Custom playlists, in creation order
    pub playlists: Vec<Playlist>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_playlist_is_empty() {
        let playlist = Playlist::new("Road Trip");
        assert_eq!(playlist.name, "Road Trip");
        assert!(playlist.tracks.is_empty());
    }

    #[test]
    fn contains_checks_by_id() {
        let mut playlist = Playlist::new("Mix");
        playlist.tracks.push(Track::unresolved(
            TrackId::new("7"),
            "Song",
            "Artist",
            "cover.jpg",
        ));

        assert!(playlist.contains(&TrackId::new("7")));
        assert!(!playlist.contains(&TrackId::new("8")));
    }

    #[test]
    fn collections_default_is_empty() {
        let collections = LibraryCollections::default();
        assert!(collections.favorites.is_empty());
        assert!(collections.playlists.is_empty());
    }
}
