//! Catalog boundary types
//!
//! Narrowed, validated forms of the catalog's list payloads. The raw wire
//! shapes (dynamic JSON envelopes) stay inside the catalog implementation;
//! the rest of the player only ever sees these types.

use serde::{Deserialize, Serialize};

use super::ids::TrackId;
use super::track::Track;

/// A song reference from a ranking or search list
///
/// Carries display data only — no media URL. Converted to an unresolved
/// [`Track`] when enqueued; resolution happens lazily when the track is
/// about to play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSongRef {
    /// Catalog-scoped song identifier
    pub id: TrackId,

    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Cover image URL (may be empty for search results)
    pub cover_url: String,
}

impl RawSongRef {
    /// Convert into an unresolved queue track
    pub fn into_track(self) -> Track {
        Track::unresolved(self.id, self.title, self.artist, self.cover_url)
    }
}

/// The four curated ranking lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rankings {
    /// Fast-rising songs
    pub soaring: Vec<RawSongRef>,

    /// Currently hot songs
    pub hot: Vec<RawSongRef>,

    /// New releases
    pub new_songs: Vec<RawSongRef>,

    /// All-time popular songs
    pub popular: Vec<RawSongRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_ref_becomes_unresolved_track() {
        let raw = RawSongRef {
            id: TrackId::new("99"),
            title: "Echoes".to_string(),
            artist: "Canyon".to_string(),
            cover_url: "https://img.example.com/99.jpg".to_string(),
        };

        let track = raw.into_track();
        assert_eq!(track.id, TrackId::new("99"));
        assert_eq!(track.title, "Echoes");
        assert!(!track.is_resolved());
    }
}
