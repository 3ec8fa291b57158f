//! Track value type

use serde::{Deserialize, Serialize};

use super::ids::TrackId;

/// A single timed lyric line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricLine {
    /// Lyric text
    pub text: String,

    /// Timestamp from track start, in seconds
    pub timestamp_secs: f64,
}

/// A playable song unit
///
/// Immutable value: identity comes from `id`. The media URL is resolved
/// lazily — tracks enqueued from a ranking or search list start out with an
/// empty `media_url` and are resolved through the catalog when they are
/// about to play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique, catalog-scoped identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album cover image URL
    pub album_cover_url: String,

    /// Display-only duration hint (e.g. "3:45")
    ///
    /// Not authoritative; the real duration comes from the transport once
    /// the media has loaded.
    pub duration_hint: String,

    /// Resolvable media URL; empty until resolved
    pub media_url: String,

    /// Timed lyrics, if the catalog provided them
    pub lyrics: Option<Vec<LyricLine>>,
}

impl Track {
    /// Create an unresolved track from catalog list data
    ///
    /// Used for queue tails: no media URL, no lyrics, placeholder duration.
    pub fn unresolved(
        id: TrackId,
        title: impl Into<String>,
        artist: impl Into<String>,
        album_cover_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            album_cover_url: album_cover_url.into(),
            duration_hint: "0:00".to_string(),
            media_url: String::new(),
            lyrics: None,
        }
    }

    /// Whether this track has a usable media URL
    pub fn is_resolved(&self) -> bool {
        !self.media_url.is_empty()
    }
}
