//! Wire formats for the upstream catalog services
//!
//! The catalog speaks loose JSON: numeric-or-string ids, a `code` field
//! inside the body instead of HTTP status, lyric timestamps as `mm:ss`
//! strings. Everything here is crate-private; payloads are narrowed into
//! [`mist_core`] types at the module boundary.

use mist_core::types::{LyricLine, RawSongRef, Track, TrackId};
use serde::Deserialize;
use tracing::debug;

use crate::error::{CatalogError, Result};

/// Song id as the catalog sends it (sometimes a number, sometimes a string)
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum WireId {
    Num(i64),
    Str(String),
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            WireId::Num(n) => n.to_string(),
            WireId::Str(s) => s,
        }
    }
}

/// Ranking list response: a bare `data` array, no code field
#[derive(Debug, Deserialize)]
pub(crate) struct RankingEnvelope {
    pub data: Vec<RankingItem>,
}

/// One entry of a ranking list
#[derive(Debug, Deserialize)]
pub(crate) struct RankingItem {
    pub id: WireId,
    pub song: String,
    pub singer: String,
    #[serde(default)]
    pub cover: String,
}

impl RankingItem {
    pub fn into_ref(self) -> RawSongRef {
        RawSongRef {
            id: TrackId::new(self.id.into_string()),
            title: self.song,
            artist: self.singer,
            cover_url: self.cover,
        }
    }
}

/// Search response envelope; `code != 200` means failure
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Vec<SearchItem>,
}

/// One search match
#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub id: WireId,
    pub name: String,
    pub singer: String,
    #[serde(default)]
    pub img: String,
}

impl SearchItem {
    pub fn into_ref(self) -> RawSongRef {
        RawSongRef {
            id: TrackId::new(self.id.into_string()),
            title: self.name,
            artist: self.singer,
            cover_url: self.img,
        }
    }
}

/// Song detail response; all fields except `code` are absent on failure
#[derive(Debug, Deserialize)]
pub(crate) struct SongDetail {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub id: Option<WireId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub img: String,
    /// Display duration like "3:45"
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub mp3: String,
    #[serde(default)]
    pub lyric: Vec<LyricEntry>,
}

/// One timed lyric line as the catalog sends it
#[derive(Debug, Deserialize)]
pub(crate) struct LyricEntry {
    /// Lyric text
    pub name: String,
    /// Timestamp like "01:23.45"
    pub time: String,
}

impl SongDetail {
    /// Narrow into a playable track
    ///
    /// # Errors
    /// [`CatalogError::EmptyMediaUrl`] if the entry carries no `mp3` URL.
    pub fn into_track(self) -> Result<Track> {
        if self.mp3.is_empty() {
            return Err(CatalogError::EmptyMediaUrl(self.name));
        }

        let lyrics = parse_lyrics(self.lyric);
        Ok(Track {
            id: TrackId::new(
                self.id
                    .map(WireId::into_string)
                    .unwrap_or_else(|| self.name.clone()),
            ),
            title: self.name,
            artist: self.author,
            album_cover_url: self.img,
            duration_hint: self.market.unwrap_or_else(|| "0:00".to_string()),
            media_url: self.mp3,
            lyrics,
        })
    }
}

/// Convert raw lyric entries into timed lines, dropping unparseable ones
fn parse_lyrics(entries: Vec<LyricEntry>) -> Option<Vec<LyricLine>> {
    if entries.is_empty() {
        return None;
    }

    let lines: Vec<LyricLine> = entries
        .into_iter()
        .filter_map(|entry| match parse_timestamp(&entry.time) {
            Some(timestamp_secs) => Some(LyricLine {
                text: entry.name,
                timestamp_secs,
            }),
            None => {
                debug!(time = %entry.time, "dropping lyric line with unparseable timestamp");
                None
            }
        })
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines)
    }
}

/// Parse a catalog timestamp (`mm:ss` or `mm:ss.frac`) into seconds
fn parse_timestamp(raw: &str) -> Option<f64> {
    let (minutes, seconds) = raw.trim().split_once(':')?;
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: f64 = seconds.parse().ok()?;
    if !(0.0..60.0).contains(&seconds) {
        return None;
    }
    Some(f64::from(minutes) * 60.0 + seconds)
}
