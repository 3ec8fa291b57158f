//! Core types for playback management

use mist_core::types::Track;
use serde::{Deserialize, Serialize};

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when queue ends
    Off,

    /// Loop current track only
    One,

    /// Loop entire queue
    All,
}

impl RepeatMode {
    /// Next mode in the UI cycle: Off -> One -> All -> Off
    pub fn cycled(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::One,
            RepeatMode::One => RepeatMode::All,
            RepeatMode::All => RepeatMode::Off,
        }
    }
}

/// Controller lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No track loaded
    Idle,

    /// Track selected, media not ready yet
    Loading,

    /// Playing audio
    Playing,

    /// Paused mid-track (or frozen at end of queue)
    Paused,

    /// Last load failed; waiting for an explicit user action
    Error,
}

/// Read-only snapshot of playback state for the UI
///
/// `current_track` is an owned copy; it may differ from the queue entry at
/// the cursor only transiently during a track switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Currently selected track, if any
    pub current_track: Option<Track>,

    /// Whether audio is actively playing
    ///
    /// Invariant: `is_playing` implies `current_track.is_some()`.
    pub is_playing: bool,

    /// Current position in seconds
    pub position_secs: f64,

    /// Track duration in seconds (0.0 until metadata has loaded)
    pub duration_secs: f64,

    /// Volume, 0.0 to 1.0 inclusive
    pub volume: f64,

    /// Current repeat mode
    pub repeat: RepeatMode,

    /// Whether shuffle is active
    pub shuffle: bool,
}

/// Initial configuration for the playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume (0.0-1.0, default: 1.0)
    pub volume: f64,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Initial shuffle state (default: off)
    pub shuffle: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            repeat: RepeatMode::Off,
            shuffle: false,
        }
    }
}
