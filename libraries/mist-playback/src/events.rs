//! Player events
//!
//! Event-based communication for UI synchronization. The controller pushes
//! events into a pending buffer as it reacts to intents and transport
//! callbacks; the host drains them with
//! [`PlaybackController::drain_events`](crate::PlaybackController::drain_events).

use mist_core::types::TrackId;
use serde::{Deserialize, Serialize};

use crate::types::{Phase, RepeatMode};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Controller phase changed (loading, playing, paused, ...)
    StateChanged {
        /// The new phase
        phase: Phase,
    },

    /// Current track changed
    TrackChanged {
        /// ID of the new current track
        track_id: TrackId,
        /// ID of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// The selected track has no media URL yet; the host should resolve it
    /// through the catalog and call
    /// [`PlaybackController::track_resolved`](crate::PlaybackController::track_resolved)
    /// with the same generation
    ResolveRequested {
        /// Load generation guarding against stale resolutions
        generation: u64,
        /// Track awaiting resolution
        track_id: TrackId,
        /// Title, for building the catalog query
        title: String,
        /// Artist, for building the catalog query
        artist: String,
    },

    /// Current track finished playing naturally
    TrackFinished {
        /// ID of the finished track
        track_id: TrackId,
    },

    /// Playback position progressed
    PositionUpdate {
        /// Current position in seconds
        position_secs: f64,
        /// Track duration in seconds
        duration_secs: f64,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume (0.0-1.0, already clamped)
        volume: f64,
    },

    /// Queue contents changed (tracks added/removed/replaced)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Repeat mode changed
    RepeatChanged {
        /// The new repeat mode
        repeat: RepeatMode,
    },

    /// Shuffle toggled
    ShuffleChanged {
        /// The new shuffle state
        shuffle: bool,
    },

    /// The environment refused to start playback; state reverted to Paused
    PlaybackBlocked,

    /// A load or resolution failed
    Error {
        /// Human-readable failure description
        message: String,
    },
}
