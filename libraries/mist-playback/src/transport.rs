//! Platform-agnostic media transport
//!
//! Abstracts the underlying playable resource (an HTML audio element, a
//! native decoder pipeline, etc.). The transport plays exactly one resource
//! at a time; the controller is its sole driver.
//!
//! Lifecycle events flow back to the controller through
//! [`PlaybackController::on_transport_event`](crate::PlaybackController::on_transport_event),
//! tagged with the load generation the transport was given in [`MediaTransport::load`].
//! Events from a superseded load carry a stale generation and are discarded.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Why a media load failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaErrorKind {
    /// The resource could not be fetched
    Unreachable,

    /// The resource was fetched but cannot be decoded
    Unsupported,
}

impl fmt::Display for MediaErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaErrorKind::Unreachable => write!(f, "resource unreachable"),
            MediaErrorKind::Unsupported => write!(f, "resource unsupported"),
        }
    }
}

/// Lifecycle events emitted by a media transport
///
/// For a given load these arrive in causal order: `MetadataLoaded` before
/// any `TimeUpdate`, time updates non-decreasing while playing, and `Ended`
/// at most once, only after `MetadataLoaded`. `TimeUpdate` fires at a
/// throttled cadence, not every frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransportEvent {
    /// Media metadata is available; the resource is ready to play
    MetadataLoaded {
        /// Authoritative track duration in seconds
        duration_secs: f64,
    },

    /// Playback position progressed
    TimeUpdate {
        /// Current position in seconds
        position_secs: f64,
    },

    /// Playback reached the end of the resource
    Ended,

    /// The load or playback failed
    Error {
        /// Failure classification
        kind: MediaErrorKind,
    },
}

/// The audio playback primitive
///
/// Exactly one implementation instance is live system-wide. All operations
/// are non-blocking; loads complete (or fail) asynchronously via
/// [`TransportEvent`]s. Seek and volume are fire-and-forget: the last call
/// issued wins.
pub trait MediaTransport: Send {
    /// Begin loading a new resource, aborting any load in progress
    ///
    /// `generation` is the controller's load token; the transport must tag
    /// every event produced by this load with it.
    fn load(&mut self, generation: u64, media_url: &str);

    /// Request playback of the loaded resource
    ///
    /// # Errors
    /// Returns [`PlaybackError::PlaybackBlocked`](crate::PlaybackError::PlaybackBlocked)
    /// if the environment refuses to start playback; the caller treats this
    /// as "not playing" rather than a fault.
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Seek to a position in seconds
    fn seek(&mut self, position_secs: f64);

    /// Set the output volume (0.0-1.0; implementations may assume the
    /// caller has clamped)
    fn set_volume(&mut self, volume: f64);
}
