//! Playback engine
//!
//! The queue, the playback controller state machine, and the transport
//! abstraction they drive. Platform-agnostic: hosts implement
//! [`MediaTransport`] over whatever audio primitive they have and feed its
//! lifecycle events back into the [`PlaybackController`].
//!
//! # Example
//!
//! ```no_run
//! use mist_playback::{PlaybackController, PlayerConfig, MediaTransport};
//! # fn transport() -> Box<dyn MediaTransport> { unimplemented!() }
//!
//! let mut controller = PlaybackController::new(transport(), PlayerConfig::default());
//! // select a track, then pump transport events and drain player events
//! for event in controller.drain_events() {
//!     println!("{event:?}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod controller;
pub mod error;
pub mod events;
pub mod queue;
pub mod transport;
pub mod types;

pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use queue::Queue;
pub use transport::{MediaErrorKind, MediaTransport, TransportEvent};
pub use types::{Phase, PlaybackState, PlayerConfig, RepeatMode};
