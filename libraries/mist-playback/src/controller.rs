//! Playback controller - core orchestration
//!
//! Binds the media transport to the queue: reacts to user intents
//! (select/play/pause/seek/skip) and to transport lifecycle events
//! (metadata, progress, ended, error), and keeps the single source of
//! truth for "current track" and "is playing".
//!
//! # Load generations
//!
//! Every track switch bumps a generation counter that is handed to the
//! transport on `load` and must come back attached to each event. Events
//! (and catalog resolutions) carrying a stale generation belong to a
//! superseded load and are discarded, so an abandoned load can never
//! corrupt the state of its successor.

use mist_core::types::Track;
use tracing::{debug, warn};

use crate::{
    error::{PlaybackError, Result},
    events::PlayerEvent,
    queue::Queue,
    transport::{MediaTransport, TransportEvent},
    types::{Phase, PlaybackState, PlayerConfig, RepeatMode},
};

/// Pressing "previous" this far into a track restarts it instead of
/// stepping back in the queue
const PREVIOUS_RESTART_THRESHOLD_SECS: f64 = 3.0;

/// The playback state machine
///
/// Phases: `Idle` (nothing loaded), `Loading` (track selected, media not
/// ready), `Playing`, `Paused`, `Error` (load failed, waiting for an
/// explicit user action). Selection always implies intent to play; there
/// is no "load without playing".
pub struct PlaybackController {
    transport: Box<dyn MediaTransport>,

    // State
    phase: Phase,
    current_track: Option<Track>,
    position_secs: f64,
    duration_secs: f64,
    volume: f64,

    // Queue and policy
    queue: Queue,
    repeat: RepeatMode,
    shuffle: bool,

    // Stale-load guard
    generation: u64,

    // Event buffer for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlaybackController {
    /// Create a new controller driving the given transport
    pub fn new(transport: Box<dyn MediaTransport>, config: PlayerConfig) -> Self {
        let volume = config.volume.clamp(0.0, 1.0);
        let mut controller = Self {
            transport,
            phase: Phase::Idle,
            current_track: None,
            position_secs: 0.0,
            duration_secs: 0.0,
            volume,
            queue: Queue::new(),
            repeat: config.repeat,
            shuffle: config.shuffle,
            generation: 0,
            pending_events: Vec::new(),
        };
        controller.transport.set_volume(volume);
        controller
    }

    // ===== User intents =====

    /// Select a track from a displayed list and start playing it
    ///
    /// `rest` is the remainder of the list the track was clicked in
    /// (ranking tab, search results, or playlist); it replaces the queue
    /// tail after the selected track, giving "click any song, continue
    /// with the rest of this list" semantics. Clicking the track that is
    /// already current only toggles play/pause.
    pub fn select_track(&mut self, track: Track, rest: Vec<Track>) {
        if let Some(current) = &self.current_track {
            if current.id == track.id && matches!(self.phase, Phase::Playing | Phase::Paused) {
                self.toggle_play_pause();
                return;
            }
        }

        self.queue.replace_tail(track.clone(), rest);
        self.emit_queue_changed();
        self.begin(track);
    }

    /// Flip between playing and paused on the current track
    pub fn toggle_play_pause(&mut self) {
        match self.phase {
            Phase::Playing => self.pause(),
            Phase::Paused => self.play(),
            _ => {}
        }
    }

    /// Resume playback of the current track
    ///
    /// If the environment refuses ([`PlaybackError::PlaybackBlocked`]),
    /// the controller stays paused and reports the refusal.
    pub fn play(&mut self) {
        if self.phase != Phase::Paused || self.current_track.is_none() {
            return;
        }

        match self.transport.play() {
            Ok(()) => self.set_phase(Phase::Playing),
            Err(_) => {
                warn!("environment refused to start playback");
                self.pending_events.push(PlayerEvent::PlaybackBlocked);
            }
        }
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if self.phase == Phase::Playing {
            self.transport.pause();
            self.set_phase(Phase::Paused);
        }
    }

    /// Skip forward under the current repeat/shuffle policy
    ///
    /// At the end of the queue with repeat off this is a no-op apart from
    /// freezing playback in `Paused`; the current track is unchanged.
    pub fn next(&mut self) {
        match self.queue.next(self.repeat, self.shuffle).cloned() {
            Some(track) => self.begin(track),
            None => {
                if self.phase == Phase::Playing {
                    self.transport.pause();
                }
                if self.current_track.is_some() {
                    self.set_phase(Phase::Paused);
                }
            }
        }
    }

    /// Step back in the queue
    ///
    /// More than a few seconds into a track this restarts it instead;
    /// otherwise the cursor moves back one entry (wrapping on repeat-all).
    /// Shuffle never affects backward navigation.
    pub fn previous(&mut self) {
        if self.position_secs > PREVIOUS_RESTART_THRESHOLD_SECS
            && matches!(self.phase, Phase::Playing | Phase::Paused)
        {
            self.transport.seek(0.0);
            self.position_secs = 0.0;
            return;
        }

        if let Some(track) = self.queue.previous(self.repeat).cloned() {
            self.begin(track);
        }
    }

    /// Seek within the current track (fire-and-forget, last seek wins)
    pub fn seek(&mut self, position_secs: f64) {
        if self.current_track.is_none() {
            return;
        }

        let clamped = if self.duration_secs > 0.0 {
            position_secs.clamp(0.0, self.duration_secs)
        } else {
            position_secs.max(0.0)
        };

        self.position_secs = clamped;
        self.transport.seek(clamped);
    }

    /// Set the volume, clamped to [0.0, 1.0]
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
        self.transport.set_volume(self.volume);
        self.pending_events.push(PlayerEvent::VolumeChanged {
            volume: self.volume,
        });
    }

    /// Set the repeat mode
    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        if self.repeat != repeat {
            self.repeat = repeat;
            self.pending_events.push(PlayerEvent::RepeatChanged { repeat });
        }
    }

    /// Advance the repeat mode through the UI cycle (off -> one -> all)
    pub fn cycle_repeat(&mut self) {
        self.set_repeat(self.repeat.cycled());
    }

    /// Toggle shuffle
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
        self.pending_events.push(PlayerEvent::ShuffleChanged {
            shuffle: self.shuffle,
        });
    }

    /// Jump to an arbitrary queue entry
    pub fn select_queue_index(&mut self, index: usize) -> Result<()> {
        let track = self
            .queue
            .select(index)
            .cloned()
            .ok_or(PlaybackError::IndexOutOfBounds(index))?;
        self.begin(track);
        Ok(())
    }

    /// Remove a queue entry
    ///
    /// The current track keeps playing even if its own entry is removed.
    pub fn remove_from_queue(&mut self, index: usize) -> Result<Track> {
        let removed = self
            .queue
            .remove_at(index)
            .ok_or(PlaybackError::IndexOutOfBounds(index))?;
        self.emit_queue_changed();
        Ok(removed)
    }

    /// Clear the queue (does not stop the current track)
    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.emit_queue_changed();
    }

    // ===== Transport callbacks =====

    /// Handle a transport lifecycle event
    ///
    /// Events whose generation does not match the latest load are stale
    /// and discarded.
    pub fn on_transport_event(&mut self, generation: u64, event: TransportEvent) {
        if generation != self.generation {
            debug!(
                stale = generation,
                current = self.generation,
                "discarding event from superseded load"
            );
            return;
        }

        match event {
            TransportEvent::MetadataLoaded { duration_secs } => {
                self.duration_secs = duration_secs;
                if self.phase == Phase::Loading {
                    // Selection always implies intent to play
                    self.set_phase(Phase::Paused);
                    self.play();
                }
            }
            TransportEvent::TimeUpdate { position_secs } => {
                self.position_secs = position_secs;
                self.pending_events.push(PlayerEvent::PositionUpdate {
                    position_secs,
                    duration_secs: self.duration_secs,
                });
            }
            TransportEvent::Ended => {
                if let Some(track) = &self.current_track {
                    self.pending_events.push(PlayerEvent::TrackFinished {
                        track_id: track.id.clone(),
                    });
                }
                match self.queue.next(self.repeat, self.shuffle).cloned() {
                    Some(track) => self.begin(track),
                    // Exhausted: freeze at the end of the queue
                    None => self.set_phase(Phase::Paused),
                }
            }
            TransportEvent::Error { kind } => {
                warn!(%kind, "media load failed");
                self.set_phase(Phase::Error);
                self.pending_events.push(PlayerEvent::Error {
                    message: PlaybackError::Media(kind).to_string(),
                });
            }
        }
    }

    // ===== Lazy resolution =====

    /// Supply the resolved form of the track a `ResolveRequested` event
    /// asked for
    ///
    /// Discarded if `generation` no longer matches (the user moved on
    /// while the catalog request was in flight).
    pub fn track_resolved(&mut self, generation: u64, track: Track) {
        if generation != self.generation {
            debug!(
                stale = generation,
                current = self.generation,
                "discarding resolution for superseded load"
            );
            return;
        }

        if !track.is_resolved() {
            self.set_phase(Phase::Error);
            self.pending_events.push(PlayerEvent::Error {
                message: format!("track {} resolved without a media url", track.id),
            });
            return;
        }

        // Keep the queue entry resolved so replaying it skips the catalog
        self.queue.replace_current(track.clone());
        self.transport.load(self.generation, &track.media_url);
        self.current_track = Some(track);
    }

    /// Report that resolution of the pending track failed
    pub fn resolve_failed(&mut self, generation: u64, message: impl Into<String>) {
        if generation != self.generation {
            return;
        }
        self.set_phase(Phase::Error);
        self.pending_events.push(PlayerEvent::Error {
            message: message.into(),
        });
    }

    // ===== State queries =====

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Currently selected track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// The play queue
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// The latest load generation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Owned snapshot of the observable playback state
    pub fn snapshot(&self) -> PlaybackState {
        PlaybackState {
            current_track: self.current_track.clone(),
            is_playing: self.phase == Phase::Playing,
            position_secs: self.position_secs,
            duration_secs: self.duration_secs,
            volume: self.volume,
            repeat: self.repeat,
            shuffle: self.shuffle,
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// The UI should call this after each intent or delivered callback to
    /// synchronize with playback state.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Start a track switch: bump the generation, enter Loading, and either
    /// load directly or ask the host to resolve the media URL first
    fn begin(&mut self, track: Track) {
        let previous_track_id = self.current_track.take().map(|t| t.id);

        self.generation += 1;
        self.position_secs = 0.0;
        self.duration_secs = 0.0;
        self.set_phase(Phase::Loading);
        self.pending_events.push(PlayerEvent::TrackChanged {
            track_id: track.id.clone(),
            previous_track_id,
        });

        if track.is_resolved() {
            self.transport.load(self.generation, &track.media_url);
        } else {
            debug!(track_id = %track.id, "queue entry unresolved, requesting catalog resolution");
            self.pending_events.push(PlayerEvent::ResolveRequested {
                generation: self.generation,
                track_id: track.id.clone(),
                title: track.title.clone(),
                artist: track.artist.clone(),
            });
        }

        self.current_track = Some(track);
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            self.phase = phase;
            self.pending_events.push(PlayerEvent::StateChanged { phase });
        }
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }
}
