//! Play queue with cursor-based navigation
//!
//! The queue is an ordered sequence of tracks plus a cursor marking the
//! currently active entry. Advancing is policy-driven (repeat mode +
//! shuffle); shuffle only randomizes *forward* selection and never rewrites
//! history, so "previous" always retraces what was actually played.

use mist_core::types::Track;
use rand::Rng;

use crate::types::RepeatMode;

/// The play queue
///
/// Duplicate track ids are allowed here (unlike in library collections).
/// Invariant: the cursor is either `None` or a valid index into `tracks`.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: Vec<Track>,
    cursor: Option<usize>,
}

impl Queue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a track at the end; does not affect the cursor
    pub fn append(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Empty the queue and reset the cursor
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.cursor = None;
    }

    /// Number of tracks in the queue
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// All queued tracks in order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Current cursor position, `None` if nothing is active
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The track at the cursor
    pub fn current(&self) -> Option<&Track> {
        self.cursor.and_then(|i| self.tracks.get(i))
    }

    /// Move the cursor to an arbitrary entry (queue click)
    pub fn select(&mut self, index: usize) -> Option<&Track> {
        if index < self.tracks.len() {
            self.cursor = Some(index);
            self.tracks.get(index)
        } else {
            None
        }
    }

    /// Replace the queue tail with a selected track and the remainder of
    /// the list it was clicked in
    ///
    /// Entries at or before the cursor are kept so backward navigation
    /// still retraces real playback history; everything after the cursor
    /// is dropped, then `track` and `rest` are appended and the cursor
    /// moves to `track`.
    pub fn replace_tail(&mut self, track: Track, rest: Vec<Track>) -> usize {
        match self.cursor {
            Some(c) => self.tracks.truncate(c + 1),
            None => self.tracks.clear(),
        }

        self.tracks.push(track);
        let selected = self.tracks.len() - 1;
        self.cursor = Some(selected);
        self.tracks.extend(rest);
        selected
    }

    /// Replace the entry at the cursor (e.g. after lazy resolution)
    ///
    /// No-op if nothing is active.
    pub fn replace_current(&mut self, track: Track) {
        if let Some(i) = self.cursor {
            self.tracks[i] = track;
        }
    }

    /// Advance to the next track under the given policy
    ///
    /// - Repeat-one returns the current track with the cursor unchanged.
    /// - Shuffle picks uniformly at random among entries strictly after the
    ///   cursor; when none remain it wraps to index 0 only on repeat-all.
    /// - Sequential advances by one, wrapping on repeat-all.
    ///
    /// Returns `None` when the queue is exhausted and nothing should play.
    pub fn next(&mut self, repeat: RepeatMode, shuffle: bool) -> Option<&Track> {
        self.next_with_rng(repeat, shuffle, &mut rand::thread_rng())
    }

    /// `next` with an injected random source
    pub(crate) fn next_with_rng<R: Rng>(
        &mut self,
        repeat: RepeatMode,
        shuffle: bool,
        rng: &mut R,
    ) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }

        if repeat == RepeatMode::One {
            // Replay: same track, same cursor
            return self.current();
        }

        // First index eligible for forward selection
        let start = self.cursor.map_or(0, |c| c + 1);

        let next = if start < self.tracks.len() {
            if shuffle {
                Some(rng.gen_range(start..self.tracks.len()))
            } else {
                Some(start)
            }
        } else if repeat == RepeatMode::All {
            Some(0)
        } else {
            None
        };

        match next {
            Some(i) => {
                self.cursor = Some(i);
                self.tracks.get(i)
            }
            None => None,
        }
    }

    /// Step back to the previous track
    ///
    /// Pure cursor decrement: shuffle never affects backward navigation.
    /// Wraps to the last entry on repeat-all; otherwise a no-op at the
    /// front of the queue.
    pub fn previous(&mut self, repeat: RepeatMode) -> Option<&Track> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                self.tracks.get(c - 1)
            }
            _ if repeat == RepeatMode::All && !self.tracks.is_empty() => {
                let last = self.tracks.len() - 1;
                self.cursor = Some(last);
                self.tracks.get(last)
            }
            _ => None,
        }
    }

    /// Remove the entry at `index`
    ///
    /// If the removed index is at or before the cursor, the cursor is
    /// decremented so it keeps pointing at the same logical track (`None`
    /// when it falls off the front or the queue becomes empty).
    pub fn remove_at(&mut self, index: usize) -> Option<Track> {
        if index >= self.tracks.len() {
            return None;
        }

        let removed = self.tracks.remove(index);

        if let Some(c) = self.cursor {
            if self.tracks.is_empty() {
                self.cursor = None;
            } else if index <= c {
                self.cursor = c.checked_sub(1);
            }
        }

        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mist_core::types::TrackId;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;

    fn track(id: &str) -> Track {
        Track::unresolved(TrackId::new(id), format!("Track {id}"), "Artist", "cover.jpg")
    }

    fn queue_of(ids: &[&str]) -> Queue {
        let mut queue = Queue::new();
        for id in ids {
            queue.append(track(id));
        }
        queue
    }

    #[test]
    fn empty_queue_has_no_cursor() {
        let queue = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.cursor(), None);
        assert!(queue.current().is_none());
    }

    #[test]
    fn append_does_not_move_cursor() {
        let mut queue = queue_of(&["a", "b"]);
        queue.select(0);
        queue.append(track("c"));
        assert_eq!(queue.cursor(), Some(0));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn sequential_advance_and_wrap_on_repeat_all() {
        // Queue = [A,B,C], cursor=0, repeat all, shuffle off
        let mut queue = queue_of(&["a", "b", "c"]);
        queue.select(0);

        assert_eq!(queue.next(RepeatMode::All, false).unwrap().id.as_str(), "b");
        assert_eq!(queue.cursor(), Some(1));
        assert_eq!(queue.next(RepeatMode::All, false).unwrap().id.as_str(), "c");
        assert_eq!(queue.cursor(), Some(2));
        // Wraps back to the start
        assert_eq!(queue.next(RepeatMode::All, false).unwrap().id.as_str(), "a");
        assert_eq!(queue.cursor(), Some(0));
    }

    #[test]
    fn exhausted_queue_is_noop_with_repeat_off() {
        let mut queue = queue_of(&["a", "b"]);
        queue.select(1);

        assert!(queue.next(RepeatMode::Off, false).is_none());
        assert_eq!(queue.cursor(), Some(1));
        assert_eq!(queue.current().unwrap().id.as_str(), "b");
    }

    #[test]
    fn repeat_one_returns_same_track_unchanged() {
        let mut queue = queue_of(&["a", "b", "c"]);
        queue.select(1);

        for _ in 0..3 {
            assert_eq!(queue.next(RepeatMode::One, false).unwrap().id.as_str(), "b");
            assert_eq!(queue.cursor(), Some(1));
        }
        // Shuffle does not change repeat-one behavior
        assert_eq!(queue.next(RepeatMode::One, true).unwrap().id.as_str(), "b");
        assert_eq!(queue.cursor(), Some(1));
    }

    #[test]
    fn first_advance_from_no_cursor_starts_at_zero() {
        let mut queue = queue_of(&["a", "b"]);
        assert_eq!(queue.next(RepeatMode::Off, false).unwrap().id.as_str(), "a");
        assert_eq!(queue.cursor(), Some(0));
    }

    #[test]
    fn shuffle_only_picks_strictly_after_cursor() {
        for _ in 0..50 {
            let mut queue = queue_of(&["a", "b", "c", "d", "e"]);
            queue.select(1);
            queue.next(RepeatMode::Off, true).unwrap();
            assert!(queue.cursor().unwrap() >= 2);
        }
    }

    #[test]
    fn shuffle_exhausted_wraps_only_on_repeat_all() {
        let mut queue = queue_of(&["a", "b"]);
        queue.select(1);
        assert!(queue.next(RepeatMode::Off, true).is_none());
        assert_eq!(queue.cursor(), Some(1));

        assert_eq!(queue.next(RepeatMode::All, true).unwrap().id.as_str(), "a");
        assert_eq!(queue.cursor(), Some(0));
    }

    #[test]
    fn shuffle_is_deterministic_with_injected_rng() {
        let mut queue = queue_of(&["a", "b", "c", "d"]);
        queue.select(0);
        // StepRng yields 0 => gen_range(1..4) picks the lower bound
        let mut rng = StepRng::new(0, 0);
        let picked = queue
            .next_with_rng(RepeatMode::Off, true, &mut rng)
            .unwrap()
            .id
            .clone();
        assert_eq!(picked.as_str(), "b");
    }

    #[test]
    fn previous_decrements_cursor() {
        let mut queue = queue_of(&["a", "b", "c"]);
        queue.select(2);
        assert_eq!(queue.previous(RepeatMode::Off).unwrap().id.as_str(), "b");
        assert_eq!(queue.cursor(), Some(1));
    }

    #[test]
    fn previous_at_front_is_noop_unless_repeat_all() {
        let mut queue = queue_of(&["a", "b", "c"]);
        queue.select(0);

        assert!(queue.previous(RepeatMode::Off).is_none());
        assert_eq!(queue.cursor(), Some(0));

        // Repeat-all wraps to the last entry
        assert_eq!(queue.previous(RepeatMode::All).unwrap().id.as_str(), "c");
        assert_eq!(queue.cursor(), Some(2));
    }

    #[test]
    fn remove_before_cursor_keeps_logical_position() {
        let mut queue = queue_of(&["a", "b", "c"]);
        queue.select(2);

        let removed = queue.remove_at(0).unwrap();
        assert_eq!(removed.id.as_str(), "a");
        assert_eq!(queue.cursor(), Some(1));
        assert_eq!(queue.current().unwrap().id.as_str(), "c");
    }

    #[test]
    fn remove_current_steps_cursor_back() {
        let mut queue = queue_of(&["a", "b"]);
        queue.select(0);

        queue.remove_at(0).unwrap();
        assert_eq!(queue.cursor(), None);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn remove_after_cursor_leaves_cursor_alone() {
        let mut queue = queue_of(&["a", "b", "c"]);
        queue.select(0);

        queue.remove_at(2).unwrap();
        assert_eq!(queue.cursor(), Some(0));
    }

    #[test]
    fn remove_last_track_clears_cursor() {
        let mut queue = queue_of(&["a"]);
        queue.select(0);
        queue.remove_at(0).unwrap();
        assert!(queue.is_empty());
        assert_eq!(queue.cursor(), None);
    }

    #[test]
    fn remove_out_of_bounds_is_none() {
        let mut queue = queue_of(&["a"]);
        assert!(queue.remove_at(5).is_none());
    }

    #[test]
    fn replace_tail_drops_entries_after_cursor() {
        let mut queue = queue_of(&["a", "b", "c", "d"]);
        queue.select(1);

        let cursor = queue.replace_tail(track("x"), vec![track("y"), track("z")]);

        // Played prefix [a, b] kept; [c, d] replaced by [x, y, z]
        let ids: Vec<&str> = queue.tracks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "x", "y", "z"]);
        assert_eq!(cursor, 2);
        assert_eq!(queue.cursor(), Some(2));
        assert_eq!(queue.current().unwrap().id.as_str(), "x");
    }

    #[test]
    fn replace_tail_on_empty_queue_starts_fresh() {
        let mut queue = Queue::new();
        queue.replace_tail(track("x"), vec![track("y")]);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.cursor(), Some(0));
    }

    #[test]
    fn clear_resets_cursor() {
        let mut queue = queue_of(&["a", "b"]);
        queue.select(1);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.cursor(), None);
    }

    proptest! {
        /// next followed by previous restores the cursor whenever shuffle
        /// was not active during next
        #[test]
        fn next_then_previous_restores_cursor(len in 2usize..12, start in 0usize..11) {
            prop_assume!(start < len);

            let mut queue = Queue::new();
            for i in 0..len {
                queue.append(track(&i.to_string()));
            }
            queue.select(start);

            if queue.next(RepeatMode::Off, false).is_some() {
                queue.previous(RepeatMode::Off);
                prop_assert_eq!(queue.cursor(), Some(start));
            } else {
                // Exhausted: cursor untouched
                prop_assert_eq!(queue.cursor(), Some(start));
            }
        }

        /// repeat-one is a fixpoint regardless of queue contents or shuffle
        #[test]
        fn repeat_one_is_fixpoint(len in 1usize..12, start in 0usize..11, shuffle: bool) {
            prop_assume!(start < len);

            let mut queue = Queue::new();
            for i in 0..len {
                queue.append(track(&i.to_string()));
            }
            queue.select(start);
            let before = queue.current().unwrap().id.clone();

            let after = queue.next(RepeatMode::One, shuffle).unwrap().id.clone();
            prop_assert_eq!(before, after);
            prop_assert_eq!(queue.cursor(), Some(start));
        }
    }
}
