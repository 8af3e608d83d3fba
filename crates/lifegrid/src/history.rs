//! Bounded sliding window of recent fingerprints for cycle detection.
//!
//! [`CycleHistory`] holds at most [`HISTORY_CAPACITY`] fingerprints, oldest
//! first. A repeat is only tested for once the window is full, so the
//! detector catches periods of at most `HISTORY_CAPACITY` generations and
//! never fires during the first `HISTORY_CAPACITY` recorded states.

use std::collections::VecDeque;

use crate::fingerprint::Fingerprint;

/// Number of fingerprints retained.
pub const HISTORY_CAPACITY: usize = 10;

/// Fixed-capacity FIFO of recently seen grid states.
#[derive(Clone, Debug, Default)]
pub struct CycleHistory {
    entries: VecDeque<Fingerprint>,
}

impl CycleHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Record a new state.
    ///
    /// When the window is already full, returns whether `fingerprint` was
    /// present in it, then evicts the oldest entry. When the window is not
    /// yet full the state is appended and `false` is returned.
    pub fn record(&mut self, fingerprint: Fingerprint) -> bool {
        if self.entries.len() < HISTORY_CAPACITY {
            self.entries.push_back(fingerprint);
            return false;
        }
        let repeated = self.entries.contains(&fingerprint);
        self.entries.pop_front();
        self.entries.push_back(fingerprint);
        repeated
    }

    /// Number of retained fingerprints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing has been recorded since construction or the last clear.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` once the window holds [`HISTORY_CAPACITY`] entries.
    pub fn is_full(&self) -> bool {
        self.entries.len() == HISTORY_CAPACITY
    }

    /// Retained fingerprints, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Fingerprint> + '_ {
        self.entries.iter()
    }

    /// Forget all recorded states.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
