//! Nullable clock: deterministic time for testing.

use railway_types::{Clock, Timestamp};
use std::cell::Cell;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to.
pub struct NullClock {
    current: Cell<f64>,
}

impl NullClock {
    pub fn new(initial_secs: f64) -> Self {
        Self {
            current: Cell::new(initial_secs),
        }
    }

    /// A clock reading exactly `timestamp`.
    pub fn at(timestamp: Timestamp) -> Self {
        Self::new(timestamp.as_secs() as f64)
    }

    /// Advance time by a number of seconds.
    pub fn advance(&self, secs: f64) {
        self.current.set(self.current.get() + secs);
    }
}

impl Clock for NullClock {
    fn now_secs(&self) -> f64 {
        self.current.get()
    }
}
