//! Timestamps and the wall-clock abstraction.
//!
//! Timestamps are Unix epoch seconds (UTC). The current time is read through
//! [`Clock`] so standby-period countdowns can be computed deterministically
//! in tests while production code reads the system clock on every call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Seconds elapsed between this timestamp and `now_secs`.
    ///
    /// Negative when the timestamp lies in the future.
    pub fn secs_before(&self, now_secs: f64) -> f64 {
        now_secs - self.0 as f64
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Source of the current wall-clock time.
pub trait Clock {
    /// Seconds since the Unix epoch, with sub-second precision.
    fn now_secs(&self) -> f64;
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secs_before_is_signed() {
        let ts = Timestamp::new(1_000);
        assert_eq!(ts.secs_before(1_060.5), 60.5);
        assert_eq!(ts.secs_before(940.0), -60.0);
    }

    #[test]
    fn system_clock_is_after_2023() {
        assert!(SystemClock.now_secs() > 1_672_531_200.0);
    }
}
