//! Nullable clock — deterministic time for testing.

use crt_types::Timestamp;
use std::cell::Cell;

/// A deterministic clock for testing.
///
/// Time only moves when you tell it to, in either direction, so clock skew
/// can be provoked on purpose.
pub struct NullClock {
    current: Cell<i64>,
}

impl NullClock {
    pub fn new(initial_secs: i64) -> Self {
        Self {
            current: Cell::new(initial_secs),
        }
    }

    /// Get the current time.
    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.current.get())
    }

    /// Advance time by a number of seconds.
    pub fn advance(&self, secs: i64) {
        self.current.set(self.current.get() + secs);
    }

    /// Set the time to a specific value.
    pub fn set(&self, secs: i64) {
        self.current.set(secs);
    }
}
