//! Rate limiter for the game loop.
//!
//! A [`Ticker`] fires at most once per interval. The loop keeps one per concern
//! (poll, gravity, key repeat) and asks each whether it is due.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    last: Instant,
}

impl Ticker {
    /// Create a ticker whose first firing is one interval after `start`.
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last: start,
        }
    }

    pub fn from_millis(ms: u64, start: Instant) -> Self {
        Self::new(Duration::from_millis(ms), start)
    }

    /// Returns true and re-arms when at least one interval has passed since the last firing.
    ///
    /// Missed intervals are not queued up: a late check fires once and restarts from `now`.
    pub fn ready(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.interval {
            self.last = now;
            return true;
        }
        false
    }

    /// Time left until the next firing (zero when already due).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last))
    }

    /// Restart the interval from `now` without firing.
    pub fn reset(&mut self, now: Instant) {
        self.last = now;
    }
}
