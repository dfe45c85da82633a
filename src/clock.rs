//! Gravity clock
//!
//! Fires at a fixed cadence. The deadline advances by whole intervals from
//! the previous deadline, so player input handled between ticks never
//! delays or restarts gravity.

use std::time::{Duration, Instant};

/// Default gravity interval
pub const DEFAULT_GRAVITY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct Clock {
    interval: Duration,
    next: Instant,
}

impl Clock {
    /// Start a clock whose first tick is one interval after `now`
    pub fn new(interval: Duration, now: Instant) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            next: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// How long to wait for input before the next tick is due
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Returns true once per elapsed deadline and re-arms for the next.
    ///
    /// Deadlines missed entirely (a stalled terminal) are skipped rather
    /// than replayed in a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        while self.next <= now {
            self.next += self.interval;
        }
        true
    }
}
