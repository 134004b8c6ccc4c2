//! Elapsed-time measurement.

use std::time::{Duration, Instant};

/// Measures time elapsed since construction (or the last [`restart`](Self::restart)).
///
/// Backed by a monotonic clock, so readings never go backwards. Event
/// producers use [`elapsed_millis`](Self::elapsed_millis) as an event timestamp.
#[derive(Debug, Clone, Copy)]
pub struct ElapsedTimer {
    start: Instant,
}

impl ElapsedTimer {
    /// Start a new timer.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Reset the start point to now.
    pub fn restart(&mut self) {
        self.start = Instant::now();
    }

    /// Time elapsed since the start point.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Elapsed time in whole milliseconds, saturating at `u64::MAX`.
    pub fn elapsed_millis(&self) -> u64 {
        u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for ElapsedTimer {
    fn default() -> Self {
        Self::new()
    }
}
