//! Elapsed-seconds counter driving the timeline
//!
//! Elapsed time is whole wall-clock seconds since start plus an operator
//! scrub offset. Wall time is passed in by the caller so the clock itself
//! stays deterministic.
//!
//! Scrubbing clamps the *resulting* elapsed value, not the offset. Because
//! wall time keeps advancing, the reachable scrub range shrinks the longer
//! the program runs, and once wall time alone exceeds the upper bound any
//! scrub pulls elapsed back down to it.

/// Upper bound scrubbing may reach in the default script
pub const DEFAULT_MAX_SCRUB_ELAPSED: i64 = 1190;

/// Seconds moved by one scrub command
pub const DEFAULT_SCRUB_STEP: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationClock {
    offset: i64,
    max_elapsed: i64,
}

impl SimulationClock {
    pub fn new(max_elapsed: i64) -> Self {
        Self {
            offset: 0,
            max_elapsed: max_elapsed.max(0),
        }
    }

    /// floor(wall_ms / 1000) + offset
    pub fn elapsed(&self, wall_ms: u64) -> i64 {
        Self::wall_secs(wall_ms) + self.offset
    }

    /// Shift elapsed time by `delta` seconds, then clamp it into
    /// `[0, max_elapsed]` at the current wall time
    pub fn scrub(&mut self, delta: i64, wall_ms: u64) {
        self.offset += delta;
        let wall = Self::wall_secs(wall_ms);
        let clamped = (wall + self.offset).clamp(0, self.max_elapsed);
        self.offset = clamped - wall;
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn max_elapsed(&self) -> i64 {
        self.max_elapsed
    }

    fn wall_secs(wall_ms: u64) -> i64 {
        (wall_ms / 1000) as i64
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SCRUB_ELAPSED)
    }
}
