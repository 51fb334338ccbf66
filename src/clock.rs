//! Elapsed-time accumulators.
//!
//! Both the 60 Hz simulation step and the 1 Hz enemy volley are driven from
//! one elapsed-time source, so a single-threaded loop can run them without
//! any shared-state locking.

use std::time::Duration;

/// Counts how many fixed steps fit into the time fed so far.
#[derive(Clone, Debug)]
pub struct FixedStep {
    step: Duration,
    accumulator: Duration,
}

impl FixedStep {
    pub fn new(step: Duration) -> Self {
        debug_assert!(!step.is_zero());
        Self {
            step,
            accumulator: Duration::ZERO,
        }
    }

    /// Add `dt` and return the number of whole steps now due.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accumulator += dt;
        let mut due = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            due += 1;
        }
        due
    }

    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

/// A repeating timer. The first firing happens one full period after start.
#[derive(Clone, Debug)]
pub struct Periodic {
    period: Duration,
    elapsed: Duration,
}

impl Periodic {
    pub fn new(period: Duration) -> Self {
        debug_assert!(!period.is_zero());
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    /// Add `dt` and return how many times the timer fired.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
