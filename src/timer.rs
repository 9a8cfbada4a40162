//! Clock task scheduling and wall-clock access.
//!
//! The display clock is refreshed by a [`RecurringTask`] polled from the main
//! loop. The task is due as soon as it is created, so the real time replaces
//! the startup default on the very first frame, and then once per period until
//! it is cancelled.
//!
//! # Catch-up Behavior
//!
//! If the loop falls behind by more than one period (window dragged, process
//! suspended), the task fires once and resumes one period after `now`. Missed
//! ticks are not replayed: the clock is overwritten from the wall clock, so a
//! single late tick already shows the right time.

use std::time::{Duration, Instant};

use chrono::{Local, Timelike};

use crate::state::ClockTime;

// =============================================================================
// Recurring Task
// =============================================================================

/// Fixed-period task with an explicit cancellation hook.
#[derive(Clone, Copy, Debug)]
pub struct RecurringTask {
    period: Duration,
    next_due: Instant,
    cancelled: bool,
}

impl RecurringTask {
    /// Create a task that is due at `start` and every `period` after.
    pub const fn starting_at(
        period: Duration,
        start: Instant,
    ) -> Self {
        Self {
            period,
            next_due: start,
            cancelled: false,
        }
    }

    /// Create a task that is due immediately.
    pub fn new(period: Duration) -> Self { Self::starting_at(period, Instant::now()) }

    /// Returns `true` once per elapsed period and reschedules itself.
    pub fn poll(
        &mut self,
        now: Instant,
    ) -> bool {
        if self.cancelled || now < self.next_due {
            return false;
        }

        let next = self.next_due + self.period;
        self.next_due = if next <= now { now + self.period } else { next };
        true
    }

    /// Stop the task permanently.
    #[inline]
    pub const fn cancel(&mut self) { self.cancelled = true; }

    #[inline]
    pub const fn is_cancelled(&self) -> bool { self.cancelled }

    /// Period between runs.
    #[inline]
    pub const fn period(&self) -> Duration { self.period }
}

// =============================================================================
// Wall Clock
// =============================================================================

/// Source of the time of day shown on the display.
pub trait WallClock {
    fn now(&self) -> ClockTime;
}

/// Local time zone wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl WallClock for LocalClock {
    fn now(&self) -> ClockTime {
        let now = Local::now();
        ClockTime::new(now.hour() as u8, now.minute() as u8)
    }
}

/// Wall clock stuck at one time.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub ClockTime);

impl WallClock for FixedClock {
    fn now(&self) -> ClockTime { self.0 }
}

// =============================================================================
// Unit Tests
// =============================================================================
