// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis step scheduling.
//!
//! An [`AxisTicker`] cycles through three states for the lifetime of its
//! composite:
//!
//! ```text
//!   idle (now < deadline) ──► due (now >= deadline) ──► stepped ──► idle
//! ```
//!
//! When it is due, the ticker owes `floor((now - deadline) / period) + 1`
//! steps. The deadline then moves forward by exactly that many periods, so
//! the long-run step count depends only on elapsed time, never on when
//! frames happen to land.

use super::rate::ScrollRate;
use crate::time::HostTime;

/// Step scheduler for a single axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisTicker {
    rate: ScrollRate,
    next_deadline: HostTime,
}

impl AxisTicker {
    /// Creates a ticker whose first step is due one period after `now`.
    #[must_use]
    pub fn new(rate: ScrollRate, now: HostTime) -> Self {
        Self {
            rate,
            next_deadline: now.saturating_add(rate.period),
        }
    }

    /// The configured rate.
    #[inline]
    #[must_use]
    pub fn rate(&self) -> ScrollRate {
        self.rate
    }

    /// Time at which the next step becomes due.
    #[inline]
    #[must_use]
    pub fn next_deadline(&self) -> HostTime {
        self.next_deadline
    }

    /// Replaces the rate and restarts the schedule one period after `now`.
    pub fn set_rate(&mut self, rate: ScrollRate, now: HostTime) {
        *self = Self::new(rate, now);
    }

    /// Discards any backlog: the next step is due one period after `now`.
    pub fn restart(&mut self, now: HostTime) {
        self.next_deadline = now.saturating_add(self.rate.period);
    }

    /// Consumes the steps owed at `now` and returns how many there were.
    ///
    /// Returns `None` for an inactive axis or before the deadline. Calling
    /// this again with the same `now` returns `None`, because the deadline
    /// has already moved past it.
    pub fn take_due(&mut self, now: HostTime) -> Option<u64> {
        if !self.rate.is_active() || now < self.next_deadline {
            return None;
        }
        let late = now.saturating_duration_since(self.next_deadline);
        let steps = late.whole_periods(self.rate.period).saturating_add(1);
        self.next_deadline = self
            .next_deadline
            .saturating_add(self.rate.period.saturating_mul(steps));
        Some(steps)
    }
}
