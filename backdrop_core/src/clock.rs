// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time sources for scrolling composites.
//!
//! A [`ScrollingBackground`](crate::scroll::ScrollingBackground) reads the
//! current time from a [`Clock`] on every draw. Two implementations are
//! provided:
//!
//! - [`MonotonicClock`] reads [`std::time::Instant`], relative to the moment
//!   the clock was created.
//! - [`ManualClock`] only moves when told to. Clones share the same
//!   timeline, so a frame loop (or a test) can keep one handle and hand
//!   another to the composite.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use crate::time::{Duration, HostTime};

/// A source of monotonic [`HostTime`] values.
pub trait Clock {
    /// Returns the current time. Successive calls never go backwards.
    fn now(&self) -> HostTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> HostTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> HostTime {
        (**self).now()
    }
}

/// Wall-clock monotonic time, measured from the clock's creation.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> HostTime {
        let elapsed = Duration::from(self.origin.elapsed());
        HostTime::ZERO + elapsed
    }
}

/// A clock that advances only when told to.
///
/// Cloning yields another handle onto the same timeline.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<HostTime>>,
}

impl ManualClock {
    /// Creates a clock starting at `start`.
    #[must_use]
    pub fn new(start: HostTime) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }

    /// Moves the clock forward by `millis` milliseconds.
    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    /// Sets the clock to `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t` is earlier than the current time.
    pub fn set(&self, t: HostTime) {
        assert!(t >= self.now.get(), "manual clock must not go backwards");
        self.now.set(t);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> HostTime {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(HostTime::from_millis(5));
        let other = clock.clone();
        clock.advance_millis(10);
        assert_eq!(other.now(), HostTime::from_millis(15), "clones observe advances");
    }

    #[test]
    fn manual_clock_set_moves_forward() {
        let clock = ManualClock::default();
        clock.set(HostTime(42));
        assert_eq!(clock.now(), HostTime(42));
    }

    #[test]
    #[should_panic(expected = "must not go backwards")]
    fn manual_clock_rejects_rewind() {
        let clock = ManualClock::new(HostTime(100));
        clock.set(HostTime(50));
    }

    #[test]
    fn monotonic_clock_never_decreases() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a, "monotonic clock went backwards: {a:?} -> {b:?}");
    }

    #[test]
    fn borrowed_clock_delegates() {
        let clock = ManualClock::new(HostTime(7));
        let by_ref: &ManualClock = &clock;
        assert_eq!(Clock::now(&by_ref), HostTime(7));
    }
}
