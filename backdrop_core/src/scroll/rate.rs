// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll rates: a direction plus the time it takes to advance one pixel.

use crate::time::Duration;

/// Sign of the scroll on one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Children move toward positive coordinates.
    Backward,
    /// The axis does not scroll.
    #[default]
    Still,
    /// Children move toward negative coordinates.
    Forward,
}

impl Direction {
    /// The direction as `-1`, `0` or `+1`.
    #[inline]
    #[must_use]
    pub const fn signum(self) -> i8 {
        match self {
            Self::Backward => -1,
            Self::Still => 0,
            Self::Forward => 1,
        }
    }

    /// The pixel displacement a child receives for `steps` steps in this
    /// direction: `-direction * steps`.
    #[inline]
    #[must_use]
    pub fn displacement(self, steps: u64) -> f64 {
        -f64::from(self.signum()) * steps as f64
    }
}

/// Per-axis scroll rate.
///
/// `period` is the time to advance one pixel; a zero period goes with
/// [`Direction::Still`] and means the axis never scrolls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScrollRate {
    /// Time per pixel step. Zero when the axis is still.
    pub period: Duration,
    /// Sign of the scroll.
    pub direction: Direction,
}

impl ScrollRate {
    /// An axis that never scrolls.
    pub const STILL: Self = Self {
        period: Duration::ZERO,
        direction: Direction::Still,
    };

    /// Builds a rate from a signed "milliseconds per pixel" value.
    ///
    /// Positive values scroll [`Forward`](Direction::Forward), negative values
    /// [`Backward`](Direction::Backward), and zero disables the axis. The
    /// period is always the magnitude.
    #[must_use]
    pub const fn from_millis_per_pixel(millis: i64) -> Self {
        let direction = match millis {
            0 => Direction::Still,
            m if m > 0 => Direction::Forward,
            _ => Direction::Backward,
        };
        Self {
            period: Duration::from_millis(millis.unsigned_abs()),
            direction,
        }
    }

    /// Returns `true` if this axis scrolls at all.
    #[inline]
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self.direction, Direction::Still)
    }
}
