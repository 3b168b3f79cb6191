// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two scroll dimensions.

use kurbo::{Point, Size, Vec2};

/// One of the two independent scroll dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    /// Index of this axis into per-axis arrays.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }

    /// Reads this axis' coordinate of a point.
    #[inline]
    #[must_use]
    pub const fn of_point(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }

    /// Reads this axis' extent of a size.
    #[inline]
    #[must_use]
    pub const fn of_size(self, s: Size) -> f64 {
        match self {
            Self::X => s.width,
            Self::Y => s.height,
        }
    }

    /// A vector of length `delta` along this axis.
    #[inline]
    #[must_use]
    pub const fn vec(self, delta: f64) -> Vec2 {
        match self {
            Self::X => Vec2::new(delta, 0.0),
            Self::Y => Vec2::new(0.0, delta),
        }
    }

    /// Returns `p` with this axis' coordinate replaced by `value`.
    #[inline]
    #[must_use]
    pub const fn with_point(self, p: Point, value: f64) -> Point {
        match self {
            Self::X => Point::new(value, p.y),
            Self::Y => Point::new(p.x, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_follow_axis() {
        let p = Point::new(3.0, -4.0);
        assert_eq!(Axis::X.of_point(p), 3.0);
        assert_eq!(Axis::Y.of_point(p), -4.0);
        assert_eq!(Axis::Y.of_size(Size::new(10.0, 20.0)), 20.0);
        assert_eq!(Axis::X.vec(2.0), Vec2::new(2.0, 0.0));
        assert_eq!(Axis::Y.with_point(p, 9.0), Point::new(3.0, 9.0));
    }

    #[test]
    fn indices_are_distinct() {
        assert_eq!(Axis::ALL.map(Axis::index), [0, 1]);
    }
}
