// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Four-way tiling used when compositing children into the backing surface.
//!
//! A child near one edge of the viewport may need to show simultaneously
//! near the opposite edge while it is crossing the wrap boundary. Drawing
//! every child at four offsets, one per quadrant a wrapped copy can occupy,
//! covers both axes at once.

use kurbo::{Point, Size, Vec2};

/// The four draw offsets for a child at `position`.
///
/// In order: `(-2x, -2y)`, `(-2x, -2y - R.h)`, `(-2x - R.w, -2y)`,
/// `(-2x - R.w, -2y - R.h)` where `R` is the reappear offset.
#[must_use]
pub fn tile_offsets(position: Point, reappear: Size) -> [Vec2; 4] {
    let base = Vec2::new(-2.0 * position.x, -2.0 * position.y);
    let dx = Vec2::new(reappear.width, 0.0);
    let dy = Vec2::new(0.0, reappear.height);
    [base, base - dy, base - dx, base - dx - dy]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_child_tiles_up_and_left() {
        let offsets = tile_offsets(Point::ZERO, Size::new(100.0, 50.0));
        assert_eq!(
            offsets,
            [
                Vec2::new(0.0, 0.0),
                Vec2::new(0.0, -50.0),
                Vec2::new(-100.0, 0.0),
                Vec2::new(-100.0, -50.0),
            ]
        );
    }

    #[test]
    fn offsets_double_the_position() {
        let offsets = tile_offsets(Point::new(-2.0, 3.0), Size::new(10.0, 10.0));
        assert_eq!(offsets[0], Vec2::new(4.0, -6.0));
        assert_eq!(offsets[3], Vec2::new(-6.0, -16.0));
    }
}
