// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration for a scrolling composite.

use super::rate::ScrollRate;
use super::wrap::WrapPolicy;

/// Configuration for a [`ScrollingBackground`](super::ScrollingBackground).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollConfig {
    /// Signed milliseconds per pixel on the horizontal axis (0 = still).
    pub millis_per_pixel_x: i64,
    /// Signed milliseconds per pixel on the vertical axis (0 = still).
    pub millis_per_pixel_y: i64,
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// How far-travelling children are wrapped.
    pub wrap: WrapPolicy,
}

impl ScrollConfig {
    /// A viewport that does not scroll on either axis.
    #[must_use]
    pub const fn still(width: u32, height: u32) -> Self {
        Self {
            millis_per_pixel_x: 0,
            millis_per_pixel_y: 0,
            width,
            height,
            wrap: WrapPolicy::Repeat,
        }
    }

    /// Horizontal scroll only.
    #[must_use]
    pub const fn horizontal(millis_per_pixel: i64, width: u32, height: u32) -> Self {
        Self {
            millis_per_pixel_x: millis_per_pixel,
            ..Self::still(width, height)
        }
    }

    /// Vertical scroll only.
    #[must_use]
    pub const fn vertical(millis_per_pixel: i64, width: u32, height: u32) -> Self {
        Self {
            millis_per_pixel_y: millis_per_pixel,
            ..Self::still(width, height)
        }
    }

    /// Returns this configuration with a different wrap policy.
    #[must_use]
    pub const fn with_wrap(self, wrap: WrapPolicy) -> Self {
        Self { wrap, ..self }
    }

    /// Horizontal and vertical rates.
    #[must_use]
    pub const fn rates(&self) -> [ScrollRate; 2] {
        [
            ScrollRate::from_millis_per_pixel(self.millis_per_pixel_x),
            ScrollRate::from_millis_per_pixel(self.millis_per_pixel_y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::Direction;

    #[test]
    fn presets_only_touch_their_axis() {
        let h = ScrollConfig::horizontal(10, 320, 240);
        assert_eq!(h.millis_per_pixel_y, 0);
        let [x, y] = h.rates();
        assert_eq!(x.direction, Direction::Forward);
        assert!(!y.is_active(), "vertical axis must be still");

        let v = ScrollConfig::vertical(-4, 320, 240);
        assert_eq!(v.rates()[1].direction, Direction::Backward);
        assert!(!v.rates()[0].is_active(), "horizontal axis must be still");
    }

    #[test]
    fn wrap_defaults_to_repeat() {
        let c = ScrollConfig::still(1, 1);
        assert_eq!(c.wrap, WrapPolicy::Repeat);
        assert_eq!(c.with_wrap(WrapPolicy::Once).wrap, WrapPolicy::Once);
    }
}
