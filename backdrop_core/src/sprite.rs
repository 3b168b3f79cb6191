// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A positioned, layered RGBA pixel buffer.

use image::{Rgba, RgbaImage, imageops};
use kurbo::{Point, Size, Vec2};

use crate::drawable::Drawable;

/// An RGBA pixel buffer with a position and a rendering layer.
///
/// Sprites are the backing store of a
/// [`ScrollingBackground`](crate::scroll::ScrollingBackground) and the most
/// common kind of child drawable.
#[derive(Clone, Debug)]
pub struct Sprite {
    position: Point,
    layer: i32,
    pixels: RgbaImage,
}

impl Sprite {
    /// Creates a fully transparent sprite of `width` × `height` pixels.
    #[must_use]
    pub fn empty(position: Point, width: u32, height: u32) -> Self {
        Self {
            position,
            layer: 0,
            pixels: RgbaImage::new(width, height),
        }
    }

    /// Creates a sprite filled with a single color.
    #[must_use]
    pub fn filled(position: Point, width: u32, height: u32, color: Rgba<u8>) -> Self {
        Self {
            position,
            layer: 0,
            pixels: RgbaImage::from_pixel(width, height, color),
        }
    }

    /// Wraps existing pixels.
    #[must_use]
    pub fn from_image(position: Point, pixels: RgbaImage) -> Self {
        Self {
            position,
            layer: 0,
            pixels,
        }
    }

    /// Rendering layer; higher layers draw over lower ones.
    #[inline]
    #[must_use]
    pub fn layer(&self) -> i32 {
        self.layer
    }

    /// Sets the rendering layer.
    #[inline]
    pub fn set_layer(&mut self, layer: i32) {
        self.layer = layer;
    }

    /// Pixel dimensions.
    #[must_use]
    pub fn size(&self) -> Size {
        let (w, h) = self.pixels.dimensions();
        Size::new(f64::from(w), f64::from(h))
    }

    /// The pixel buffer.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// The pixel buffer, mutably.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut RgbaImage {
        &mut self.pixels
    }
}

impl Drawable for Sprite {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "sub-pixel positions are truncated to whole pixels when drawn"
    )]
    fn draw_offset(&self, dest: &mut RgbaImage, offset: Vec2) {
        let at = self.position + offset;
        imageops::overlay(dest, &self.pixels, at.x.trunc() as i64, at.y.trunc() as i64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn empty_sprite_is_transparent() {
        let s = Sprite::empty(Point::ZERO, 4, 3);
        assert_eq!(s.size(), Size::new(4.0, 3.0));
        assert!(s.pixels().pixels().all(|p| *p == CLEAR), "fresh sprite must be clear");
    }

    #[test]
    fn draw_offset_places_pixels() {
        let s = Sprite::filled(Point::new(1.0, 1.0), 2, 2, RED);
        let mut dest = RgbaImage::new(8, 8);
        s.draw_offset(&mut dest, Vec2::new(2.0, 0.0));

        assert_eq!(*dest.get_pixel(3, 1), RED);
        assert_eq!(*dest.get_pixel(4, 2), RED);
        assert_eq!(*dest.get_pixel(2, 1), CLEAR, "left of the sprite stays clear");
        assert_eq!(*dest.get_pixel(5, 1), CLEAR, "right of the sprite stays clear");
    }

    #[test]
    fn draw_clips_at_negative_offsets() {
        let s = Sprite::filled(Point::ZERO, 4, 4, RED);
        let mut dest = RgbaImage::new(4, 4);
        s.draw_offset(&mut dest, Vec2::new(-3.0, -3.0));

        assert_eq!(*dest.get_pixel(0, 0), RED);
        assert_eq!(*dest.get_pixel(1, 1), CLEAR, "only one pixel overlaps");
    }

    #[test]
    fn fractional_positions_truncate() {
        let s = Sprite::filled(Point::new(1.9, 0.0), 1, 1, RED);
        let mut dest = RgbaImage::new(4, 1);
        s.draw(&mut dest);
        assert_eq!(*dest.get_pixel(1, 0), RED);
    }

    #[test]
    fn layer_round_trips() {
        let mut s = Sprite::empty(Point::ZERO, 1, 1);
        s.set_layer(-3);
        assert_eq!(s.layer(), -3);
    }
}
