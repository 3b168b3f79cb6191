// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability every child of a composite must provide.
//!
//! A [`Drawable`] has a position and can render a snapshot of itself into a
//! destination pixel buffer at an offset. Composites hold children as
//! [`SharedDrawable`] handles: callers may keep their own handle to a child
//! they added, but once registered the composite is the only thing that
//! moves it.

use std::cell::RefCell;
use std::rc::Rc;

use image::RgbaImage;
use kurbo::{Point, Vec2};

use crate::axis::Axis;

/// How a drawable interprets its own position.
///
/// Composites use this to compensate for drawables whose anchor convention
/// differs from plain sprites.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Position is the top-left corner of the drawn pixels.
    #[default]
    TopLeft,
    /// Text-style anchoring. A composite negates the initial position of
    /// these drawables on both axes when they are registered.
    Text,
}

/// Something with a position that can render itself into a pixel buffer.
pub trait Drawable {
    /// Current position.
    fn position(&self) -> Point;

    /// Moves to `position`.
    fn set_position(&mut self, position: Point);

    /// Moves by `delta` along a single axis.
    fn shift(&mut self, axis: Axis, delta: f64) {
        let p = self.position() + axis.vec(delta);
        self.set_position(p);
    }

    /// Renders into `dest`, displaced from this drawable's position by
    /// `offset`.
    fn draw_offset(&self, dest: &mut RgbaImage, offset: Vec2);

    /// Renders into `dest` at this drawable's position.
    fn draw(&self, dest: &mut RgbaImage) {
        self.draw_offset(dest, Vec2::ZERO);
    }

    /// Anchor convention of this drawable.
    fn anchor(&self) -> Anchor {
        Anchor::TopLeft
    }
}

/// A drawable shared between a composite and its caller.
pub type SharedDrawable = Rc<RefCell<dyn Drawable>>;

/// Wraps a drawable into a [`SharedDrawable`] handle.
#[must_use]
pub fn shared<D: Drawable + 'static>(drawable: D) -> Rc<RefCell<D>> {
    Rc::new(RefCell::new(drawable))
}
