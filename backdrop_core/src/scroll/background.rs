// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scrolling composite.

use core::fmt;

use image::RgbaImage;
use kurbo::{Point, Size, Vec2};

use super::config::ScrollConfig;
use super::rate::ScrollRate;
use super::ticker::AxisTicker;
use super::tile::tile_offsets;
use super::wrap::{WrapPolicy, wrap_coordinate};
use crate::axis::Axis;
use crate::clock::{Clock, MonotonicClock};
use crate::drawable::{Anchor, Drawable, SharedDrawable};
use crate::sprite::Sprite;
use crate::time::HostTime;
#[cfg(feature = "trace-rich")]
use crate::trace::WrapEvent;
use crate::trace::{RedrawEvent, ScrollStepEvent, Tracer};

/// A viewport-sized drawable that scrolls its children at a constant rate
/// and wraps them around the viewport edges.
///
/// Every draw reads the clock, applies whatever pixel steps are owed on each
/// axis, and, if anything moved, composites the children into a freshly
/// built backing surface before blitting it to the destination.
///
/// # Drawing and borrowing
///
/// Children are shared [`RefCell`](core::cell::RefCell)s. Drawing borrows
/// each child mutably while scrolling it, so a caller must not hold a borrow
/// of a child across a call to [`draw`](Self::draw) or
/// [`draw_offset`](Self::draw_offset); doing so panics.
pub struct ScrollingBackground<C: Clock = MonotonicClock> {
    backing: Sprite,
    children: Vec<SharedDrawable>,
    view: Size,
    reappear: Size,
    axes: [AxisTicker; 2],
    paused: bool,
    wrap: WrapPolicy,
    clock: C,
    redraws: u64,
}

impl<C: Clock> fmt::Debug for ScrollingBackground<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollingBackground")
            .field("children", &self.children.len())
            .field("view", &self.view)
            .field("reappear", &self.reappear)
            .field("axes", &self.axes)
            .field("paused", &self.paused)
            .field("wrap", &self.wrap)
            .field("redraws", &self.redraws)
            .finish_non_exhaustive()
    }
}

impl ScrollingBackground<MonotonicClock> {
    /// Creates a composite driven by wall-clock time.
    ///
    /// See [`with_clock`](Self::with_clock) for the meaning of the arguments.
    #[must_use]
    pub fn new(
        children: Vec<SharedDrawable>,
        millis_per_pixel_x: i64,
        millis_per_pixel_y: i64,
        width: u32,
        height: u32,
    ) -> Self {
        Self::with_clock(
            children,
            millis_per_pixel_x,
            millis_per_pixel_y,
            width,
            height,
            MonotonicClock::new(),
        )
    }
}

impl<C: Clock> ScrollingBackground<C> {
    /// Creates a composite reading time from `clock`.
    ///
    /// `millis_per_pixel_x` and `millis_per_pixel_y` are signed rates: the
    /// magnitude is how long one pixel step takes, the sign picks the
    /// direction, and zero disables the axis. The viewport is
    /// `width` × `height` pixels and doubles as the reappear offset.
    ///
    /// Children are taken as they are; the text-anchor compensation done by
    /// [`add_renderable`](Self::add_renderable) is not applied here. The
    /// children are composited once before this returns.
    #[must_use]
    pub fn with_clock(
        children: Vec<SharedDrawable>,
        millis_per_pixel_x: i64,
        millis_per_pixel_y: i64,
        width: u32,
        height: u32,
        clock: C,
    ) -> Self {
        let config = ScrollConfig {
            millis_per_pixel_x,
            millis_per_pixel_y,
            width,
            height,
            wrap: WrapPolicy::default(),
        };
        Self::from_config(children, &config, clock)
    }

    /// Creates a composite from a [`ScrollConfig`].
    #[must_use]
    pub fn from_config(children: Vec<SharedDrawable>, config: &ScrollConfig, clock: C) -> Self {
        let now = clock.now();
        let [rate_x, rate_y] = config.rates();
        let view = Size::new(f64::from(config.width), f64::from(config.height));
        let mut background = Self {
            backing: Sprite::empty(Point::ZERO, config.width, config.height),
            children,
            view,
            reappear: view,
            axes: [AxisTicker::new(rate_x, now), AxisTicker::new(rate_y, now)],
            paused: false,
            wrap: config.wrap,
            clock,
            redraws: 0,
        };
        tracing::debug!(
            children = background.children.len(),
            width = config.width,
            height = config.height,
            ?rate_x,
            ?rate_y,
            "created scrolling background"
        );
        Self::composite(
            &background.children,
            background.reappear,
            background.backing.pixels_mut(),
        );
        background
    }

    // -- Drawing --

    /// Applies any owed scroll steps, then draws the backing surface into
    /// `dest` displaced by `offset`.
    pub fn draw_offset(&mut self, dest: &mut RgbaImage, offset: Vec2) {
        self.draw_offset_traced(dest, offset, &mut Tracer::none());
    }

    /// [`draw_offset`](Self::draw_offset) with no displacement.
    pub fn draw(&mut self, dest: &mut RgbaImage) {
        self.draw_offset(dest, Vec2::ZERO);
    }

    /// [`draw_offset`](Self::draw_offset), reporting scroll steps and redraws
    /// to `tracer`.
    pub fn draw_offset_traced(
        &mut self,
        dest: &mut RgbaImage,
        offset: Vec2,
        tracer: &mut Tracer<'_>,
    ) {
        self.update(tracer);
        self.backing.draw_offset(dest, offset);
    }

    fn update(&mut self, tracer: &mut Tracer<'_>) {
        if self.paused {
            return;
        }
        let now = self.clock.now();
        let mut stepped = false;

        for axis in Axis::ALL {
            let ticker = &mut self.axes[axis.index()];
            let Some(steps) = ticker.take_due(now) else {
                continue;
            };
            stepped = true;
            tracer.scroll_step(&ScrollStepEvent {
                axis,
                now,
                steps,
                next_deadline: ticker.next_deadline(),
            });
            tracing::trace!(?axis, steps, "scrolled");

            let direction = ticker.rate().direction;
            let delta = direction.displacement(steps);
            let reappear = axis.of_size(self.reappear);
            for (child_index, child) in self.children.iter().enumerate() {
                let mut child = child.borrow_mut();
                child.shift(axis, delta);
                let position = child.position();
                let wrapped =
                    wrap_coordinate(axis.of_point(position), reappear, direction, self.wrap);
                if wrapped.wraps > 0 {
                    child.set_position(axis.with_point(position, wrapped.value));
                    #[cfg(feature = "trace-rich")]
                    tracer.wrap(&WrapEvent {
                        axis,
                        child_index,
                        wraps: wrapped.wraps,
                    });
                }
                #[cfg(not(feature = "trace-rich"))]
                {
                    _ = child_index;
                }
            }
        }

        if stepped {
            self.rebuild(now, tracer);
        }
    }

    /// Recomposites after a scroll step and reports the redraw.
    fn rebuild(&mut self, now: HostTime, tracer: &mut Tracer<'_>) {
        self.recomposite();
        self.redraws += 1;
        tracer.redraw(&RedrawEvent {
            now,
            children: self.children.len(),
        });
    }

    /// Composites every child into a new backing surface, then swaps it in.
    fn recomposite(&mut self) {
        let (width, height) = self.backing.pixels().dimensions();
        let mut fresh = Sprite::empty(self.backing.position(), width, height);
        fresh.set_layer(self.backing.layer());
        Self::composite(&self.children, self.reappear, fresh.pixels_mut());
        self.backing = fresh;
    }

    fn composite(children: &[SharedDrawable], reappear: Size, target: &mut RgbaImage) {
        for child in children {
            let child = child.borrow();
            for offset in tile_offsets(child.position(), reappear) {
                child.draw_offset(target, offset);
            }
        }
    }

    // -- Configuration --

    /// Reconfigures both axes.
    ///
    /// Both deadlines restart one period from now, so changing the rate
    /// never releases a burst of pent-up steps.
    pub fn set_scroll_rate(&mut self, millis_per_pixel_x: i64, millis_per_pixel_y: i64) {
        let now = self.clock.now();
        let rates = [
            ScrollRate::from_millis_per_pixel(millis_per_pixel_x),
            ScrollRate::from_millis_per_pixel(millis_per_pixel_y),
        ];
        for axis in Axis::ALL {
            self.axes[axis.index()].set_rate(rates[axis.index()], now);
        }
        tracing::debug!(?rates, "scroll rate changed");
    }

    /// Stops scrolling. Time spent paused is never made up.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resumes scrolling; the next step on each axis is one period from now.
    pub fn unpause(&mut self) {
        self.paused = false;
        let now = self.clock.now();
        for ticker in &mut self.axes {
            ticker.restart(now);
        }
    }

    /// Whether scrolling is paused.
    #[inline]
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Appends children and immediately recomposites the backing surface.
    ///
    /// Children with [`Anchor::Text`] have their position negated on both
    /// axes before they are added. This does not count as a redraw.
    pub fn add_renderable<I>(&mut self, children: I)
    where
        I: IntoIterator<Item = SharedDrawable>,
    {
        for child in children {
            {
                let mut c = child.borrow_mut();
                if c.anchor() == Anchor::Text {
                    let p = c.position();
                    c.set_position(Point::new(-p.x, -p.y));
                }
            }
            self.children.push(child);
        }
        self.recomposite();
    }

    // -- Accessors --

    /// Viewport size.
    #[inline]
    #[must_use]
    pub fn view(&self) -> Size {
        self.view
    }

    /// Distance a child travels when it wraps.
    #[inline]
    #[must_use]
    pub fn reappear(&self) -> Size {
        self.reappear
    }

    /// Registered children in draw order.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[SharedDrawable] {
        &self.children
    }

    /// Step scheduler for `axis`.
    #[inline]
    #[must_use]
    pub fn axis(&self, axis: Axis) -> &AxisTicker {
        &self.axes[axis.index()]
    }

    /// Wrap policy in effect.
    #[inline]
    #[must_use]
    pub fn wrap_policy(&self) -> WrapPolicy {
        self.wrap
    }

    /// The current backing surface.
    #[inline]
    #[must_use]
    pub fn backing(&self) -> &Sprite {
        &self.backing
    }

    /// Number of times the backing surface has been rebuilt by scrolling.
    #[inline]
    #[must_use]
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    /// Position at which the backing surface is drawn.
    #[must_use]
    pub fn position(&self) -> Point {
        self.backing.position()
    }

    /// Moves the backing surface. Kept across rebuilds.
    pub fn set_position(&mut self, position: Point) {
        self.backing.set_position(position);
    }

    /// Rendering layer of the backing surface.
    #[inline]
    #[must_use]
    pub fn layer(&self) -> i32 {
        self.backing.layer()
    }

    /// Sets the rendering layer. Kept across rebuilds.
    pub fn set_layer(&mut self, layer: i32) {
        self.backing.set_layer(layer);
    }

    /// The clock this composite reads.
    #[inline]
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
