// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-driven scrolling composites for 2D sprite rendering.
//!
//! `backdrop_core` provides a [`ScrollingBackground`](scroll::ScrollingBackground):
//! a viewport-sized drawable that shifts its children at a constant pixel
//! rate on up to two axes and wraps them around the viewport edges, for
//! parallax and other endlessly scrolling backgrounds.
//!
//! # Architecture
//!
//! The frame loop owns the destination buffer and calls `draw` once per
//! frame:
//!
//! ```text
//!   Frame loop
//!       │ draw(dest)
//!       ▼
//!   ScrollingBackground ──► Clock::now()
//!       │
//!       ├─► AxisTicker::take_due()   (per axis)
//!       ├─► Drawable::shift() + wrap (per child)
//!       ├─► Sprite rebuild + 4× tiled composite
//!       ▼
//!   Sprite::draw_offset(dest)
//! ```
//!
//! **[`drawable`]**: the [`Drawable`](drawable::Drawable) capability every
//! child provides, and the shared-handle type children are held through.
//!
//! **[`sprite`]**: a positioned, layered RGBA buffer; the composite's
//! backing surface and the usual child type.
//!
//! **[`scroll`]**: rate parsing, step scheduling, wrap arithmetic, tiling,
//! and the composite itself.
//!
//! **[`clock`]** / **[`time`]**: nanosecond host time and the clocks that
//! produce it, including a manual clock for deterministic frame loops.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! scroll instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-child
//!   wrap events.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod axis;
pub mod clock;
pub mod drawable;
pub mod scroll;
pub mod sprite;
pub mod time;
pub mod trace;
