// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instrumentation for scrolling composites.
//!
//! This module provides a [`TraceSink`] trait with one method per event that
//! [`ScrollingBackground::draw_offset_traced`] emits while updating. All
//! method bodies default to no-ops, so implementing only the events you care
//! about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` enables the `Tracer` method bodies.
//! - `trace-rich` (implies `trace`) gates per-child [`WrapEvent`]s.
//!
//! [`ScrollingBackground::draw_offset_traced`]: crate::scroll::ScrollingBackground::draw_offset_traced

use crate::axis::Axis;
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when an axis applies one or more pixel steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollStepEvent {
    /// Axis that stepped.
    pub axis: Axis,
    /// Time the update observed.
    pub now: HostTime,
    /// Whole pixel steps applied in this update.
    pub steps: u64,
    /// Deadline for the next step after this one.
    pub next_deadline: HostTime,
}

/// Emitted when a child crosses the wrap threshold.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WrapEvent {
    /// Axis on which the wrap happened.
    pub axis: Axis,
    /// Index of the child in registration order.
    pub child_index: usize,
    /// How many reappear offsets were added.
    pub wraps: u32,
}

/// Emitted after a scroll step rebuilds the backing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedrawEvent {
    /// Time of the redraw.
    pub now: HostTime,
    /// Number of children drawn (each one four times).
    pub children: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from a scrolling composite.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an axis steps.
    fn on_scroll_step(&mut self, e: &ScrollStepEvent) {
        _ = e;
    }

    /// Called when a child wraps (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_wrap(&mut self, e: &WrapEvent) {
        _ = e;
    }

    /// Called after a redraw.
    fn on_redraw(&mut self, e: &RedrawEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ScrollStepEvent`].
    #[inline]
    pub fn scroll_step(&mut self, e: &ScrollStepEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_scroll_step(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`WrapEvent`] (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn wrap(&mut self, e: &WrapEvent) {
        if let Some(s) = &mut self.sink {
            s.on_wrap(e);
        }
    }

    /// Emits a [`RedrawEvent`].
    #[inline]
    pub fn redraw(&mut self, e: &RedrawEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_redraw(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
