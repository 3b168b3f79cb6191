// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are printed in milliseconds.

use std::io::Write;

use backdrop_core::axis::Axis;
use backdrop_core::time::HostTime;
use backdrop_core::trace::{RedrawEvent, ScrollStepEvent, TraceSink, WrapEvent};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn ms(t: HostTime) -> f64 {
    t.nanos() as f64 / 1_000_000.0
}

fn axis_name(axis: Axis) -> &'static str {
    match axis {
        Axis::X => "x",
        Axis::Y => "y",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_scroll_step(&mut self, e: &ScrollStepEvent) {
        let _ = writeln!(
            self.writer,
            "[step] axis={} now={:.1}ms steps={} next={:.1}ms",
            axis_name(e.axis),
            ms(e.now),
            e.steps,
            ms(e.next_deadline),
        );
    }

    fn on_wrap(&mut self, e: &WrapEvent) {
        let _ = writeln!(
            self.writer,
            "[wrap] axis={} child={} wraps={}",
            axis_name(e.axis),
            e.child_index,
            e.wraps,
        );
    }

    fn on_redraw(&mut self, e: &RedrawEvent) {
        let _ = writeln!(
            self.writer,
            "[redraw] now={:.1}ms children={}",
            ms(e.now),
            e.children,
        );
    }
}
