// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! Each axis gets its own track (`tid` 0 for x, 1 for y); redraws go on
//! track 2.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use backdrop_core::axis::Axis;
use backdrop_core::time::HostTime;

use crate::recorder::{RecordedEvent, decode};

const REDRAW_TRACK: u8 = 2;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Wrap events carry no timestamp of their own; they are placed at the
/// time of the scroll step that caused them.
///
/// # Errors
///
/// Returns any error from writing to `writer`.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();
    let mut last_ts = 0.0;

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::ScrollStep(e) => {
                last_ts = to_us(e.now);
                events.push(json!({
                    "ph": "i",
                    "name": "ScrollStep",
                    "cat": "Scroll",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": track(e.axis),
                    "s": "t",
                    "args": {
                        "steps": e.steps,
                        "next_deadline_us": to_us(e.next_deadline),
                    }
                }));
            }
            RecordedEvent::Wrap(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Wrap",
                    "cat": "Rich",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": track(e.axis),
                    "s": "t",
                    "args": {
                        "child_index": e.child_index,
                        "wraps": e.wraps,
                    }
                }));
            }
            RecordedEvent::Redraw(e) => {
                last_ts = to_us(e.now);
                events.push(json!({
                    "ph": "i",
                    "name": "Redraw",
                    "cat": "Surface",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": REDRAW_TRACK,
                    "s": "t",
                    "args": {
                        "children": e.children,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn to_us(t: HostTime) -> f64 {
    t.nanos() as f64 / 1000.0
}

fn track(axis: Axis) -> u8 {
    match axis {
        Axis::X => 0,
        Axis::Y => 1,
    }
}
