// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].

use backdrop_core::axis::Axis;
use backdrop_core::time::HostTime;
use backdrop_core::trace::{RedrawEvent, ScrollStepEvent, TraceSink, WrapEvent};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_SCROLL_STEP: u8 = 1;
const TAG_WRAP: u8 = 2;
const TAG_REDRAW: u8 = 3;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_axis(&mut self, axis: Axis) {
        self.write_u8(match axis {
            Axis::X => 0,
            Axis::Y => 1,
        });
    }

    fn write_count(&mut self, n: usize) {
        self.write_u64(u64::try_from(n).unwrap_or(u64::MAX));
    }
}

impl TraceSink for RecorderSink {
    fn on_scroll_step(&mut self, e: &ScrollStepEvent) {
        self.write_u8(TAG_SCROLL_STEP);
        self.write_axis(e.axis);
        self.write_u64(e.now.nanos());
        self.write_u64(e.steps);
        self.write_u64(e.next_deadline.nanos());
    }

    fn on_wrap(&mut self, e: &WrapEvent) {
        self.write_u8(TAG_WRAP);
        self.write_axis(e.axis);
        self.write_count(e.child_index);
        self.write_u32(e.wraps);
    }

    fn on_redraw(&mut self, e: &RedrawEvent) {
        self.write_u8(TAG_REDRAW);
        self.write_u64(e.now.nanos());
        self.write_count(e.children);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// A [`ScrollStepEvent`].
    ScrollStep(ScrollStepEvent),
    /// A [`WrapEvent`].
    Wrap(WrapEvent),
    /// A [`RedrawEvent`].
    Redraw(RedrawEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first unknown tag or truncated record.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?;
        self.pos += N;
        bytes.try_into().ok()
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[v]| v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    fn read_axis(&mut self) -> Option<Axis> {
        match self.read_u8()? {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            _ => None,
        }
    }

    fn read_count(&mut self) -> Option<usize> {
        usize::try_from(self.read_u64()?).ok()
    }

    fn decode_scroll_step(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::ScrollStep(ScrollStepEvent {
            axis: self.read_axis()?,
            now: HostTime(self.read_u64()?),
            steps: self.read_u64()?,
            next_deadline: HostTime(self.read_u64()?),
        }))
    }

    fn decode_wrap(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Wrap(WrapEvent {
            axis: self.read_axis()?,
            child_index: self.read_count()?,
            wraps: self.read_u32()?,
        }))
    }

    fn decode_redraw(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Redraw(RedrawEvent {
            now: HostTime(self.read_u64()?),
            children: self.read_count()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_u8()? {
            TAG_SCROLL_STEP => self.decode_scroll_step(),
            TAG_WRAP => self.decode_wrap(),
            TAG_REDRAW => self.decode_redraw(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
