// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrolling composites.
//!
//! A [`ScrollingBackground`] owns a viewport-sized backing [`Sprite`] and a
//! list of shared child drawables. Each draw runs a small per-axis state
//! machine:
//!
//! ```text
//!   draw() ──► AxisTicker::take_due(now) ──► shift children by -dir * steps
//!                                                     │
//!                                                     ▼
//!                                        wrap_coordinate() per child
//!                                                     │
//!                                                     ▼
//!              new backing Sprite ◄── composite at tile_offsets() ×4
//!                     │
//!                     ▼
//!              blit into the caller's buffer
//! ```
//!
//! - [`rate`] turns signed milliseconds-per-pixel into a [`ScrollRate`].
//! - [`ticker`] schedules steps so that frame jitter never changes the
//!   long-run rate.
//! - [`wrap`] keeps children inside the reappear band.
//! - [`tile`] computes the four compositing offsets.
//!
//! [`Sprite`]: crate::sprite::Sprite

mod background;
mod config;
pub mod rate;
pub mod ticker;
pub mod tile;
pub mod wrap;

pub use background::ScrollingBackground;
pub use config::ScrollConfig;
pub use rate::{Direction, ScrollRate};
pub use ticker::AxisTicker;
pub use tile::tile_offsets;
pub use wrap::{WrapPolicy, Wrapped, wrap_coordinate};
