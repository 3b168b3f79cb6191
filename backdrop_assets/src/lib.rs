// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Asset reading with an embedded-data first, filesystem second fallback.
//!
//! Games ship some assets compiled into the binary and keep others on disk
//! for modding or development. An [`AssetReader`] hides that split:
//!
//! ```text
//!   read_file("bg/sky.png")
//!       │
//!       ├─► relative to base dir ──► EmbeddedAssets::read ──► hit: bytes
//!       │                                    │
//!       │                           miss / outside base: warn!
//!       ▼
//!   fs::read(base/bg/sky.png) ──► bytes or io::Error
//! ```
//!
//! Embedded lookups are injected through [`EmbeddedAssets`] rather than
//! read from a global, so tests and tools can supply their own.
//!
//! Embedded failures never reach the caller; they are logged through
//! `tracing` and the filesystem is tried instead. Filesystem failures are
//! returned as [`std::io::Error`].

mod embedded;
mod error;
mod reader;

pub use embedded::EmbeddedAssets;
pub use reader::{AssetEntry, AssetOrigin, AssetReader};
