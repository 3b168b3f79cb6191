// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why an embedded lookup was skipped or failed.
///
/// Never returned to callers: every variant is logged and followed by a
/// filesystem attempt.
#[derive(Debug, Error)]
pub(crate) enum ResolveError {
    #[error("{} is not under the asset base {}", path.display(), base.display())]
    OutsideBase { path: PathBuf, base: PathBuf },

    #[error("embedded lookup of {} failed: {source}", path.display())]
    Lookup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
