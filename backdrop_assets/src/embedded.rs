// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Injected access to assets compiled into the binary.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

type ReadFn = dyn Fn(&Path) -> io::Result<Vec<u8>> + Send + Sync;
type ListFn = dyn Fn(&Path) -> io::Result<Vec<String>> + Send + Sync;

/// Lookup functions for assets embedded in the binary.
///
/// Both functions receive a path relative to the reader's base directory.
/// Either may be left unset, in which case that kind of lookup always goes
/// straight to the filesystem.
#[derive(Default)]
pub struct EmbeddedAssets {
    read: Option<Box<ReadFn>>,
    list: Option<Box<ListFn>>,
}

impl fmt::Debug for EmbeddedAssets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedAssets")
            .field("read", &self.read.is_some())
            .field("list", &self.list.is_some())
            .finish()
    }
}

impl EmbeddedAssets {
    /// No embedded lookups.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the function that reads embedded bytes by relative path.
    #[must_use]
    pub fn with_reader<F>(mut self, read: F) -> Self
    where
        F: Fn(&Path) -> io::Result<Vec<u8>> + Send + Sync + 'static,
    {
        self.read = Some(Box::new(read));
        self
    }

    /// Sets the function that lists embedded directory entries by relative
    /// path.
    #[must_use]
    pub fn with_lister<F>(mut self, list: F) -> Self
    where
        F: Fn(&Path) -> io::Result<Vec<String>> + Send + Sync + 'static,
    {
        self.list = Some(Box::new(list));
        self
    }

    /// Serves reads and listings from an in-memory map of relative paths to
    /// bytes.
    ///
    /// Listing a directory yields the names of its immediate children, files
    /// and subdirectories alike, sorted.
    #[must_use]
    pub fn from_map(files: HashMap<PathBuf, Vec<u8>>) -> Self {
        let files = std::sync::Arc::new(files);
        let for_list = files.clone();
        Self::new()
            .with_reader(move |path| {
                files.get(path).cloned().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::NotFound, "no such embedded asset")
                })
            })
            .with_lister(move |dir| {
                let names: BTreeSet<String> = for_list
                    .keys()
                    .filter_map(|key| key.strip_prefix(dir).ok())
                    .filter_map(|rest| rest.components().next())
                    .map(|first| first.as_os_str().to_string_lossy().into_owned())
                    .collect();
                if names.is_empty() {
                    return Err(io::Error::new(
                        io::ErrorKind::NotFound,
                        "no such embedded directory",
                    ));
                }
                Ok(names.into_iter().collect())
            })
    }

    pub(crate) fn read(&self, rel: &Path) -> io::Result<Vec<u8>> {
        match &self.read {
            Some(read) => read(rel),
            None => Err(io::ErrorKind::Unsupported.into()),
        }
    }

    pub(crate) fn list(&self, rel: &Path) -> io::Result<Vec<String>> {
        match &self.list {
            Some(list) => list(rel),
            None => Err(io::ErrorKind::Unsupported.into()),
        }
    }

    pub(crate) fn can_read(&self) -> bool {
        self.read.is_some()
    }

    pub(crate) fn can_list(&self) -> bool {
        self.list.is_some()
    }
}
