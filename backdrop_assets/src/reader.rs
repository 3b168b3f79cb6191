// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The embedded-then-filesystem reader.

use std::fs::{self, File};
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

use crate::embedded::EmbeddedAssets;
use crate::error::ResolveError;

/// Where a directory entry came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetOrigin {
    /// Listed by the embedded lister.
    Embedded,
    /// Listed by the filesystem.
    Filesystem,
}

/// One entry of a [`AssetReader::read_dir`] listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetEntry {
    /// File name without any directory component.
    pub name: String,
    /// Whether the entry is a directory.
    ///
    /// Embedded listings carry no type information, so an embedded name
    /// without a `.` is taken to be a directory.
    pub is_dir: bool,
    /// Which source produced the entry.
    pub source: AssetOrigin,
}

/// Reads assets from embedded data first and the filesystem second.
///
/// Paths handed to the reader are either relative to its base directory or
/// absolute paths under it. The embedded lookup always sees the path
/// relative to the base; the filesystem sees it joined onto the base.
#[derive(Debug)]
pub struct AssetReader {
    base: PathBuf,
    embedded: Option<EmbeddedAssets>,
}

impl AssetReader {
    /// A reader that only consults the filesystem.
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            embedded: None,
        }
    }

    /// A reader that tries `embedded` before the filesystem.
    #[must_use]
    pub fn with_embedded(base: impl Into<PathBuf>, embedded: EmbeddedAssets) -> Self {
        Self {
            base: base.into(),
            embedded: Some(embedded),
        }
    }

    /// A filesystem-only reader rooted at the process working directory.
    ///
    /// # Errors
    ///
    /// Returns the error from [`std::env::current_dir`].
    pub fn from_current_dir() -> io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// The directory relative paths are resolved against.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Opens an asset for reading.
    ///
    /// # Errors
    ///
    /// Returns the filesystem error when the embedded lookup does not
    /// produce the asset and [`File::open`] fails.
    pub fn open(&self, path: impl AsRef<Path>) -> io::Result<Box<dyn Read>> {
        let path = path.as_ref();
        if let Some(bytes) = self.embedded_bytes(path) {
            return Ok(Box::new(Cursor::new(bytes)));
        }
        Ok(Box::new(File::open(self.disk_path(path))?))
    }

    /// Reads an asset to the end.
    ///
    /// # Errors
    ///
    /// Returns the filesystem error when the embedded lookup does not
    /// produce the asset and [`fs::read`] fails.
    pub fn read_file(&self, path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
        let path = path.as_ref();
        if let Some(bytes) = self.embedded_bytes(path) {
            return Ok(bytes);
        }
        fs::read(self.disk_path(path))
    }

    /// Lists a directory: embedded entries first, then filesystem entries.
    ///
    /// Names present in both sources are reported twice, once per source.
    ///
    /// # Errors
    ///
    /// Returns the filesystem error when the directory cannot be read from
    /// disk, even if the embedded lister produced entries.
    pub fn read_dir(&self, path: impl AsRef<Path>) -> io::Result<Vec<AssetEntry>> {
        let path = path.as_ref();
        let mut entries: Vec<AssetEntry> = self
            .embedded_names(path)
            .into_iter()
            .map(|name| AssetEntry {
                is_dir: !name.contains('.'),
                name,
                source: AssetOrigin::Embedded,
            })
            .collect();

        for entry in fs::read_dir(self.disk_path(path))? {
            let entry = entry?;
            entries.push(AssetEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type()?.is_dir(),
                source: AssetOrigin::Filesystem,
            });
        }
        Ok(entries)
    }

    fn embedded_bytes(&self, path: &Path) -> Option<Vec<u8>> {
        let embedded = self.embedded.as_ref().filter(|e| e.can_read())?;
        let found = self.relative(path).and_then(|rel| {
            embedded
                .read(&rel)
                .map_err(|source| ResolveError::Lookup { path: rel, source })
        });
        self.settle(path, found)
    }

    fn embedded_names(&self, path: &Path) -> Vec<String> {
        let Some(embedded) = self.embedded.as_ref().filter(|e| e.can_list()) else {
            return Vec::new();
        };
        let found = self.relative(path).and_then(|rel| {
            embedded
                .list(&rel)
                .map_err(|source| ResolveError::Lookup { path: rel, source })
        });
        self.settle(path, found).unwrap_or_default()
    }

    fn settle<T>(&self, path: &Path, found: Result<T, ResolveError>) -> Option<T> {
        match found {
            Ok(value) => {
                tracing::trace!(path = %path.display(), "served from embedded data");
                Some(value)
            }
            Err(err) => {
                tracing::warn!(
                    base = %self.base.display(),
                    error = %err,
                    "embedded lookup failed, trying the filesystem"
                );
                None
            }
        }
    }

    fn relative(&self, path: &Path) -> Result<PathBuf, ResolveError> {
        if path.is_relative() {
            return Ok(path.to_path_buf());
        }
        path.strip_prefix(&self.base)
            .map(Path::to_path_buf)
            .map_err(|_| ResolveError::OutsideBase {
                path: path.to_path_buf(),
                base: self.base.clone(),
            })
    }

    fn disk_path(&self, path: &Path) -> PathBuf {
        // Joining an absolute path replaces the base.
        self.base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn embedded() -> EmbeddedAssets {
        EmbeddedAssets::from_map(HashMap::from([
            (PathBuf::from("bg/sky.png"), b"embedded sky".to_vec()),
            (PathBuf::from("bg/clouds/far.png"), b"far".to_vec()),
            (PathBuf::from("only/here.txt"), b"here".to_vec()),
        ]))
    }

    fn disk() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("bg")).unwrap();
        fs::create_dir(dir.path().join("bg/near")).unwrap();
        fs::write(dir.path().join("bg/sky.png"), b"disk sky").unwrap();
        fs::write(dir.path().join("bg/ground.png"), b"disk ground").unwrap();
        dir
    }

    fn names(entries: &[AssetEntry], source: AssetOrigin) -> Vec<(&str, bool)> {
        let mut out: Vec<_> = entries
            .iter()
            .filter(|e| e.source == source)
            .map(|e| (e.name.as_str(), e.is_dir))
            .collect();
        out.sort_unstable();
        out
    }

    // --- read_file / open ---

    #[test]
    fn embedded_hit_wins_over_disk() {
        let dir = disk();
        let reader = AssetReader::with_embedded(dir.path(), embedded());
        assert_eq!(reader.read_file("bg/sky.png").unwrap(), b"embedded sky");
    }

    #[test]
    fn embedded_miss_falls_back_to_disk() {
        let dir = disk();
        let reader = AssetReader::with_embedded(dir.path(), embedded());
        assert_eq!(reader.read_file("bg/ground.png").unwrap(), b"disk ground");
    }

    #[test]
    fn absolute_path_under_base_uses_embedded_key() {
        let dir = disk();
        let reader = AssetReader::with_embedded(dir.path(), embedded());
        let bytes = reader.read_file(dir.path().join("bg/sky.png")).unwrap();
        assert_eq!(bytes, b"embedded sky", "absolute path must be made relative");
    }

    #[test]
    fn path_outside_base_falls_back_to_disk() {
        let dir = disk();
        let other = tempfile::tempdir().unwrap();
        let outside = other.path().join("bg/sky.png");
        fs::create_dir(other.path().join("bg")).unwrap();
        fs::write(&outside, b"outside sky").unwrap();

        let reader = AssetReader::with_embedded(dir.path(), embedded());
        assert_eq!(reader.read_file(&outside).unwrap(), b"outside sky");
    }

    #[test]
    fn missing_everywhere_propagates_not_found() {
        let dir = disk();
        let reader = AssetReader::with_embedded(dir.path(), embedded());
        let err = reader.read_file("bg/moon.png").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(reader.open("bg/moon.png").is_err(), "open must fail too");
    }

    #[test]
    fn filesystem_only_reader_reads_disk() {
        let dir = disk();
        let reader = AssetReader::new(dir.path());
        assert_eq!(reader.read_file("bg/sky.png").unwrap(), b"disk sky");
    }

    #[test]
    fn open_streams_either_source() {
        let dir = disk();
        let reader = AssetReader::with_embedded(dir.path(), embedded());

        let mut buf = String::new();
        reader
            .open("only/here.txt")
            .unwrap()
            .read_to_string(&mut buf)
            .unwrap();
        assert_eq!(buf, "here");

        buf.clear();
        reader
            .open("bg/ground.png")
            .unwrap()
            .read_to_string(&mut buf)
            .unwrap();
        assert_eq!(buf, "disk ground");
    }

    #[test]
    fn lister_without_reader_still_reads_disk() {
        let dir = disk();
        let embedded = EmbeddedAssets::new().with_lister(|_| Ok(vec!["x.png".to_owned()]));
        let reader = AssetReader::with_embedded(dir.path(), embedded);
        assert_eq!(reader.read_file("bg/sky.png").unwrap(), b"disk sky");
    }

    // --- read_dir ---

    #[test]
    fn read_dir_merges_embedded_then_disk() {
        let dir = disk();
        let reader = AssetReader::with_embedded(dir.path(), embedded());
        let entries = reader.read_dir("bg").unwrap();

        assert_eq!(
            entries[0].source,
            AssetOrigin::Embedded,
            "embedded entries come first"
        );
        assert_eq!(
            names(&entries, AssetOrigin::Embedded),
            vec![("clouds", true), ("sky.png", false)]
        );
        assert_eq!(
            names(&entries, AssetOrigin::Filesystem),
            vec![("ground.png", false), ("near", true), ("sky.png", false)]
        );
    }

    #[test]
    fn read_dir_embedded_only_directory_propagates_disk_error() {
        let dir = tempfile::tempdir().unwrap();
        let embedded = EmbeddedAssets::from_map(HashMap::from([(
            PathBuf::from("only/a.txt"),
            b"a".to_vec(),
        )]));
        let reader = AssetReader::with_embedded(dir.path(), embedded);

        assert_eq!(reader.read_file("only/a.txt").unwrap(), b"a");
        let err = reader.read_dir("only").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound, "embedded entries are not enough");
    }

    #[test]
    fn read_dir_missing_everywhere_propagates() {
        let dir = disk();
        let reader = AssetReader::with_embedded(dir.path(), embedded());
        let err = reader.read_dir("music").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn read_dir_lister_error_is_not_fatal() {
        let dir = disk();
        let embedded = EmbeddedAssets::new()
            .with_lister(|_| Err(io::Error::other("corrupt index")));
        let reader = AssetReader::with_embedded(dir.path(), embedded);
        let entries = reader.read_dir("bg").unwrap();
        assert_eq!(entries.len(), 3, "disk entries only");
    }
}
