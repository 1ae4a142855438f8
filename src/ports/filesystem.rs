// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem collaborator trait definition.
//!
//! This module defines the `FileSystem` trait, the only way the facade touches files.
//! Swapping the implementation lets callers load and save environments from somewhere
//! other than the local disk.

use std::io::{self, BufRead};
use std::path::Path;

/// A trait for the file operations the facade needs.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::LocalFileSystem;
/// use hexenv::ports::FileSystem;
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join(".env");
///
/// let fs = LocalFileSystem::new();
/// assert!(!fs.exists(&path));
/// fs.write_text(&path, "KEY=value\n").unwrap();
/// assert_eq!(fs.read_text(&path).unwrap(), "KEY=value\n");
/// ```
pub trait FileSystem: Send + Sync {
    /// Returns `true` if something exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the whole file as UTF-8 text.
    ///
    /// Invalid UTF-8 is reported as an `InvalidData` error.
    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Writes `contents` to `path`, replacing any existing file.
    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Opens the file for buffered, line-by-line reading.
    fn open_reader(&self, path: &Path) -> io::Result<Box<dyn BufRead + Send>>;

    /// Opens the file for asynchronous line-by-line reading.
    ///
    /// The default reads the whole file with [`read_text`](FileSystem::read_text) and
    /// serves it from memory. Implementations backed by real files should stream.
    #[cfg(feature = "async")]
    fn open_async_reader(
        &self,
        path: &Path,
    ) -> io::Result<Box<dyn tokio::io::AsyncBufRead + Send + Unpin>> {
        let contents = self.read_text(path)?;
        Ok(Box::new(io::Cursor::new(contents.into_bytes())))
    }
}
