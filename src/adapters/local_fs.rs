// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local filesystem adapter.

use crate::ports::FileSystem;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// [`FileSystem`] implementation over `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Creates a new local filesystem adapter.
    pub fn new() -> Self {
        LocalFileSystem
    }
}

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn open_reader(&self, path: &Path) -> io::Result<Box<dyn BufRead + Send>> {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }

    #[cfg(feature = "async")]
    fn open_async_reader(
        &self,
        path: &Path,
    ) -> io::Result<Box<dyn tokio::io::AsyncBufRead + Send + Unpin>> {
        let file = tokio::fs::File::from_std(File::open(path)?);
        Ok(Box::new(tokio::io::BufReader::new(file)))
    }
}
