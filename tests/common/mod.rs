// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures and test doubles for integration tests.

#![allow(dead_code)]

use hexenv::ports::FileSystem;
use std::collections::HashMap;
use std::io::{self, BufRead, Cursor};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// A representative environment file.
pub const FIXTURE: &str = r#"# Service credentials
API_KEY=some-value
BUILD_NUMBER=5
IDENTIFIER=com.app.example

# Feature flags
ONBOARDING_ENABLED=true
NETWORK_TIMEOUT=10.5
NETWORK_RETRIES=3
MAIL_TEMPLATE="The \"Quoted\" Title"
DB_PASSPHRASE="1qaz?#@\"' wsx$"
"#;

/// Writes `contents` to `<dir>/<name>` and returns the path.
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Writes [`FIXTURE`] to `<dir>/.env` and returns the path.
pub fn write_fixture(dir: &TempDir) -> PathBuf {
    write_file(dir, ".env", FIXTURE)
}

/// In-memory filesystem that counts reads and writes.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    writes: Arc<Mutex<usize>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), contents.to_string());
        self
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        self.contents(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        *self.writes.lock().unwrap() += 1;
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn open_reader(&self, path: &Path) -> io::Result<Box<dyn BufRead + Send>> {
        let contents = self.read_text(path)?;
        Ok(Box::new(Cursor::new(contents.into_bytes())))
    }
}
