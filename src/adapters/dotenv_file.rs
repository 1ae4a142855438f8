// SPDX-License-Identifier: MIT OR Apache-2.0

//! `.env` file parser and configuration source adapter.
//!
//! This module provides [`DotenvParser`], which implements the line rules of the
//! environment file format, and [`DotenvFileAdapter`], which exposes a parsed file as a
//! [`ValueSource`].

use crate::adapters::LocalFileSystem;
use crate::domain::{DotenvError, EnvStore, Entry, Result, Value};
use crate::ports::{EnvParser, FileSystem, ValueSource};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Default environment file name.
pub const DEFAULT_FILE_NAME: &str = ".env";

/// Default key/value delimiter.
pub const DEFAULT_DELIMITER: char = '=';

/// Default comment marker.
pub const DEFAULT_COMMENT: char = '#';

/// Parser for `key<delimiter>value` lines.
///
/// For each line:
///
/// - a line whose first non-whitespace character is the comment marker is skipped;
/// - an empty or whitespace-only line is skipped;
/// - the line must split on the delimiter into exactly two segments, otherwise
///   [`DotenvError::MalformedPair`] is returned, so values cannot contain the delimiter;
/// - both segments are trimmed and must be non-empty, otherwise
///   [`DotenvError::EmptyPair`] is returned;
/// - the value is run through [`Value::infer`].
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::DotenvParser;
/// use hexenv::domain::Value;
/// use hexenv::ports::EnvParser;
///
/// let parser = DotenvParser::new();
/// let entries = parser.parse("API_KEY=some-value\nBUILD_NUMBER=5\n").unwrap();
///
/// assert_eq!(entries[0].key, "API_KEY");
/// assert_eq!(entries[0].value, Value::from("some-value"));
/// assert_eq!(entries[1].value, Value::Integer(5));
///
/// assert!(parser.parse("A=B=C").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DotenvParser {
    delimiter: char,
    comment: char,
}

impl DotenvParser {
    /// Creates a parser with the default delimiter (`=`) and comment marker (`#`).
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            comment: DEFAULT_COMMENT,
        }
    }

    /// Sets the key/value delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the comment marker.
    pub fn with_comment(mut self, comment: char) -> Self {
        self.comment = comment;
        self
    }

    /// Returns the key/value delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Splits a line into its trimmed key and raw value text, without inferring a type.
    ///
    /// Applies the same skip and validation rules as
    /// [`parse_line`](EnvParser::parse_line). The raw value keeps its quotes and
    /// escapes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexenv::adapters::DotenvParser;
    ///
    /// let parser = DotenvParser::new();
    /// assert_eq!(parser.split_line(" ZIP = 007 ", 1).unwrap(), Some(("ZIP", "007")));
    /// assert_eq!(parser.split_line("# note", 2).unwrap(), None);
    /// ```
    pub fn split_line<'a>(
        &self,
        line: &'a str,
        line_number: usize,
    ) -> Result<Option<(&'a str, &'a str)>> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let content = line.trim_start();

        if content.is_empty() {
            tracing::trace!("Skipping blank line {}", line_number);
            return Ok(None);
        }
        if content.starts_with(self.comment) {
            tracing::trace!("Skipping comment on line {}", line_number);
            return Ok(None);
        }

        let mut segments = line.split(self.delimiter);
        let (Some(key), Some(value), None) = (segments.next(), segments.next(), segments.next())
        else {
            return Err(DotenvError::MalformedPair { line: line_number });
        };

        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            return Err(DotenvError::EmptyPair {
                key: key.to_string(),
                value: value.to_string(),
                line: Some(line_number),
            });
        }

        Ok(Some((key, value)))
    }

    /// Parses text straight into a store.
    ///
    /// Repeated keys keep their first position and their last value.
    pub fn parse_store(&self, content: &str) -> Result<EnvStore> {
        Ok(self.parse(content)?.into_iter().collect())
    }
}

impl Default for DotenvParser {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvParser for DotenvParser {
    fn parse_line(&self, line: &str, line_number: usize) -> Result<Option<Entry>> {
        Ok(self
            .split_line(line, line_number)?
            .map(|(key, raw)| Entry::new(key, Value::infer(raw))))
    }

    fn parse(&self, content: &str) -> Result<Vec<Entry>> {
        let entries = content
            .lines()
            .enumerate()
            .filter_map(|(index, line)| self.parse_line(line, index + 1).transpose())
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Parsed {} environment entries", entries.len());
        Ok(entries)
    }
}

/// Reads an environment file through `fs`, mapping failures onto the load errors.
pub(crate) fn read_env_file(fs: &dyn FileSystem, path: &Path) -> Result<String> {
    if !fs.exists(path) {
        return Err(DotenvError::MissingSource {
            path: path.to_path_buf(),
        });
    }

    fs.read_text(path)
        .map_err(|source| DotenvError::UnreadableSource {
            path: path.to_path_buf(),
            source,
        })
}

/// Configuration source adapter for `.env` files.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::DotenvFileAdapter;
/// use hexenv::domain::Value;
/// use hexenv::ports::ValueSource;
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join(".env");
/// std::fs::write(&path, "NETWORK_RETRIES=3\n").unwrap();
///
/// let adapter = DotenvFileAdapter::from_file(&path).unwrap();
/// assert_eq!(adapter.lookup("NETWORK_RETRIES"), Some(Value::Integer(3)));
/// ```
#[derive(Clone, Debug)]
pub struct DotenvFileAdapter {
    /// Path to the `.env` file
    file_path: PathBuf,
    /// Parsed values
    store: EnvStore,
    /// Parser used for the initial load and every reload
    parser: DotenvParser,
}

impl DotenvFileAdapter {
    /// Loads a `.env` file with the default parser.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_parser(path, DotenvParser::new())
    }

    /// Loads a `.env` file with a custom parser.
    pub fn with_parser<P: AsRef<Path>>(path: P, parser: DotenvParser) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        let content = read_env_file(&LocalFileSystem, &file_path)?;
        let store = parser.parse_store(&content)?;

        tracing::debug!(
            "Loaded {} entries from {}",
            store.len(),
            file_path.display()
        );

        Ok(Self {
            file_path,
            store,
            parser,
        })
    }

    /// Loads `.env` from the OS-appropriate configuration directory.
    ///
    /// This uses the `directories` crate, e.g. `~/.config/<app_name>/.env` on Linux.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use hexenv::adapters::DotenvFileAdapter;
    ///
    /// let adapter = DotenvFileAdapter::from_default_location("myapp", "com.example").unwrap();
    /// ```
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::from_file(Self::default_location(app_name, qualifier)?)
    }

    /// Returns the path [`from_default_location`](Self::from_default_location) reads.
    pub fn default_location(app_name: &str, qualifier: &str) -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            DotenvError::NoConfigDirectory {
                app_name: app_name.to_string(),
            }
        })?;

        Ok(proj_dirs.config_dir().join(DEFAULT_FILE_NAME))
    }

    /// Returns the path to the `.env` file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the parsed values.
    pub fn store(&self) -> &EnvStore {
        &self.store
    }

    /// Consumes the adapter, returning the parsed values.
    pub fn into_store(self) -> EnvStore {
        self.store
    }
}

impl ValueSource for DotenvFileAdapter {
    fn name(&self) -> &str {
        "dotenv-file"
    }

    fn lookup(&self, key: &str) -> Option<Value> {
        self.store.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.store.keys().map(str::to_string).collect()
    }

    fn reload(&mut self) -> Result<()> {
        let content = read_env_file(&LocalFileSystem, &self.file_path)?;
        self.store = self.parser.parse_store(&content)?;
        Ok(())
    }
}
