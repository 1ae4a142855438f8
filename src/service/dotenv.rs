// SPDX-License-Identifier: MIT OR Apache-2.0

//! The load / save / configure facade.
//!
//! [`Dotenv`] ties the parser, the filesystem and the process environment together.
//! It is built with [`DotenvBuilder`], which carries the options every operation uses.

use crate::adapters::dotenv_file::{
    read_env_file, DotenvParser, DEFAULT_COMMENT, DEFAULT_DELIMITER, DEFAULT_FILE_NAME,
};
use crate::adapters::{LocalFileSystem, SystemEnv};
use crate::domain::naming;
use crate::domain::value::unquote;
use crate::domain::{DotenvError, EnvStore, FallbackStrategy, Result, Value};
use crate::ports::{FileSystem, ProcessEnv};
use crate::service::Environment;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Options shared by every facade operation.
#[derive(Clone, Debug, PartialEq)]
pub struct DotenvOptions {
    /// Key/value delimiter used for parsing and saving.
    pub delimiter: char,
    /// Comment marker used for parsing.
    pub comment: char,
    /// Strategy handed to resolvers built by [`Dotenv::load_environment`].
    pub fallback: FallbackStrategy,
    /// Path used by [`Dotenv::load_default`].
    pub default_path: PathBuf,
}

impl Default for DotenvOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            comment: DEFAULT_COMMENT,
            fallback: FallbackStrategy::default(),
            default_path: PathBuf::from(DEFAULT_FILE_NAME),
        }
    }
}

/// Loads, saves and applies environment files.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::MemoryEnv;
/// use hexenv::domain::Value;
/// use hexenv::ports::ProcessEnv;
/// use hexenv::service::Dotenv;
/// use std::sync::Arc;
///
/// # fn main() -> hexenv::domain::Result<()> {
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join(".env");
/// std::fs::write(&path, "API_KEY=some-value\nBUILD_NUMBER=5\n").unwrap();
///
/// let env = Arc::new(MemoryEnv::new());
/// let dotenv = Dotenv::builder().process_env(env.clone()).build();
///
/// let store = dotenv.load(&path)?;
/// assert_eq!(store["BUILD_NUMBER"], Value::Integer(5));
///
/// assert_eq!(dotenv.configure(&path, false)?, 2);
/// assert_eq!(env.get("API_KEY").as_deref(), Some("some-value"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Dotenv {
    options: DotenvOptions,
    parser: DotenvParser,
    fs: Arc<dyn FileSystem>,
    process_env: Arc<dyn ProcessEnv>,
}

impl Dotenv {
    /// Creates a facade over the local filesystem and the real process environment.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new facade builder.
    pub fn builder() -> DotenvBuilder {
        DotenvBuilder::new()
    }

    /// Returns the options in effect.
    pub fn options(&self) -> &DotenvOptions {
        &self.options
    }

    /// Reads a process variable, inferring its type.
    ///
    /// Returns `None` when the variable is not set.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.process_env.get(key).map(|raw| Value::infer(&raw))
    }

    /// Looks up a camel-case identifier in the process environment by its
    /// environment key, so `apiKey` reads `API_KEY`.
    pub fn member(&self, identifier: &str) -> Option<Value> {
        self.get(&naming::to_env_key(identifier))
    }

    /// Sets a process variable to `value` verbatim.
    ///
    /// With `overwrite` set to `false` an existing variable is left untouched. Returns
    /// `true` if the variable was written.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexenv::adapters::MemoryEnv;
    /// use hexenv::domain::Value;
    /// use hexenv::service::Dotenv;
    /// use std::sync::Arc;
    ///
    /// let dotenv = Dotenv::builder().process_env(Arc::new(MemoryEnv::new())).build();
    ///
    /// assert!(dotenv.set("API_KEY", "1234", true).unwrap());
    /// assert_eq!(dotenv.member("apiKey"), Some(Value::Integer(1234)));
    ///
    /// assert!(!dotenv.set("API_KEY", "other", false).unwrap());
    /// assert_eq!(dotenv.get("API_KEY"), Some(Value::Integer(1234)));
    /// ```
    pub fn set(&self, key: &str, value: &str, overwrite: bool) -> Result<bool> {
        self.process_env.set(key, value, overwrite)
    }

    /// Loads an environment file into a store.
    ///
    /// # Errors
    ///
    /// - [`DotenvError::MissingSource`] if nothing exists at `path`.
    /// - [`DotenvError::UnreadableSource`] if the file cannot be read as UTF-8 text.
    /// - [`DotenvError::MalformedPair`] or [`DotenvError::EmptyPair`] for the first bad
    ///   line; nothing is returned for a file with any bad line.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<EnvStore> {
        let path = path.as_ref();
        let content = read_env_file(self.fs.as_ref(), path)?;
        let store = self.parser.parse_store(&content)?;

        tracing::debug!("Loaded {} entries from {}", store.len(), path.display());
        Ok(store)
    }

    /// Loads the file at the configured default path.
    pub fn load_default(&self) -> Result<EnvStore> {
        self.load(&self.options.default_path)
    }

    /// Loads an environment file and wraps it in a resolver.
    ///
    /// The resolver shares this facade's process environment and uses the configured
    /// fallback strategy.
    pub fn load_environment<P: AsRef<Path>>(&self, path: P) -> Result<Environment> {
        let store = self.load(path)?;
        Ok(Environment::new(
            store,
            Arc::clone(&self.process_env),
            self.options.fallback,
        ))
    }

    /// Writes a store to `path`.
    ///
    /// Without `force`, an existing file is left untouched and
    /// [`DotenvError::DestinationExists`] is returned.
    ///
    /// Nothing is written if an entry would not load back unchanged with the configured
    /// delimiter and comment marker; see [`EnvStore::check_serializable`].
    pub fn save<P: AsRef<Path>>(&self, store: &EnvStore, path: P, force: bool) -> Result<()> {
        let path = path.as_ref();
        store.check_serializable(self.options.delimiter, self.options.comment)?;
        if !force && self.fs.exists(path) {
            return Err(DotenvError::DestinationExists {
                path: path.to_path_buf(),
            });
        }

        self.fs
            .write_text(path, &store.serialize(self.options.delimiter))?;

        tracing::debug!("Saved {} entries to {}", store.len(), path.display());
        Ok(())
    }

    /// Streams an environment file into the process environment.
    ///
    /// Each value is written as it appears in the file, with one pair of surrounding
    /// quotes removed and `\"` unescaped. No type inference is applied, so `007` stays
    /// `007`. With `overwrite` set to `false`, variables that already exist are left
    /// untouched. Returns the number of variables written.
    ///
    /// Lines are applied as they are read: if a later line fails to parse, the
    /// variables from earlier lines stay set.
    pub fn configure<P: AsRef<Path>>(&self, path: P, overwrite: bool) -> Result<usize> {
        let path = path.as_ref();
        if !self.fs.exists(path) {
            return Err(DotenvError::MissingSource {
                path: path.to_path_buf(),
            });
        }

        let unreadable = |source| DotenvError::UnreadableSource {
            path: path.to_path_buf(),
            source,
        };

        let reader = self.fs.open_reader(path).map_err(unreadable)?;
        let mut written = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(unreadable)?;
            if self.apply_line(&line, index + 1, overwrite)? {
                written += 1;
            }
        }

        tracing::debug!(
            "Configured {} variables from {}",
            written,
            path.display()
        );
        Ok(written)
    }

    /// Asynchronous form of [`configure`](Self::configure).
    ///
    /// The file is read through the configured filesystem with
    /// [`FileSystem::open_async_reader`], one line at a time, and lines are applied in
    /// file order.
    #[cfg(feature = "async")]
    pub async fn configure_async<P: AsRef<Path>>(
        &self,
        path: P,
        overwrite: bool,
    ) -> Result<usize> {
        use tokio::io::AsyncBufReadExt;

        let path = path.as_ref();
        if !self.fs.exists(path) {
            return Err(DotenvError::MissingSource {
                path: path.to_path_buf(),
            });
        }

        let unreadable = |source| DotenvError::UnreadableSource {
            path: path.to_path_buf(),
            source,
        };

        let mut lines = self.fs.open_async_reader(path).map_err(unreadable)?.lines();
        let mut line_number = 0;
        let mut written = 0;
        while let Some(line) = lines.next_line().await.map_err(unreadable)? {
            line_number += 1;
            if self.apply_line(&line, line_number, overwrite)? {
                written += 1;
            }
        }

        tracing::debug!(
            "Configured {} variables from {}",
            written,
            path.display()
        );
        Ok(written)
    }

    fn apply_line(&self, line: &str, line_number: usize, overwrite: bool) -> Result<bool> {
        let Some((key, raw)) = self.parser.split_line(line, line_number)? else {
            return Ok(false);
        };

        let written = self.process_env.set(key, &unquote(raw), overwrite)?;
        if !written {
            tracing::trace!("Kept existing variable '{}'", key);
        }
        Ok(written)
    }
}

impl Default for Dotenv {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Dotenv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dotenv")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Dotenv`] facade.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::MemoryEnv;
/// use hexenv::domain::{DataSource, FallbackStrategy};
/// use hexenv::service::DotenvBuilder;
/// use std::sync::Arc;
///
/// let dotenv = DotenvBuilder::new()
///     .delimiter(':')
///     .comment(';')
///     .fallback(FallbackStrategy::only(DataSource::ConfigurationStore))
///     .default_path("config/app.env")
///     .process_env(Arc::new(MemoryEnv::new()))
///     .build();
///
/// assert_eq!(dotenv.options().delimiter, ':');
/// ```
pub struct DotenvBuilder {
    options: DotenvOptions,
    fs: Arc<dyn FileSystem>,
    process_env: Arc<dyn ProcessEnv>,
}

impl DotenvBuilder {
    /// Creates a builder with default options, the local filesystem and the real
    /// process environment.
    pub fn new() -> Self {
        Self {
            options: DotenvOptions::default(),
            fs: Arc::new(LocalFileSystem::new()),
            process_env: Arc::new(SystemEnv::new()),
        }
    }

    /// Replaces every option at once.
    pub fn options(mut self, options: DotenvOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the key/value delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.options.delimiter = delimiter;
        self
    }

    /// Sets the comment marker.
    pub fn comment(mut self, comment: char) -> Self {
        self.options.comment = comment;
        self
    }

    /// Sets the fallback strategy for resolvers.
    pub fn fallback(mut self, fallback: FallbackStrategy) -> Self {
        self.options.fallback = fallback;
        self
    }

    /// Sets the path used by [`Dotenv::load_default`].
    pub fn default_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.default_path = path.into();
        self
    }

    /// Sets the filesystem used by load, save and configure.
    pub fn file_system(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    /// Sets the process environment read by resolvers and written by configure.
    pub fn process_env(mut self, process_env: Arc<dyn ProcessEnv>) -> Self {
        self.process_env = process_env;
        self
    }

    /// Builds the facade.
    pub fn build(self) -> Dotenv {
        let parser = DotenvParser::new()
            .with_delimiter(self.options.delimiter)
            .with_comment(self.options.comment);

        Dotenv {
            options: self.options,
            parser,
            fs: self.fs,
            process_env: self.process_env,
        }
    }
}

impl Default for DotenvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
