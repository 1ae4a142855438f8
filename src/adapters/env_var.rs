// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable adapters.
//!
//! This module provides [`SystemEnv`], which reads and writes the real process
//! environment, [`MemoryEnv`], an in-memory table with the same contract, and
//! [`ProcessEnvSource`], which exposes either as a typed [`ValueSource`].

use crate::domain::{DotenvError, Result, Value};
use crate::ports::{ProcessEnv, ValueSource};
use std::collections::HashMap;
use std::env;
use std::sync::{Arc, PoisonError, RwLock};

/// Maximum length for environment variable keys read in bulk (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values read in bulk (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Process environment adapter backed by `std::env`.
///
/// An optional prefix scopes every operation: with prefix `APP_`, `get("PORT")` reads
/// `APP_PORT` and `set("PORT", ..)` writes `APP_PORT`.
///
/// The OS table is shared by the whole process. Callers that mutate it from several
/// threads must serialise those calls themselves.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::SystemEnv;
/// use hexenv::ports::ProcessEnv;
///
/// let env = SystemEnv::with_prefix("HEXENV_DOC_");
/// env.set("PORT", "8080", true).unwrap();
/// assert_eq!(std::env::var("HEXENV_DOC_PORT").unwrap(), "8080");
/// assert_eq!(env.get("PORT").as_deref(), Some("8080"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SystemEnv {
    /// Optional prefix applied to every key
    prefix: Option<String>,
}

impl SystemEnv {
    /// Creates an adapter over the whole process environment.
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// Creates an adapter scoped to variables starting with `prefix`.
    ///
    /// The prefix is stripped from keys returned by `get_all`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    fn full_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, key),
            None => key.to_string(),
        }
    }

    fn validate(key: &str, value: &str) -> Result<()> {
        let reason = if key.is_empty() {
            "name is empty"
        } else if key.contains('=') {
            "name contains '='"
        } else if key.contains('\0') {
            "name contains a NUL byte"
        } else if value.contains('\0') {
            "value contains a NUL byte"
        } else {
            return Ok(());
        };
        Err(DotenvError::InvalidVariable {
            key: key.to_string(),
            reason,
        })
    }
}

impl ProcessEnv for SystemEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var_os(self.full_key(key)).and_then(|v| v.into_string().ok())
    }

    fn get_all(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();

        for (key, value) in env::vars_os() {
            let (Ok(key), Ok(value)) = (key.into_string(), value.into_string()) else {
                continue;
            };

            // Validate input sizes to prevent DoS
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={} (max key={}, max value={})",
                    key.len(),
                    value.len(),
                    MAX_ENV_KEY_LEN,
                    MAX_ENV_VALUE_LEN
                );
                continue;
            }

            let key = match &self.prefix {
                Some(prefix) => match key.strip_prefix(prefix.as_str()) {
                    Some(stripped) => stripped.to_string(),
                    None => continue,
                },
                None => key,
            };

            vars.insert(key, value);
        }

        tracing::debug!(
            "Read {} environment variables (prefix={:?})",
            vars.len(),
            self.prefix
        );

        vars
    }

    fn set(&self, key: &str, value: &str, overwrite: bool) -> Result<bool> {
        let full_key = self.full_key(key);
        Self::validate(&full_key, value)?;

        if !overwrite && env::var_os(&full_key).is_some() {
            tracing::trace!("Keeping existing environment variable {}", full_key);
            return Ok(false);
        }

        env::set_var(&full_key, value);
        Ok(true)
    }
}

/// In-memory environment table.
///
/// Useful wherever the real process environment should stay untouched, most of all in
/// tests.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::MemoryEnv;
/// use hexenv::ports::ProcessEnv;
///
/// let env = MemoryEnv::with_values([("API_KEY", "1234")]);
/// assert_eq!(env.get("API_KEY").as_deref(), Some("1234"));
/// assert_eq!(env.get("MISSING"), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl MemoryEnv {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table pre-populated with `values`.
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: RwLock::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl ProcessEnv for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn get_all(&self) -> HashMap<String, String> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, key: &str, value: &str, overwrite: bool) -> Result<bool> {
        let mut vars = self.vars.write().unwrap_or_else(PoisonError::into_inner);
        if !overwrite && vars.contains_key(key) {
            return Ok(false);
        }
        vars.insert(key.to_string(), value.to_string());
        Ok(true)
    }
}

/// Exposes a [`ProcessEnv`] as a typed [`ValueSource`].
///
/// Raw variable text goes through [`Value::infer`]. A variable that is not set resolves
/// to `None`; one that is set to the empty string resolves to an empty `String` value.
#[derive(Clone)]
pub struct ProcessEnvSource {
    env: Arc<dyn ProcessEnv>,
}

impl ProcessEnvSource {
    /// Wraps a process environment.
    pub fn new(env: Arc<dyn ProcessEnv>) -> Self {
        Self { env }
    }

    /// Returns the wrapped process environment.
    pub fn inner(&self) -> &Arc<dyn ProcessEnv> {
        &self.env
    }
}

impl std::fmt::Debug for ProcessEnvSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessEnvSource").finish_non_exhaustive()
    }
}

impl ValueSource for ProcessEnvSource {
    fn name(&self) -> &str {
        "process-env"
    }

    fn lookup(&self, key: &str) -> Option<Value> {
        self.env.get(key).map(|raw| Value::infer(&raw))
    }

    fn keys(&self) -> Vec<String> {
        self.env.get_all().into_keys().collect()
    }
}
