// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value source trait definition.
//!
//! This module defines the `ValueSource` trait, the port the resolver uses to look keys
//! up in either the loaded store or the process environment.

use crate::domain::{EnvStore, Result, Value};

/// A trait for keyed value lookup.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded contexts.
///
/// # Examples
///
/// ```rust
/// use hexenv::domain::Value;
/// use hexenv::ports::ValueSource;
///
/// struct Fixed;
///
/// impl ValueSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn lookup(&self, key: &str) -> Option<Value> {
///         (key == "PORT").then(|| Value::Integer(8080))
///     }
///
///     fn keys(&self) -> Vec<String> {
///         vec!["PORT".to_string()]
///     }
/// }
///
/// assert_eq!(Fixed.lookup("PORT"), Some(Value::Integer(8080)));
/// assert!(Fixed.reload().is_ok());
/// ```
pub trait ValueSource: Send + Sync {
    /// Returns the name of this source, used for logging and debugging.
    fn name(&self) -> &str;

    /// Looks up a key, returning `None` if this source does not have it.
    fn lookup(&self, key: &str) -> Option<Value>;

    /// Returns every key this source can answer for.
    fn keys(&self) -> Vec<String>;

    /// Refreshes the source from its backing storage.
    ///
    /// Sources with nothing to refresh keep the default no-op.
    fn reload(&mut self) -> Result<()> {
        Ok(())
    }
}

impl ValueSource for EnvStore {
    fn name(&self) -> &str {
        "store"
    }

    fn lookup(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        EnvStore::keys(self).map(str::to_string).collect()
    }
}
