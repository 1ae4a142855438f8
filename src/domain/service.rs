// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment service trait definition.
//!
//! This module defines the `EnvironmentService` trait, the query and mutation surface of
//! a resolver that combines a loaded store with the process environment.

use crate::domain::Value;

/// The main environment service trait.
///
/// Implementations resolve keys across one or more sources and route mutations to the
/// store they own. Mutations never touch the process environment.
///
/// # Examples
///
/// ```rust
/// use hexenv::domain::{EnvStore, EnvironmentService, Value};
///
/// struct StoreOnly(EnvStore);
///
/// impl EnvironmentService for StoreOnly {
///     fn query(&self, key: &str) -> Option<Value> {
///         self.0.get(key).cloned()
///     }
///
///     fn set(&mut self, key: &str, value: Value, overwrite: bool) -> bool {
///         self.0.set(key, value, overwrite)
///     }
///
///     fn remove(&mut self, key: &str) -> Option<Value> {
///         self.0.remove(key)
///     }
/// }
///
/// let mut service = StoreOnly(EnvStore::new());
/// service.set("PORT", Value::Integer(8080), true);
/// assert_eq!(service.query_or("PORT", Value::Integer(80)), Value::Integer(8080));
/// assert!(!service.has("HOST"));
/// ```
pub trait EnvironmentService {
    /// Resolves a key, returning `None` when no consulted source has it.
    fn query(&self, key: &str) -> Option<Value>;

    /// Resolves a key or returns `default` when no consulted source has it.
    fn query_or(&self, key: &str, default: Value) -> Value {
        self.query(key).unwrap_or(default)
    }

    /// Returns `true` if any consulted source has the key.
    fn has(&self, key: &str) -> bool {
        self.query(key).is_some()
    }

    /// Sets a value in the owned store.
    ///
    /// With `overwrite` set to `false` an existing key is left untouched. Returns `true`
    /// if the store was changed.
    fn set(&mut self, key: &str, value: Value, overwrite: bool) -> bool;

    /// Removes a key from the owned store, returning its previous value.
    fn remove(&mut self, key: &str) -> Option<Value>;
}
