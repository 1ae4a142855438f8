// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process environment collaborator trait definition.
//!
//! This module defines the `ProcessEnv` trait, which abstracts the environment-variable
//! table of a process. The resolver reads from it and the facade's `configure` writes
//! into it; nothing else in the crate mutates it.

use crate::domain::Result;
use std::collections::HashMap;

/// A trait for reading and writing environment variables.
///
/// `set` takes `&self` so a shared handle can be written through; implementations that
/// keep their own table must synchronise internally.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::MemoryEnv;
/// use hexenv::ports::ProcessEnv;
///
/// let env = MemoryEnv::new();
/// assert!(env.set("API_KEY", "secret-key", true).unwrap());
/// assert!(!env.set("API_KEY", "other", false).unwrap());
/// assert_eq!(env.get("API_KEY").as_deref(), Some("secret-key"));
/// ```
pub trait ProcessEnv: Send + Sync {
    /// Returns the raw value of a variable, or `None` if it is not set.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns a snapshot of every variable.
    fn get_all(&self) -> HashMap<String, String>;

    /// Sets a variable.
    ///
    /// With `overwrite` set to `false` an existing variable is left untouched. Returns
    /// `true` if the variable was written.
    fn set(&self, key: &str, value: &str, overwrite: bool) -> Result<bool>;
}
