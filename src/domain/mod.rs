// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! This module contains the value type and its inference rules, the ordered store, the
//! fallback strategy and the errors shared by the rest of the crate. Nothing here
//! touches the filesystem or the process environment.

pub mod errors;
pub mod naming;
pub mod service;
pub mod store;
pub mod strategy;
pub mod value;

// Re-export commonly used types
pub use errors::{DotenvError, Result};
pub use service::EnvironmentService;
pub use store::{EnvStore, Entry};
pub use strategy::{DataSource, FallbackStrategy};
pub use value::Value;
