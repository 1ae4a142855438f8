// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture crate for `.env` environment files.
//!
//! This crate loads `key=value` files into an ordered, typed store, resolves keys across
//! that store and the live process environment, and writes stores back to disk or into
//! the process environment.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and rules (`Value`, `EnvStore`, `FallbackStrategy`, errors)
//! - **Ports**: Trait definitions at the edges (`EnvParser`, `ValueSource`, `ProcessEnv`,
//!   `FileSystem`)
//! - **Adapters**: Implementations for the `.env` format, the process environment and the
//!   local filesystem
//! - **Service**: The `Environment` resolver and the `Dotenv` facade
//!
//! # Value inference
//!
//! Every raw value is classified when it is parsed: `true`/`false` in any case become
//! booleans, numbers with a fractional part or exponent become floats, other numbers
//! become integers, and anything else is a string with one pair of surrounding quotes
//! removed.
//!
//! # Feature Flags
//!
//! - `async`: Enable `Dotenv::configure_async` on top of tokio
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hexenv::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let dotenv = Dotenv::new();
//!
//! let env = dotenv.load_environment(".env")?;
//! let retries: u32 = env.query_or("NETWORK_RETRIES", Value::Integer(3)).parse("NETWORK_RETRIES")?;
//!
//! // Copy every pair into the process environment, keeping existing variables.
//! dotenv.configure(".env", false)?;
//! # let _ = retries;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        DataSource, DotenvError, EnvStore, Entry, EnvironmentService, FallbackStrategy, Result,
        Value,
    };
    pub use crate::ports::{EnvParser, FileSystem, ProcessEnv, ValueSource};

    pub use crate::adapters::{
        DotenvFileAdapter, DotenvParser, LocalFileSystem, MemoryEnv, SystemEnv,
    };
    pub use crate::service::{Dotenv, DotenvBuilder, DotenvOptions, Environment};
}
