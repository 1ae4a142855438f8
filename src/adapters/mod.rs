// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing the concrete port implementations.
//!
//! This module contains implementations of the traits defined in the ports layer: the
//! `.env` parser and file source, the process environment adapters and the local
//! filesystem.

pub mod dotenv_file;
pub mod env_var;
pub mod local_fs;

pub use dotenv_file::{DotenvFileAdapter, DotenvParser};
pub use env_var::{MemoryEnv, ProcessEnvSource, SystemEnv};
pub use local_fs::LocalFileSystem;
