// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that separate the core from its
//! collaborators: the text parser, keyed value sources, the process environment and the
//! filesystem. Implementations live in the adapters layer.

pub mod filesystem;
pub mod parser;
pub mod process_env;
pub mod source;

// Re-export commonly used types
pub use filesystem::FileSystem;
pub use parser::EnvParser;
pub use process_env::ProcessEnv;
pub use source::ValueSource;
