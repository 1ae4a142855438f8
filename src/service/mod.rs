// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the resolver and the file facade.
//!
//! [`Environment`] resolves keys across a loaded store and the process environment;
//! [`Dotenv`] loads, saves and applies environment files.

pub mod dotenv;
pub mod environment;

pub use dotenv::{Dotenv, DotenvBuilder, DotenvOptions};
pub use environment::Environment;
