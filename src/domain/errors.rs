// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the dotenv crate.
//!
//! This module defines the errors that can occur while loading, parsing, converting
//! or saving environment files. All errors use `thiserror` for proper error handling
//! and conversion.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for dotenv operations.
///
/// Loading and parsing errors are fatal to the call that produced them: one bad line
/// fails the whole file. Store mutations that do nothing (setting an existing key
/// without overwrite, removing an absent key) are not errors and never produce one.
///
/// # Examples
///
/// ```
/// use hexenv::domain::errors::DotenvError;
///
/// fn check_line() -> Result<(), DotenvError> {
///     Err(DotenvError::MalformedPair { line: 3 })
/// }
///
/// assert!(check_line().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DotenvError {
    /// The environment file does not exist at the given path.
    #[error("Environment file is missing: {}", path.display())]
    MissingSource {
        /// The path that was checked
        path: PathBuf,
    },

    /// The environment file exists but could not be read or decoded as UTF-8.
    #[error("Unable to read environment file {}: {source}", path.display())]
    UnreadableSource {
        /// The path that was read
        path: PathBuf,
        /// The underlying I/O or decoding error
        #[source]
        source: std::io::Error,
    },

    /// A line did not split into exactly two delimiter-separated segments.
    #[error("Malformed key/value pair on line {line}")]
    MalformedPair {
        /// The 1-based line number
        line: usize,
    },

    /// A key or value was empty after trimming.
    #[error("Empty key/value pair ('{key}', '{value}'){}", line.map(|l| format!(" on line {l}")).unwrap_or_default())]
    EmptyPair {
        /// The key as given
        key: String,
        /// The raw value as given
        value: String,
        /// The 1-based line number, when the pair came from text
        line: Option<usize>,
    },

    /// A save without `force` targeted a path that already exists.
    #[error("File already exists: {}", path.display())]
    DestinationExists {
        /// The destination path
        path: PathBuf,
    },

    /// A store entry would not survive being written and parsed back.
    #[error("Cannot save entry '{key}': {reason}")]
    UnsavableEntry {
        /// The offending key
        key: String,
        /// Why it cannot be written
        reason: &'static str,
    },

    /// The platform configuration directory could not be determined.
    #[error("Failed to determine the configuration directory for '{app_name}'")]
    NoConfigDirectory {
        /// The application name that was looked up
        app_name: String,
    },

    /// A key or value cannot be stored in the process environment.
    #[error("Cannot set environment variable '{key}': {reason}")]
    InvalidVariable {
        /// The variable name
        key: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Failed to convert a value to the requested type.
    #[error("Failed to convert value for key '{key}' to type {target_type}: {source}")]
    TypeConversion {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An I/O error occurred while writing an environment file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DotenvError {
    /// Creates an `EmptyPair` error for a pair that did not come from a file line.
    pub fn empty_pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        DotenvError::EmptyPair {
            key: key.into(),
            value: value.into(),
            line: None,
        }
    }

    /// Returns `true` for errors raised while decoding text into pairs.
    pub fn is_decoding_error(&self) -> bool {
        matches!(
            self,
            DotenvError::MalformedPair { .. } | DotenvError::EmptyPair { .. }
        )
    }
}

/// A specialized Result type for dotenv operations.
pub type Result<T> = std::result::Result<T, DotenvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_error() {
        let error = DotenvError::MissingSource {
            path: PathBuf::from("/tmp/.env"),
        };
        assert_eq!(error.to_string(), "Environment file is missing: /tmp/.env");
    }

    #[test]
    fn test_unreadable_source_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
        let error = DotenvError::UnreadableSource {
            path: PathBuf::from(".env"),
            source: io_error,
        };
        assert!(error.to_string().contains(".env"));
        assert!(error.to_string().contains("bad utf-8"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_malformed_pair_error() {
        let error = DotenvError::MalformedPair { line: 7 };
        assert_eq!(error.to_string(), "Malformed key/value pair on line 7");
        assert!(error.is_decoding_error());
    }

    #[test]
    fn test_empty_pair_error_with_line() {
        let error = DotenvError::EmptyPair {
            key: "KEY".to_string(),
            value: String::new(),
            line: Some(2),
        };
        assert_eq!(error.to_string(), "Empty key/value pair ('KEY', '') on line 2");
        assert!(error.is_decoding_error());
    }

    #[test]
    fn test_empty_pair_error_without_line() {
        let error = DotenvError::empty_pair("", "value");
        assert_eq!(error.to_string(), "Empty key/value pair ('', 'value')");
    }

    #[test]
    fn test_destination_exists_error() {
        let error = DotenvError::DestinationExists {
            path: PathBuf::from("out.env"),
        };
        assert_eq!(error.to_string(), "File already exists: out.env");
        assert!(!error.is_decoding_error());
    }

    #[test]
    fn test_unsavable_entry_error() {
        let error = DotenvError::UnsavableEntry {
            key: "#KEY".to_string(),
            reason: "key starts with the comment marker",
        };
        assert_eq!(
            error.to_string(),
            "Cannot save entry '#KEY': key starts with the comment marker"
        );
        assert!(!error.is_decoding_error());
    }

    #[test]
    fn test_invalid_variable_error() {
        let error = DotenvError::InvalidVariable {
            key: "A=B".to_string(),
            reason: "name contains '='",
        };
        assert_eq!(
            error.to_string(),
            "Cannot set environment variable 'A=B': name contains '='"
        );
    }

    #[test]
    fn test_type_conversion_error() {
        let source_error = "invalid value".parse::<i32>().unwrap_err();
        let error = DotenvError::TypeConversion {
            key: "PORT".to_string(),
            target_type: "i32".to_string(),
            source: Box::new(source_error),
        };
        assert!(error.to_string().contains("PORT"));
        assert!(error.to_string().contains("i32"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = DotenvError::from(io_error);
        assert!(matches!(error, DotenvError::Io(_)));
    }
}
