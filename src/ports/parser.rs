// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment parser trait definition.
//!
//! This module defines the `EnvParser` trait, which turns environment file text into an
//! ordered sequence of entries. Parsing works line by line so the same rules serve both
//! whole-text parsing and streaming reads.

use crate::domain::{Entry, Result};

/// A trait for parsing environment file text.
///
/// Implementors provide [`parse_line`](EnvParser::parse_line); [`parse`](EnvParser::parse)
/// applies it to every line of a text in order and fails on the first bad line.
///
/// # Examples
///
/// ```rust
/// use hexenv::domain::{Entry, Result, Value};
/// use hexenv::ports::EnvParser;
///
/// struct ColonParser;
///
/// impl EnvParser for ColonParser {
///     fn parse_line(&self, line: &str, _line_number: usize) -> Result<Option<Entry>> {
///         Ok(line
///             .split_once(':')
///             .map(|(k, v)| Entry::new(k, Value::infer(v))))
///     }
/// }
///
/// let entries = ColonParser.parse("PORT:8080\nHOST:localhost").unwrap();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].value, Value::Integer(8080));
/// ```
pub trait EnvParser {
    /// Parses a single line.
    ///
    /// `line_number` is 1-based and only used for error reporting. Returns `Ok(None)` for
    /// lines that carry no pair, such as comments.
    fn parse_line(&self, line: &str, line_number: usize) -> Result<Option<Entry>>;

    /// Parses a whole text into entries, preserving line order.
    ///
    /// Lines are split on `\n`; a trailing `\r` is dropped. Duplicate keys are all
    /// returned; collapsing them is the store's job.
    fn parse(&self, content: &str) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if let Some(entry) = self.parse_line(line, index + 1)? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}
