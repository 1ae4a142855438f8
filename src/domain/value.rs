// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed environment values with string inference and rendering.
//!
//! This module provides the `Value` type, a closed set of scalars that every entry in an
//! environment file is inferred into, together with the canonical rendering used when a
//! store is written back to disk.

use crate::domain::errors::{DotenvError, Result};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A type-safe environment value.
///
/// Values are inferred from raw text with [`Value::infer`] or built directly from a
/// typed literal. Equality compares the variant and the payload, so an integer never
/// equals a float even when they hold the same magnitude.
///
/// # Examples
///
/// ```
/// use hexenv::domain::Value;
///
/// assert_eq!(Value::infer("true"), Value::Boolean(true));
/// assert_eq!(Value::infer("5"), Value::Integer(5));
/// assert_eq!(Value::infer("10.5"), Value::Float(10.5));
/// assert_eq!(Value::infer("com.app.example"), Value::from("com.app.example"));
/// assert_ne!(Value::Integer(3), Value::Float(3.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean literal, `true` or `false`.
    Boolean(bool),
    /// A base-10 integer that fits in an `i64`.
    Integer(i64),
    /// A floating-point literal that is not also an integer literal.
    Float(f64),
    /// Anything else.
    String(String),
}

impl Value {
    /// Infers a typed value from raw text.
    ///
    /// The checks run in a fixed order and the first match wins:
    ///
    /// 1. `true` / `false`, ignoring ASCII case, become a `Boolean`.
    /// 2. Text that parses as an `f64` but not as an `i64` becomes a `Float`.
    /// 3. Text that parses as an `i64` becomes an `Integer`.
    /// 4. Everything else becomes a `String`. One pair of surrounding double quotes is
    ///    stripped and every `\"` is unescaped to `"`. No other escapes are handled.
    ///
    /// This never fails; unrecognised text falls through to `String`.
    ///
    /// Step 2 follows `f64::from_str`, so `NaN`, `inf` and `infinity` (any case, with
    /// an optional sign) become non-finite floats. A `Float(NaN)` is not equal to
    /// itself, so a store holding one never compares equal to its own reload.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::Value;
    ///
    /// assert_eq!(Value::infer("3"), Value::Integer(3));
    /// assert_eq!(
    ///     Value::infer(r#""The \"Quoted\" Title""#),
    ///     Value::from(r#"The "Quoted" Title"#)
    /// );
    /// ```
    pub fn infer(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("true") {
            return Value::Boolean(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return Value::Boolean(false);
        }

        let integer = raw.parse::<i64>().ok();
        if integer.is_none() {
            if let Ok(float) = raw.parse::<f64>() {
                return Value::Float(float);
            }
        }
        if let Some(integer) = integer {
            return Value::Integer(integer);
        }

        Value::String(unquote(raw))
    }

    /// Renders the value as it is written to an environment file.
    ///
    /// Floats always keep a fractional marker (`3.0`, `1e20`) so that the rendered text
    /// infers back into a `Float`. Strings are written verbatim: quotes removed by
    /// [`Value::infer`] are not added back.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::Value;
    ///
    /// assert_eq!(Value::Float(3.0).render(), "3.0");
    /// assert_eq!(Value::Integer(-42).render(), "-42");
    /// assert_eq!(Value::from(r#"say "hi""#).render(), r#"say "hi""#);
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Returns the name of the active variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
        }
    }

    /// Returns the boolean payload, if this is a `Boolean`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an `Integer`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as an `f64`.
    ///
    /// Integers are widened; booleans and strings return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::Value;
    ///
    /// assert_eq!(Value::Float(10.5).as_f64(), Some(10.5));
    /// assert_eq!(Value::Integer(3).as_f64(), Some(3.0));
    /// assert_eq!(Value::Boolean(true).as_f64(), None);
    /// ```
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the string payload, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Parses the rendered value into any type that implements `FromStr`.
    ///
    /// `key` is only used to describe the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::Value;
    /// use std::net::IpAddr;
    ///
    /// let value = Value::infer("127.0.0.1");
    /// let ip: IpAddr = value.parse("BIND_ADDR").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    ///
    /// let port: u16 = Value::Integer(8080).parse("PORT").unwrap();
    /// assert_eq!(port, 8080);
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.render()
            .parse::<T>()
            .map_err(|e| DotenvError::TypeConversion {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }

    /// Returns `true` if this is a `String` with no characters.
    pub(crate) fn is_empty_string(&self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }
}

/// Strips one pair of surrounding double quotes and unescapes `\"`.
pub(crate) fn unquote(raw: &str) -> String {
    let inner = if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    };
    inner.replace("\\\"", "\"")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            // Debug keeps the trailing `.0` that Display drops.
            Value::Float(x) => write!(f, "{:?}", x),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl FromStr for Value {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Value::infer(s))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}
