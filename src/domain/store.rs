// SPDX-License-Identifier: MIT OR Apache-2.0

//! Insertion-ordered key/value store.
//!
//! `EnvStore` keeps entries in the order they were first inserted. That order is the
//! order used by [`EnvStore::serialize`], which makes saved files deterministic and
//! diff-friendly.

use crate::domain::errors::{DotenvError, Result};
use crate::domain::value::Value;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::ops::Index;

/// A single key/value pair extracted from a configuration source.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    /// The key, verbatim and case-sensitive
    pub key: String,
    /// The typed value
    pub value: Value,
}

impl Entry {
    /// Creates a new entry.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>> From<(K, Value)> for Entry {
    fn from((key, value): (K, Value)) -> Self {
        Entry::new(key, value)
    }
}

/// An ordered mapping from key to [`Value`].
///
/// Keys are unique and compared verbatim. Assigning to an existing key replaces its
/// value in place, so the key keeps its original position. Lookups, inserts and
/// replacements go through a hashed index; removal shifts the later entries down.
///
/// # Examples
///
/// ```
/// use hexenv::domain::{EnvStore, Value};
///
/// let store = EnvStore::from_entries([
///     ("apiKey", Value::from("some-secret")),
///     ("onboardingEnabled", Value::from(true)),
/// ])
/// .unwrap();
///
/// assert_eq!(store["onboardingEnabled"], Value::Boolean(true));
/// assert_eq!(
///     store.serialize('='),
///     "apiKey=some-secret\nonboardingEnabled=true\n"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnvStore {
    entries: Vec<Entry>,
    /// Key to position in `entries`
    index: HashMap<String, usize>,
}

impl EnvStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from typed entries.
    ///
    /// Construction is atomic: it fails with [`DotenvError::EmptyPair`] if any key is
    /// empty or any `String` value is empty. Other variants are never considered empty.
    /// A repeated key keeps its first position and its last value.
    pub fn from_entries<I, E>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry>,
    {
        let mut store = Self::new();
        for entry in entries {
            let entry = entry.into();
            if entry.key.is_empty() || entry.value.is_empty_string() {
                return Err(DotenvError::empty_pair(entry.key, entry.value.render()));
            }
            store.insert(entry.key, entry.value);
        }
        Ok(store)
    }

    /// Creates a store from raw string pairs, inferring each value.
    ///
    /// Fails with [`DotenvError::EmptyPair`] if any key or raw value is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::{EnvStore, Value};
    ///
    /// let store = EnvStore::from_raw_pairs([
    ///     ("NETWORK_RETRIES", "3"),
    ///     ("NETWORK_TIMEOUT", "10.5"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(store.get("NETWORK_RETRIES"), Some(&Value::Integer(3)));
    /// assert_eq!(store.get("NETWORK_TIMEOUT"), Some(&Value::Float(10.5)));
    /// ```
    pub fn from_raw_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut store = Self::new();
        for (key, raw) in pairs {
            let key = key.into();
            let raw = raw.as_ref();
            if key.is_empty() || raw.is_empty() {
                return Err(DotenvError::empty_pair(key, raw));
            }
            store.insert(key, Value::infer(raw));
        }
        Ok(store)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.position(key).map(|i| &self.entries[i].value)
    }

    /// Returns the value stored under `key`, or `default` when absent.
    pub fn get_or(&self, key: &str, default: Value) -> Value {
        self.get(key).cloned().unwrap_or(default)
    }

    /// Returns `true` if the store holds `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Inserts or replaces a value.
    ///
    /// With `overwrite` set to `false` an existing key keeps its value and the call is a
    /// no-op. Returns `true` if the store was changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::{EnvStore, Value};
    ///
    /// let mut store = EnvStore::new();
    /// assert!(store.set("KEY", Value::Integer(1), false));
    /// assert!(!store.set("KEY", Value::Integer(2), false));
    /// assert_eq!(store.get("KEY"), Some(&Value::Integer(1)));
    ///
    /// assert!(store.set("KEY", Value::Integer(2), true));
    /// assert_eq!(store.get("KEY"), Some(&Value::Integer(2)));
    /// ```
    pub fn set(&mut self, key: impl Into<String>, value: Value, overwrite: bool) -> bool {
        let key = key.into();
        match self.position(&key) {
            Some(_) if !overwrite => false,
            Some(i) => {
                self.entries[i].value = value;
                true
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(Entry { key, value });
                true
            }
        }
    }

    /// Inserts or replaces a value unconditionally.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.set(key, value, true);
    }

    /// Removes `key`, returning its previous value.
    ///
    /// The remaining entries keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let position = self.index.remove(key)?;
        let removed = self.entries.remove(position);
        for (offset, entry) in self.entries[position..].iter().enumerate() {
            self.index.insert(entry.key.clone(), position + offset);
        }
        Some(removed.value)
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|e| (e.key.as_str(), &e.value))
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the store into environment file text.
    ///
    /// Each entry becomes `key<delimiter>value\n` in insertion order. Values are rendered
    /// with [`Value::render`], so strings are written without re-quoting or re-escaping:
    /// a value that was quoted in the source file comes back unquoted.
    ///
    /// No entry is checked here. A key that starts with the comment marker, or a key or
    /// value holding the delimiter or a line break, produces text that does not parse
    /// back into the same store. [`EnvStore::check_serializable`] reports such entries,
    /// and `Dotenv::save` runs it before writing.
    pub fn serialize(&self, delimiter: char) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.key);
            out.push(delimiter);
            out.push_str(&entry.value.render());
            out.push('\n');
        }
        out
    }

    /// Checks that every entry survives [`serialize`](Self::serialize) followed by a
    /// parse with the same `delimiter` and `comment` marker.
    ///
    /// Fails with [`DotenvError::UnsavableEntry`] for the first entry that would be
    /// dropped as a comment, split on the wrong delimiter, broken across lines, or
    /// trimmed into a different key or value.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexenv::domain::{EnvStore, Value};
    ///
    /// let mut store = EnvStore::new();
    /// store.insert("URL", Value::from("postgres://db"));
    /// assert!(store.check_serializable('=', '#').is_ok());
    /// assert!(store.check_serializable(':', '#').is_err());
    /// ```
    pub fn check_serializable(&self, delimiter: char, comment: char) -> Result<()> {
        for entry in &self.entries {
            let value = entry.value.render();
            let reason = if entry.key.trim_start().starts_with(comment) {
                "key starts with the comment marker"
            } else if entry.key.contains(delimiter) {
                "key contains the delimiter"
            } else if value.contains(delimiter) {
                "value contains the delimiter"
            } else if entry.key.contains(['\n', '\r']) || value.contains(['\n', '\r']) {
                "entry contains a line break"
            } else if entry.key.trim() != entry.key || value.trim() != value {
                "entry has surrounding whitespace"
            } else if entry.key.is_empty() || value.is_empty() {
                "entry is empty"
            } else {
                continue;
            };
            return Err(DotenvError::UnsavableEntry {
                key: entry.key.clone(),
                reason,
            });
        }
        Ok(())
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }
}

impl Index<&str> for EnvStore {
    type Output = Value;

    /// Panics if `key` is not present.
    fn index(&self, key: &str) -> &Value {
        self.get(key)
            .unwrap_or_else(|| panic!("key not found in store: {key}"))
    }
}

/// Collects entries with last-write-wins semantics and no emptiness check.
///
/// Parsed entries are already validated line by line, and a quoted empty value (`""`)
/// legitimately infers to an empty string.
impl FromIterator<Entry> for EnvStore {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl Extend<Entry> for EnvStore {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry.key, entry.value);
        }
    }
}

impl<'a> IntoIterator for &'a EnvStore {
    type Item = (&'a str, &'a Value);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a Value)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for EnvStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EnvStore {
        EnvStore::from_entries([
            ("API_KEY", Value::from("some-secret")),
            ("ONBOARDING_ENABLED", Value::Boolean(true)),
            ("NETWORK_RETRIES", Value::Integer(3)),
            ("NETWORK_TIMEOUT", Value::Float(10.5)),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let store = EnvStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.serialize('='), "");
    }

    #[test]
    fn test_from_entries() {
        let store = sample();
        assert_eq!(store.len(), 4);
        assert_eq!(store.get("API_KEY"), Some(&Value::from("some-secret")));
        assert_eq!(store.get("ONBOARDING_ENABLED"), Some(&Value::Boolean(true)));
        assert_eq!(store.get("NETWORK_RETRIES"), Some(&Value::Integer(3)));
        assert_eq!(store.get("NETWORK_TIMEOUT"), Some(&Value::Float(10.5)));
    }

    #[test]
    fn test_from_entries_rejects_empty_key() {
        let result = EnvStore::from_entries([("", Value::Integer(1))]);
        assert!(matches!(result, Err(DotenvError::EmptyPair { .. })));
    }

    #[test]
    fn test_from_entries_rejects_empty_string_value() {
        let result = EnvStore::from_entries([
            ("GOOD", Value::Integer(1)),
            ("BAD", Value::from("")),
        ]);
        assert!(matches!(result, Err(DotenvError::EmptyPair { key, .. }) if key == "BAD"));
    }

    #[test]
    fn test_from_entries_accepts_entry_values() {
        let store = EnvStore::from_entries(vec![Entry::new("KEY", 1i64)]).unwrap();
        assert_eq!(store["KEY"], Value::Integer(1));
    }

    #[test]
    fn test_from_raw_pairs_infers() {
        let store = EnvStore::from_raw_pairs([
            ("API_KEY", "some-secret"),
            ("ONBOARDING_ENABLED", "true"),
            ("NETWORK_RETRIES", "3"),
            ("NETWORK_TIMEOUT", "10.5"),
        ])
        .unwrap();
        assert_eq!(store, sample());
    }

    #[test]
    fn test_from_raw_pairs_rejects_empty_value() {
        let result = EnvStore::from_raw_pairs([("KEY", "")]);
        assert!(matches!(result, Err(DotenvError::EmptyPair { .. })));
    }

    #[test]
    fn test_duplicate_keys_last_wins_first_position() {
        let store = EnvStore::from_raw_pairs([("A", "1"), ("B", "2"), ("A", "3")]).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(store["A"], Value::Integer(3));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut store = EnvStore::new();
        store.insert("key", Value::Integer(1));
        store.insert("KEY", Value::Integer(2));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("key"), Some(&Value::Integer(1)));
        assert_eq!(store.get("Key"), None);
    }

    #[test]
    fn test_set_without_overwrite_keeps_value() {
        let mut store = EnvStore::from_entries([("KEY", Value::Integer(1))]).unwrap();
        assert!(!store.set("KEY", Value::Integer(2), false));
        assert_eq!(store["KEY"], Value::Integer(1));
    }

    #[test]
    fn test_set_with_overwrite_replaces_in_place() {
        let mut store = sample();
        assert!(store.set("API_KEY", Value::Integer(1234), true));
        assert_eq!(store["API_KEY"], Value::Integer(1234));
        assert_eq!(store.keys().next(), Some("API_KEY"));
    }

    #[test]
    fn test_set_new_key_appends() {
        let mut store = sample();
        assert!(store.set("NEW", Value::Boolean(false), false));
        assert_eq!(store.keys().last(), Some("NEW"));
    }

    #[test]
    fn test_remove() {
        let mut store = sample();
        assert_eq!(store.remove("ONBOARDING_ENABLED"), Some(Value::Boolean(true)));
        assert!(!store.contains_key("ONBOARDING_ENABLED"));
        assert_eq!(
            store.keys().collect::<Vec<_>>(),
            vec!["API_KEY", "NETWORK_RETRIES", "NETWORK_TIMEOUT"]
        );
    }

    #[test]
    fn test_remove_keeps_lookups_consistent() {
        let mut store = sample();
        store.remove("API_KEY");
        store.insert("API_KEY", Value::Integer(7));

        assert_eq!(store["ONBOARDING_ENABLED"], Value::Boolean(true));
        assert_eq!(store["NETWORK_TIMEOUT"], Value::Float(10.5));
        assert_eq!(store["API_KEY"], Value::Integer(7));
        assert_eq!(store.keys().last(), Some("API_KEY"));

        assert!(store.set("NETWORK_RETRIES", Value::Integer(4), true));
        assert_eq!(
            store.iter().nth(1),
            Some(("NETWORK_RETRIES", &Value::Integer(4)))
        );
    }

    #[test]
    fn test_large_store_builds_quickly() {
        let store: EnvStore = (0..50_000)
            .map(|i| Entry::new(format!("KEY_{i}"), format!("v{i}")))
            .collect();

        assert_eq!(store.len(), 50_000);
        assert_eq!(store["KEY_49999"], Value::from("v49999"));
        assert_eq!(store.keys().nth(12_345), Some("KEY_12345"));
    }

    #[test]
    fn test_check_serializable() {
        assert!(sample().check_serializable('=', '#').is_ok());

        let cases = [
            ("#KEY", Value::Integer(1)),
            ("A=B", Value::Integer(1)),
            ("URL", Value::from("a=b")),
            ("TEXT", Value::from("line\nbreak")),
            ("PADDED", Value::from(" x ")),
            ("EMPTY", Value::from("")),
        ];
        for (key, value) in cases {
            let mut store = EnvStore::new();
            store.insert(key, value);
            let result = store.check_serializable('=', '#');
            assert!(
                matches!(&result, Err(DotenvError::UnsavableEntry { key: k, .. }) if k == key),
                "{key} should be rejected"
            );
        }
    }

    #[test]
    fn test_remove_absent_key() {
        let mut store = EnvStore::new();
        assert_eq!(store.remove("KEY"), None);
    }

    #[test]
    fn test_get_or() {
        let store = sample();
        assert_eq!(store.get_or("NETWORK_RETRIES", Value::Integer(0)), Value::Integer(3));
        assert_eq!(store.get_or("MISSING", Value::Integer(0)), Value::Integer(0));
    }

    #[test]
    #[should_panic(expected = "key not found")]
    fn test_index_missing_key_panics() {
        let store = EnvStore::new();
        let _ = &store["MISSING"];
    }

    #[test]
    fn test_serialize() {
        let store = EnvStore::from_entries([
            ("apiKey", Value::from("some-secret")),
            ("onboardingEnabled", Value::infer("true")),
        ])
        .unwrap();
        assert_eq!(
            store.serialize('='),
            "apiKey=some-secret\nonboardingEnabled=true\n"
        );
    }

    #[test]
    fn test_serialize_custom_delimiter() {
        let store = sample();
        assert_eq!(
            store.serialize(':'),
            "API_KEY:some-secret\nONBOARDING_ENABLED:true\nNETWORK_RETRIES:3\nNETWORK_TIMEOUT:10.5\n"
        );
    }

    #[test]
    fn test_serialize_does_not_requote() {
        let store = EnvStore::from_raw_pairs([("TITLE", "\"The \\\"Quoted\\\" Title\"")]).unwrap();
        assert_eq!(store.serialize('='), "TITLE=The \"Quoted\" Title\n");
    }

    #[test]
    fn test_collect_from_entries() {
        let store: EnvStore = vec![
            Entry::new("A", 1i64),
            Entry::new("EMPTY", ""),
            Entry::new("A", 2i64),
        ]
        .into_iter()
        .collect();
        assert_eq!(store.len(), 2);
        assert_eq!(store["A"], Value::Integer(2));
        assert_eq!(store["EMPTY"], Value::from(""));
    }

    #[test]
    fn test_iter_order() {
        let store = sample();
        let collected: Vec<_> = (&store).into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            collected,
            vec!["API_KEY", "ONBOARDING_ENABLED", "NETWORK_RETRIES", "NETWORK_TIMEOUT"]
        );
    }

    #[test]
    fn test_serde_serialize_keeps_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"API_KEY":"some-secret","ONBOARDING_ENABLED":true,"NETWORK_RETRIES":3,"NETWORK_TIMEOUT":10.5}"#
        );
    }
}
