// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests use property-based testing to verify value inference, store ordering
//! and the text format for arbitrary inputs.

use hexenv::adapters::DotenvParser;
use hexenv::domain::{EnvStore, Value};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,15}"
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Boolean),
        any::<i64>().prop_map(Value::Integer),
        (-1.0e12f64..1.0e12f64).prop_map(Value::Float),
        "[a-z][a-z0-9 ._/-]{0,20}[a-z]"
            .prop_filter("must infer as a string", |s| {
                Value::infer(s) == Value::String(s.clone())
            })
            .prop_map(Value::String),
    ]
}

// Test that rendering an inferred integer preserves its magnitude
proptest! {
    #[test]
    fn test_integer_infer_render(n in any::<i64>()) {
        let value = Value::infer(&n.to_string());
        prop_assert_eq!(&value, &Value::Integer(n));
        prop_assert_eq!(value.render(), n.to_string());
    }
}

// Test that rendering a float keeps it a float
proptest! {
    #[test]
    fn test_float_render_reinfers(f in -1.0e12f64..1.0e12f64) {
        let rendered = Value::Float(f).render();
        prop_assert_eq!(Value::infer(&rendered), Value::Float(f));
    }
}

// Test that booleans are recognised in any case
proptest! {
    #[test]
    fn test_bool_any_case(b in any::<bool>(), upper in prop::collection::vec(any::<bool>(), 5)) {
        let text: String = b
            .to_string()
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert_eq!(Value::infer(&text), Value::Boolean(b));
    }
}

// Test that inference never panics
proptest! {
    #[test]
    fn test_infer_any_string(s in "\\PC*") {
        let value = Value::infer(&s);
        let _ = value.render();
        let _ = value.type_name();
    }
}

// Test that a quoted string comes back without its quotes
proptest! {
    #[test]
    fn test_quoted_string_unquoted(s in "[a-z ]{1,20}") {
        let quoted = format!("\"{}\"", s);
        prop_assert_eq!(Value::infer(&quoted), Value::String(s));
    }
}

// Test that insertion order survives arbitrary inserts and removals
proptest! {
    #[test]
    fn test_store_order(
        keys in prop::collection::vec(key_strategy(), 1..20),
        remove_index in any::<prop::sample::Index>(),
    ) {
        let mut store = EnvStore::new();
        let mut expected: Vec<String> = Vec::new();
        for key in &keys {
            store.insert(key.clone(), Value::Integer(1));
            if !expected.contains(key) {
                expected.push(key.clone());
            }
        }

        let removed = expected.remove(remove_index.index(expected.len()));
        store.remove(&removed);

        let actual: Vec<String> = store.keys().map(str::to_string).collect();
        prop_assert_eq!(actual, expected);
    }
}

// Test that serializing then parsing a store is stable
proptest! {
    #[test]
    fn test_serialize_parse_stable(
        pairs in prop::collection::vec((key_strategy(), value_strategy()), 0..12)
    ) {
        let mut store = EnvStore::new();
        for (key, value) in pairs {
            store.insert(key, value);
        }

        let text = store.serialize('=');
        let parsed = DotenvParser::new().parse_store(&text).unwrap();
        prop_assert_eq!(&parsed, &store);
        prop_assert_eq!(parsed.serialize('='), text);
    }
}

// Test that set without overwrite never changes an existing value
proptest! {
    #[test]
    fn test_set_without_overwrite(key in key_strategy(), a in value_strategy(), b in value_strategy()) {
        let mut store = EnvStore::new();
        prop_assert!(store.set(key.clone(), a.clone(), false));
        prop_assert!(!store.set(key.clone(), b, false));
        prop_assert_eq!(store.get(&key), Some(&a));
        prop_assert_eq!(store.len(), 1);
    }
}
