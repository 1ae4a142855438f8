// SPDX-License-Identifier: MIT OR Apache-2.0

//! Opt-in translation between Rust-style identifiers and environment key names.
//!
//! Environment keys are conventionally `UPPER_SNAKE_CASE` (`API_KEY`) while code tends
//! to name things in camel or snake case (`apiKey`, `api_key`). These helpers translate
//! between the two. Stores never apply them: key comparison stays exact.

/// Converts an identifier into an `UPPER_SNAKE_CASE` environment key.
///
/// Word boundaries are a lowercase letter or digit followed by an uppercase letter, and
/// the last capital of an acronym that is followed by a lowercase letter.
///
/// # Examples
///
/// ```
/// use hexenv::domain::naming::to_env_key;
///
/// assert_eq!(to_env_key("apiKey"), "API_KEY");
/// assert_eq!(to_env_key("buildNumber"), "BUILD_NUMBER");
/// assert_eq!(to_env_key("db_passphrase"), "DB_PASSPHRASE");
/// assert_eq!(to_env_key("baseURLPath"), "BASE_URL_PATH");
/// ```
pub fn to_env_key(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    let mut out = String::with_capacity(identifier.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.extend(c.to_uppercase());
    }

    out
}

/// Converts an `UPPER_SNAKE_CASE` environment key into a lower camel case identifier.
///
/// # Examples
///
/// ```
/// use hexenv::domain::naming::to_member_name;
///
/// assert_eq!(to_member_name("API_KEY"), "apiKey");
/// assert_eq!(to_member_name("ONBOARDING_ENABLED"), "onboardingEnabled");
/// assert_eq!(to_member_name("IDENTIFIER"), "identifier");
/// ```
pub fn to_member_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len());

    for (i, word) in key.split('_').filter(|w| !w.is_empty()).enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}
