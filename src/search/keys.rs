use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Canonical form of a lookup key: lowercased with every whitespace character removed.
///
/// Punctuation is kept, so `"+1 (305) 555-0199"` and `"305-555-0199"` stay distinct.
pub fn normalize_key(value: &str) -> String {
    WHITESPACE.replace_all(&value.to_lowercase(), "").into_owned()
}

/// Collapses internal whitespace runs to a single space and trims both ends.
pub fn collapse_whitespace(value: &str) -> String {
    WHITESPACE.replace_all(value.trim(), " ").into_owned()
}
