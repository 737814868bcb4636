//! Shared utility functions for reading loosely-typed JSON.
//!
//! ## JSON Extraction Helpers
//!
//! Ergonomic helpers for extracting values from `serde_json::Value`:
//! - `json_string`, `json_string_or` - Extract strings
//! - `json_string_array` - Extract string arrays
//! - `json_bool` - Extract booleans
//! - `json_array` - Borrow an array, treating anything else as empty

use serde_json::Value;

/// Extract string from JSON value by key.
///
/// Replaces verbose `v.get("key")?.as_str()?.to_string()` patterns.
#[inline]
pub fn json_string(value: &Value, key: &str) -> Option<String> {
    value.get(key)?.as_str().map(String::from)
}

/// Extract a non-blank string, treating `""` like a missing key.
#[inline]
pub fn json_non_empty_string(value: &Value, key: &str) -> Option<String> {
    json_string(value, key).filter(|s| !s.trim().is_empty())
}

/// Extract string with default value.
#[inline]
pub fn json_string_or(value: &Value, key: &str, default: &str) -> String {
    json_string(value, key).unwrap_or_else(|| default.to_string())
}

/// Extract string array from JSON value by key.
#[inline]
pub fn json_string_array(value: &Value, key: &str) -> Vec<String> {
    json_array(value, key)
        .iter()
        .filter_map(|s| s.as_str().map(String::from))
        .collect()
}

/// Extract boolean with default.
#[inline]
pub fn json_bool(value: &Value, key: &str, default: bool) -> bool {
    value.get(key).and_then(|v| v.as_bool()).unwrap_or(default)
}

/// Borrow an array by key; missing or non-array values read as empty.
#[inline]
pub fn json_array<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default()
}
