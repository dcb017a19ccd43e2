//! Dotted-path utilities for manifest trees.
//!
//! A manifest path names a location in a nested JSON tree, segment by
//! segment: `DestinyInventoryItemDefinition.2575506895.displayProperties.name`.
//! Segments are always strings. Whether a numeric-looking segment is an array
//! index or a map key is decided by the container it is applied to, not by
//! the path.
//!
//! # Example
//!
//! ```
//! use manifest_path::{format_path, get, parse_dotted_path};
//!
//! let path = parse_dotted_path("DestinyFooDefinition.123.name");
//! assert_eq!(path, vec!["DestinyFooDefinition", "123", "name"]);
//! assert_eq!(format_path(&path, '.'), "DestinyFooDefinition.123.name");
//!
//! let doc = serde_json::json!({"DestinyFooDefinition": {"123": {"name": "x"}}});
//! assert_eq!(get(&doc, &path), Some(&serde_json::json!("x")));
//! ```

use serde_json::Value;

pub mod parse;
pub mod types;
pub mod validate;

pub use parse::{format_path, parse_dotted_path, parse_path, DEFAULT_DELIMITER};
pub use types::{Path, PathSpec, Segment};
pub use validate::{validate_path, validate_path_str, ValidationError, MAX_PATH_LENGTH};

/// Check if a string is written as a non-negative integer array index.
///
/// # Example
///
/// ```
/// use manifest_path::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("2575506895"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("1.5"));
/// assert!(!is_valid_index("abc"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    // First char can't be leading zero unless it's just "0"
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Parse a segment as an array index.
///
/// Returns `None` unless [`is_valid_index`] holds and the number fits in
/// `usize`.
pub fn parse_index(segment: &str) -> Option<usize> {
    if !is_valid_index(segment) {
        return None;
    }
    segment.parse().ok()
}

/// Get a value from a manifest tree by path.
///
/// Map nodes are looked up by key; sequence nodes by index. Returns `None`
/// if any step is missing.
///
/// # Example
///
/// ```
/// use manifest_path::get;
/// use serde_json::json;
///
/// let doc = json!({"a": [{"b": 1}]});
/// assert_eq!(get(&doc, &["a".to_string(), "0".to_string(), "b".to_string()]), Some(&json!(1)));
/// assert_eq!(get(&doc, &["a".to_string(), "1".to_string()]), None);
/// ```
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Object(map) => map.get(step)?,
            Value::Array(arr) => arr.get(parse_index(step)?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a value by a delimited path string.
pub fn get_by_str<'a>(val: &'a Value, path: &str, delimiter: char) -> Option<&'a Value> {
    get(val, &parse_path(path, delimiter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("42"), Some(42));
        assert_eq!(parse_index("042"), None);
        assert_eq!(parse_index("99999999999999999999999999"), None);
    }

    #[test]
    fn test_get_root() {
        let doc = json!({"a": 1});
        assert_eq!(get(&doc, &[]), Some(&doc));
    }

    #[test]
    fn test_get_numeric_map_key() {
        let doc = json!({"DestinyFooDefinition": {"123": {"name": "foo"}}});
        assert_eq!(
            get_by_str(&doc, "DestinyFooDefinition.123.name", '.'),
            Some(&json!("foo"))
        );
    }

    #[test]
    fn test_get_through_scalar() {
        let doc = json!({"a": "scalar"});
        assert_eq!(get_by_str(&doc, "a.b", '.'), None);
    }

    #[test]
    fn test_get_non_index_on_array() {
        let doc = json!({"a": [1, 2]});
        assert_eq!(get_by_str(&doc, "a.x", '.'), None);
        assert_eq!(get_by_str(&doc, "a[1]", '.'), Some(&json!(2)));
    }
}
