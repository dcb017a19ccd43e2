//! Leaf traversal over nested JSON values.

use serde_json::Value;

use crate::types::Path;

/// Walk `value` depth-first and call `apply` on every leaf.
///
/// Maps and sequences are never passed to `apply`; their members are visited
/// in enumeration order, with sequence indices rendered as decimal strings.
/// Scalars, `null` included, are leaves. An empty container yields nothing.
///
/// # Example
///
/// ```
/// use manifest_patch::traverse_object;
/// use serde_json::json;
///
/// let mut leaves = Vec::new();
/// traverse_object(&json!({"a": [1, {"b": null}]}), |value, path| {
///     leaves.push((path.join("."), value.clone()));
/// });
/// assert_eq!(leaves, vec![
///     ("a.0".to_string(), json!(1)),
///     ("a.1.b".to_string(), json!(null)),
/// ]);
/// ```
pub fn traverse_object<F>(value: &Value, apply: F)
where
    F: FnMut(&Value, &[String]),
{
    traverse_object_from(value, &[], apply);
}

/// Like [`traverse_object`], but every reported path starts with `prefix`.
pub fn traverse_object_from<F>(value: &Value, prefix: &[String], mut apply: F)
where
    F: FnMut(&Value, &[String]),
{
    let mut path: Path = prefix.to_vec();
    walk(value, &mut path, &mut apply);
}

fn walk<F>(value: &Value, path: &mut Path, apply: &mut F)
where
    F: FnMut(&Value, &[String]),
{
    match value {
        Value::Object(map) => {
            for (key, member) in map {
                path.push(key.clone());
                walk(member, path, apply);
                path.pop();
            }
        }
        Value::Array(items) => {
            for (index, member) in items.iter().enumerate() {
                path.push(index.to_string());
                walk(member, path, apply);
                path.pop();
            }
        }
        _ => apply(value, path),
    }
}

/// Collect every leaf of `value` with its path, in traversal order.
pub fn flatten(value: &Value) -> Vec<(Path, Value)> {
    let mut out = Vec::new();
    traverse_object(value, |leaf, path| out.push((path.to_vec(), leaf.clone())));
    out
}
