//! JSON codec for patch lists.
//!
//! A patch list on disk is an array of two-element arrays:
//!
//! ```json
//! [
//!   ["DestinyInventoryItemDefinition.2575506895.displayProperties.name", "New name"],
//!   [["DestinyStatDefinition", "1885944937", "displayProperties", "name"], "Impact"]
//! ]
//! ```
//!
//! The path is either a delimited string or an array of segments. Numeric
//! segments in an array are accepted and stringified.

use serde_json::Value;

use crate::types::{CodecError, PatchEntry, PathSpec};

fn decode_path(index: usize, v: &Value) -> Result<PathSpec, CodecError> {
    match v {
        Value::String(s) => Ok(PathSpec::Dotted(s.clone())),
        Value::Array(segments) => segments
            .iter()
            .map(|segment| match segment {
                Value::String(s) => Ok(s.clone()),
                Value::Number(n) => Ok(n.to_string()),
                _ => Err(CodecError::InvalidPath(index)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(PathSpec::Segments),
        _ => Err(CodecError::InvalidPath(index)),
    }
}

fn encode_path(path: &PathSpec) -> Value {
    match path {
        PathSpec::Dotted(s) => Value::String(s.clone()),
        PathSpec::Segments(segments) => {
            Value::Array(segments.iter().cloned().map(Value::String).collect())
        }
    }
}

/// Decode a single `[path, value]` pair.
pub fn from_json(index: usize, v: &Value) -> Result<PatchEntry, CodecError> {
    let pair = v
        .as_array()
        .ok_or_else(|| CodecError::InvalidEntry(index, "entry must be an array".into()))?;
    match pair.as_slice() {
        [path, value] => Ok(PatchEntry {
            path: decode_path(index, path)?,
            value: value.clone(),
        }),
        _ => Err(CodecError::InvalidEntry(
            index,
            format!("expected [path, value], got {} elements", pair.len()),
        )),
    }
}

/// Decode a whole patch list.
pub fn from_json_patch_list(v: &Value) -> Result<Vec<PatchEntry>, CodecError> {
    let entries = v.as_array().ok_or(CodecError::NotAnArray)?;
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| from_json(index, entry))
        .collect()
}

/// Encode a patch entry as a `[path, value]` pair.
pub fn to_json(entry: &PatchEntry) -> Value {
    Value::Array(vec![encode_path(&entry.path), entry.value.clone()])
}

/// Encode a patch list.
pub fn to_json_patch_list(entries: &[PatchEntry]) -> Value {
    Value::Array(entries.iter().map(to_json).collect())
}
