//! Core types for manifest patching.

use serde_json::{Map, Value};
use thiserror::Error;

pub use manifest_path::{Path, PathSpec};

use crate::classify::KeyClassifier;

// ── Node discriminators ───────────────────────────────────────────────────

/// What a tree node is, as far as traversal and path-setting care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Map,
    Sequence,
    /// Strings, numbers, booleans and `null`.
    Scalar,
}

impl NodeKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => NodeKind::Map,
            Value::Array(_) => NodeKind::Sequence,
            _ => NodeKind::Scalar,
        }
    }

    pub fn is_container(self) -> bool {
        !matches!(self, NodeKind::Scalar)
    }
}

/// The kind of container created for a missing intermediate node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Map,
    Sequence,
}

impl ContainerKind {
    /// A fresh, empty container of this kind.
    pub fn empty(self) -> Value {
        match self {
            ContainerKind::Map => Value::Object(Map::new()),
            ContainerKind::Sequence => Value::Array(Vec::new()),
        }
    }
}

// ── Options ───────────────────────────────────────────────────────────────

/// How many `null`s a sequence may be padded with to reach an index.
pub const DEFAULT_MAX_INDEX_GAP: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyPatchOptions {
    /// Decides the kind of each container created along a path.
    pub classifier: KeyClassifier,
    /// Separator for dotted path strings.
    pub delimiter: char,
    /// Largest number of `null`s padded in to reach an index past the end of
    /// a sequence. Further indices (hashes, mostly) turn the sequence into a
    /// map instead.
    pub max_index_gap: usize,
}

impl Default for ApplyPatchOptions {
    fn default() -> Self {
        Self {
            classifier: KeyClassifier::default(),
            delimiter: manifest_path::DEFAULT_DELIMITER,
            max_index_gap: DEFAULT_MAX_INDEX_GAP,
        }
    }
}

// ── Patch entries ─────────────────────────────────────────────────────────

/// One `(path, value)` instruction of a patch list.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchEntry {
    pub path: PathSpec,
    pub value: Value,
}

impl PatchEntry {
    pub fn new(path: impl Into<PathSpec>, value: impl Into<Value>) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
        }
    }
}

impl<P: Into<PathSpec>, V: Into<Value>> From<(P, V)> for PatchEntry {
    fn from((path, value): (P, V)) -> Self {
        PatchEntry::new(path, value)
    }
}

// ── Conflicts ─────────────────────────────────────────────────────────────

/// A write that had to coerce existing data to proceed.
///
/// Conflicts never stop an application; they are reported so callers can
/// audit patch files against the manifest they target.
#[derive(Debug, Clone, PartialEq)]
pub enum Conflict {
    /// A patch path continued past a scalar, which was replaced by a
    /// container. `path` locates the replaced node.
    ScalarReplaced { path: Path, previous: Value },
    /// A sequence was addressed with a non-index key and was turned into a
    /// map keyed by its element indices.
    SequencePromoted { path: Path, key: String },
    /// An index lay too far past the end of the sequence at `path`, so the
    /// sequence became a map and the index was stored as a key.
    SparseIndex { path: Path, index: usize },
    /// The path had no segments, so nothing was written.
    EmptyPath,
}

// ── Codec errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum CodecError {
    #[error("NOT_AN_ARRAY")]
    NotAnArray,
    #[error("INVALID_ENTRY at {0}: {1}")]
    InvalidEntry(usize, String),
    #[error("INVALID_PATH at {0}")]
    InvalidPath(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn node_kind_of() {
        assert_eq!(NodeKind::of(&json!({})), NodeKind::Map);
        assert_eq!(NodeKind::of(&json!([])), NodeKind::Sequence);
        assert_eq!(NodeKind::of(&json!(null)), NodeKind::Scalar);
        assert_eq!(NodeKind::of(&json!("x")), NodeKind::Scalar);
        assert!(!NodeKind::Scalar.is_container());
        assert!(NodeKind::Sequence.is_container());
    }

    #[test]
    fn container_kind_empty() {
        assert_eq!(ContainerKind::Map.empty(), json!({}));
        assert_eq!(ContainerKind::Sequence.empty(), json!([]));
    }

    #[test]
    fn patch_entry_from_tuple() {
        let entry = PatchEntry::from(("a.b", "v"));
        assert_eq!(entry.path, PathSpec::Dotted("a.b".into()));
        assert_eq!(entry.value, json!("v"));
    }

    #[test]
    fn default_options() {
        let options = ApplyPatchOptions::default();
        assert_eq!(options.delimiter, '.');
        assert_eq!(options.classifier.prefix, "Destiny");
        assert_eq!(options.classifier.suffix, "Definition");
        assert_eq!(options.max_index_gap, DEFAULT_MAX_INDEX_GAP);
    }
}
