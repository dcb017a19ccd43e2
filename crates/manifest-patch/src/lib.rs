//! Sparse patching for hash-keyed manifest trees.
//!
//! A game-content manifest is a large JSON tree of definition tables keyed by
//! numeric hashes. Fixes to it are written sparsely, either as a list of
//! `(path, value)` pairs or as a partial copy of the manifest, and applied in
//! place at load time.
//!
//! The one rule that makes this more than a generic deep-set: a node reached
//! through a definition-table key (`Destiny…Definition`) is always a map, even
//! though its keys look like array indices. See [`KeyClassifier`].
//!
//! # Example
//!
//! ```
//! use manifest_patch::{apply_patch_list, apply_patch_object, PatchEntry};
//! use serde_json::json;
//!
//! let mut a = json!({});
//! apply_patch_list(&mut a, &[PatchEntry::new("DestinyFooDefinition.123.name", "x")]);
//!
//! let mut b = json!({});
//! apply_patch_object(&mut b, &json!({"DestinyFooDefinition": {"123": {"name": "x"}}}));
//!
//! assert_eq!(a, b);
//! assert!(a["DestinyFooDefinition"].is_object());
//! ```

pub mod apply;
pub mod classify;
pub mod cli;
pub mod codec;
pub mod set;
pub mod traverse;
pub mod types;

pub use apply::{
    apply_patch_list, apply_patch_list_with, apply_patch_object, apply_patch_object_with,
};
pub use classify::{classify, KeyClassifier, DEFAULT_DEFINITION_PREFIX, DEFAULT_DEFINITION_SUFFIX};
pub use codec::{from_json_patch_list, to_json_patch_list};
pub use set::{set_path, set_with, PathSetter};
pub use traverse::{flatten, traverse_object, traverse_object_from};
pub use types::{
    ApplyPatchOptions, CodecError, Conflict, ContainerKind, NodeKind, PatchEntry, Path, PathSpec,
    DEFAULT_MAX_INDEX_GAP,
};
