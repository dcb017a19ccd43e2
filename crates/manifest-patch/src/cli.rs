//! Command-line front end.
//!
//! Provides the logic used by the `manifest-patch` binary: read a manifest
//! and a patch file, apply, print.

use serde_json::Value;
use thiserror::Error;
use tracing::{warn, Level};

use crate::apply::{apply_patch_list_with, apply_patch_object_with};
use crate::codec::from_json_patch_list;
use crate::types::{ApplyPatchOptions, CodecError, Conflict, PatchEntry};

/// Environment variable holding the log level for the binary.
pub const LOG_ENV: &str = "MANIFEST_PATCH_LOG";

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Codec(#[from] CodecError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported patch: expected an array or an object, got {0}")]
    UnsupportedPatch(&'static str),
    #[error("Usage: manifest-patch <patch-file> < manifest.json")]
    Usage,
}

// ── Patch documents ───────────────────────────────────────────────────────

/// A patch file, in either of its two shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchDocument {
    /// `[[path, value], ...]`
    List(Vec<PatchEntry>),
    /// A sparse copy of the manifest.
    Object(Value),
}

impl PatchDocument {
    pub fn from_value(v: Value) -> Result<Self, CliError> {
        match v {
            Value::Array(_) => Ok(PatchDocument::List(from_json_patch_list(&v)?)),
            Value::Object(_) => Ok(PatchDocument::Object(v)),
            Value::Null => Err(CliError::UnsupportedPatch("null")),
            Value::Bool(_) => Err(CliError::UnsupportedPatch("boolean")),
            Value::Number(_) => Err(CliError::UnsupportedPatch("number")),
            Value::String(_) => Err(CliError::UnsupportedPatch("string")),
        }
    }

    pub fn apply<F>(&self, tree: &mut Value, options: &ApplyPatchOptions, on_conflict: F)
    where
        F: FnMut(&Conflict),
    {
        match self {
            PatchDocument::List(entries) => {
                apply_patch_list_with(tree, entries, options, on_conflict)
            }
            PatchDocument::Object(patch) => {
                apply_patch_object_with(tree, patch, options, on_conflict)
            }
        }
    }
}

// ── manifest-patch ────────────────────────────────────────────────────────

/// Apply a patch file to a manifest.
///
/// `manifest_json`: the manifest as a JSON string.
/// `patch_json`: a patch list or patch object as a JSON string.
///
/// Returns the patched manifest as a pretty-printed JSON string. Conflicts
/// are logged as warnings.
pub fn patch_manifest(manifest_json: &str, patch_json: &str) -> Result<String, CliError> {
    let mut manifest: Value = serde_json::from_str(manifest_json)?;
    let patch = PatchDocument::from_value(serde_json::from_str(patch_json)?)?;
    patch.apply(&mut manifest, &ApplyPatchOptions::default(), |conflict: &Conflict| {
        warn!(?conflict, "patch overwrote existing data");
    });
    Ok(serde_json::to_string_pretty(&manifest)?)
}

/// Parse a log level name, falling back to `WARN`.
pub fn log_level(name: Option<&str>) -> Level {
    name.and_then(|s| s.trim().parse().ok()).unwrap_or(Level::WARN)
}

// ── Tests ─────────────────────────────────────────────────────────────────
