//! Patch applicators.
//!
//! Both entry points funnel into one [`PathSetter`] per call: a patch list is
//! applied entry by entry, a patch object is flattened into leaf paths first.

use serde_json::Value;
use tracing::debug;

use crate::set::PathSetter;
use crate::traverse::traverse_object;
use crate::types::{ApplyPatchOptions, Conflict, PatchEntry};

/// Apply a list of `(path, value)` fixes, in order.
///
/// ```
/// use manifest_patch::{apply_patch_list, PatchEntry};
/// use serde_json::json;
///
/// let mut manifest = json!({
///     "DestinyInventoryItemDefinition": {
///         "2575506895": {"displayProperties": {"name": "Old"}}
///     }
/// });
/// apply_patch_list(&mut manifest, &[PatchEntry::new(
///     "DestinyInventoryItemDefinition.2575506895.displayProperties.name",
///     "New",
/// )]);
/// assert_eq!(
///     manifest["DestinyInventoryItemDefinition"]["2575506895"]["displayProperties"]["name"],
///     "New"
/// );
/// ```
pub fn apply_patch_list(tree: &mut Value, patches: &[PatchEntry]) {
    apply_patch_list_with(tree, patches, &ApplyPatchOptions::default(), |_: &Conflict| {});
}

/// Apply a list of fixes with explicit options, reporting every conflict.
pub fn apply_patch_list_with<F>(
    tree: &mut Value,
    patches: &[PatchEntry],
    options: &ApplyPatchOptions,
    mut on_conflict: F,
) where
    F: FnMut(&Conflict),
{
    debug!(entries = patches.len(), "applying patch list");
    let mut setter = PathSetter::new(options, &mut on_conflict);
    for entry in patches {
        let path = entry.path.segments(options.delimiter);
        setter.set(tree, &path, entry.value.clone());
    }
}

/// Apply fixes written as a sparse copy of the manifest.
///
/// Only leaves are written; an empty map or sequence in the patch object
/// changes nothing.
///
/// ```
/// use manifest_patch::apply_patch_object;
/// use serde_json::json;
///
/// let mut manifest = json!({"DestinyFooDefinition": {"1": {"a": 1, "b": 2}}});
/// apply_patch_object(&mut manifest, &json!({"DestinyFooDefinition": {"1": {"b": 3}}}));
/// assert_eq!(manifest, json!({"DestinyFooDefinition": {"1": {"a": 1, "b": 3}}}));
/// ```
pub fn apply_patch_object(tree: &mut Value, patch_object: &Value) {
    apply_patch_object_with(tree, patch_object, &ApplyPatchOptions::default(), |_: &Conflict| {});
}

/// Apply a patch object with explicit options, reporting every conflict.
pub fn apply_patch_object_with<F>(
    tree: &mut Value,
    patch_object: &Value,
    options: &ApplyPatchOptions,
    mut on_conflict: F,
) where
    F: FnMut(&Conflict),
{
    let mut setter = PathSetter::new(options, &mut on_conflict);
    let mut leaves = 0usize;
    traverse_object(patch_object, |value, path| {
        leaves += 1;
        setter.set(tree, path, value.clone());
    });
    debug!(leaves, "applied patch object");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::KeyClassifier;
    use serde_json::json;

    #[test]
    fn empty_list_is_identity() {
        let mut tree = json!({"a": [1, {"b": 2}]});
        let before = tree.clone();
        apply_patch_list(&mut tree, &[]);
        assert_eq!(tree, before);
    }

    #[test]
    fn empty_object_is_identity() {
        let mut tree = json!({"a": [1, {"b": 2}]});
        let before = tree.clone();
        apply_patch_object(&mut tree, &json!({}));
        assert_eq!(tree, before);
    }

    #[test]
    fn last_write_wins() {
        let mut tree = json!({});
        apply_patch_list(
            &mut tree,
            &[PatchEntry::new("a.b", "first"), PatchEntry::new("a.b", "second")],
        );
        assert_eq!(tree, json!({"a": {"b": "second"}}));
    }

    #[test]
    fn segment_paths_are_not_split() {
        let mut tree = json!({});
        apply_patch_list(
            &mut tree,
            &[PatchEntry::new(vec!["a.b".to_string(), "c".to_string()], 1)],
        );
        assert_eq!(tree, json!({"a.b": {"c": 1}}));
    }

    #[test]
    fn scalar_patch_object_writes_nothing() {
        let mut tree = json!({"a": 1});
        let mut conflicts = Vec::new();
        apply_patch_object_with(
            &mut tree,
            &json!("loose"),
            &ApplyPatchOptions::default(),
            |c: &Conflict| conflicts.push(c.clone()),
        );
        assert_eq!(tree, json!({"a": 1}));
        assert_eq!(conflicts, vec![Conflict::EmptyPath]);
    }

    #[test]
    fn custom_delimiter_and_classifier() {
        let options = ApplyPatchOptions {
            classifier: KeyClassifier::new("Hash", "Table"),
            delimiter: '/',
            ..ApplyPatchOptions::default()
        };
        let mut tree = json!({});
        apply_patch_list_with(
            &mut tree,
            &[
                PatchEntry::new("HashItemTable/42/name", "x"),
                PatchEntry::new("DestinyFooDefinition/0", "y"),
            ],
            &options,
            |_: &Conflict| {},
        );
        assert_eq!(
            tree,
            json!({"HashItemTable": {"42": {"name": "x"}}, "DestinyFooDefinition": ["y"]})
        );
    }

    #[test]
    fn conflicts_reach_the_callback() {
        let mut tree = json!({"a": 1, "b": [1]});
        let mut conflicts = Vec::new();
        apply_patch_list_with(
            &mut tree,
            &[PatchEntry::new("a.x", 2), PatchEntry::new("b.y", 3)],
            &ApplyPatchOptions::default(),
            |c: &Conflict| conflicts.push(c.clone()),
        );
        assert_eq!(tree, json!({"a": {"x": 2}, "b": {"0": 1, "y": 3}}));
        assert_eq!(conflicts.len(), 2);
    }

    #[test]
    fn promotion_after_padding_keeps_only_written_keys() {
        let mut tree = json!({});
        apply_patch_object(&mut tree, &json!({"a": {"1": "x", "b": "y"}}));
        assert_eq!(tree, json!({"a": {"1": "x", "b": "y"}}));

        let mut tree = json!({});
        apply_patch_list(
            &mut tree,
            &[PatchEntry::new("a.1", "x"), PatchEntry::new("a.b", "y")],
        );
        assert_eq!(tree, json!({"a": {"1": "x", "b": "y"}}));
    }

    #[test]
    fn out_of_range_index_does_not_panic() {
        let mut tree = json!({});
        apply_patch_list(&mut tree, &[PatchEntry::new("plain.18446744073709551615", 1)]);
        assert_eq!(tree, json!({"plain": {"18446744073709551615": 1}}));
    }
}
