//! Path-aware deep assignment.
//!
//! Walks a path through the target tree, creating missing containers as it
//! goes, and writes a value at the end. Writes never fail: anything in the
//! way is coerced and reported as a [`Conflict`].

use std::collections::{BTreeMap, BTreeSet};

use manifest_path::parse_index;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::types::{ApplyPatchOptions, Conflict, ContainerKind, NodeKind, Path};

/// Write `value` at `path` inside `tree`.
///
/// Missing intermediate nodes are created with the kind chosen by
/// `options.classifier`; existing maps and sequences are reused as they are.
/// Each coercion is logged and passed to `on_conflict`.
///
/// # Example
///
/// ```
/// use manifest_patch::{set_with, ApplyPatchOptions, Conflict};
/// use serde_json::json;
///
/// let mut tree = json!({});
/// let path = vec!["DestinyFooDefinition".to_string(), "123".to_string(), "name".to_string()];
/// set_with(&mut tree, &path, json!("x"), &ApplyPatchOptions::default(), &mut |_: &Conflict| {});
/// assert_eq!(tree, json!({"DestinyFooDefinition": {"123": {"name": "x"}}}));
/// ```
pub fn set_with<F>(
    tree: &mut Value,
    path: &[String],
    value: Value,
    options: &ApplyPatchOptions,
    on_conflict: &mut F,
) where
    F: FnMut(&Conflict) + ?Sized,
{
    PathSetter::new(options, on_conflict).set(tree, path, value);
}

/// Write `value` at `path` with default options, discarding conflicts.
pub fn set_path(tree: &mut Value, path: &[String], value: Value) {
    set_with(tree, path, value, &ApplyPatchOptions::default(), &mut |_: &Conflict| {});
}

// ── PathSetter ────────────────────────────────────────────────────────────

/// A setter shared by all the writes of one patch.
///
/// Reaching an index past the end of a sequence pads it with `null`. The
/// setter remembers which slots it padded, so that when a later write turns
/// that sequence into a map the padding is dropped rather than kept as keys
/// nobody wrote.
///
/// ```
/// use manifest_patch::{ApplyPatchOptions, Conflict, PathSetter};
/// use serde_json::json;
///
/// let options = ApplyPatchOptions::default();
/// let mut on_conflict = |_: &Conflict| {};
/// let mut setter = PathSetter::new(&options, &mut on_conflict);
///
/// let mut tree = json!({});
/// setter.set(&mut tree, &["a".to_string(), "1".to_string()], json!("x"));
/// assert_eq!(tree, json!({"a": [null, "x"]}));
/// setter.set(&mut tree, &["a".to_string(), "b".to_string()], json!("y"));
/// assert_eq!(tree, json!({"a": {"1": "x", "b": "y"}}));
/// ```
pub struct PathSetter<'a, F: ?Sized> {
    options: &'a ApplyPatchOptions,
    on_conflict: &'a mut F,
    /// Padding slots still holding their `null`, by sequence path.
    padded: BTreeMap<Path, BTreeSet<usize>>,
}

impl<'a, F> PathSetter<'a, F>
where
    F: FnMut(&Conflict) + ?Sized,
{
    pub fn new(options: &'a ApplyPatchOptions, on_conflict: &'a mut F) -> Self {
        Self {
            options,
            on_conflict,
            padded: BTreeMap::new(),
        }
    }

    /// Write `value` at `path` inside `tree`. See [`set_with`].
    pub fn set(&mut self, tree: &mut Value, path: &[String], value: Value) {
        let Some((last, init)) = path.split_last() else {
            self.report(Conflict::EmptyPath);
            return;
        };

        let mut node = tree;
        let mut key: &str = "";
        for (depth, segment) in init.iter().enumerate() {
            node = self.child_slot(node, key, segment, &path[..depth]);
            key = segment.as_str();
        }
        *self.child_slot(node, key, last, init) = value;

        // Whatever was padded under the overwritten node is gone.
        if !self.padded.is_empty() {
            self.padded.retain(|at, _| !at.starts_with(path));
        }
    }

    /// Return the member `segment` of `node`, inserting `null` if absent.
    ///
    /// `key` is the segment that led to `node` (empty at the root) and `at` is
    /// the path of `node` itself.
    fn child_slot<'n>(
        &mut self,
        node: &'n mut Value,
        key: &str,
        segment: &str,
        at: &[String],
    ) -> &'n mut Value {
        let index = parse_index(segment);
        let dense = match (&*node, index) {
            (Value::Array(items), Some(index)) if self.within_gap(items.len(), index) => {
                Some(index)
            }
            _ => None,
        };

        match (node, dense) {
            (Value::Array(items), Some(index)) => {
                if index > items.len() {
                    self.padded
                        .entry(at.to_vec())
                        .or_default()
                        .extend(items.len()..index);
                } else if let Some(padding) = self.padded.get_mut(at) {
                    padding.remove(&index);
                }
                if index >= items.len() {
                    items.resize(index + 1, Value::Null);
                }
                &mut items[index]
            }
            (Value::Object(map), _) => map.entry(segment).or_insert(Value::Null),
            (other, _) => {
                self.coerce(other, key, segment, at, index);
                self.child_slot(other, key, segment, at)
            }
        }
    }

    /// Turn `node` into a container that can hold `segment`.
    ///
    /// Afterwards `node` is a map, or a sequence that `segment` indexes
    /// within the gap.
    fn coerce(
        &mut self,
        node: &mut Value,
        key: &str,
        segment: &str,
        at: &[String],
        index: Option<usize>,
    ) {
        if NodeKind::of(node).is_container() {
            // Only sequences get here: a named key, or an index too far out.
            let padding = self.padded.remove(at).unwrap_or_default();
            promote_to_map(node, &padding);
            let conflict = match index {
                Some(index) => Conflict::SparseIndex {
                    path: at.to_vec(),
                    index,
                },
                None => Conflict::SequencePromoted {
                    path: at.to_vec(),
                    key: segment.to_string(),
                },
            };
            self.report(conflict);
            return;
        }

        if !node.is_null() {
            let previous = std::mem::take(node);
            self.report(Conflict::ScalarReplaced {
                path: at.to_vec(),
                previous,
            });
        }
        self.padded.remove(at);

        let kind = match (self.options.classifier.container_kind(key, segment), index) {
            (ContainerKind::Sequence, Some(index)) if !self.within_gap(0, index) => {
                self.report(Conflict::SparseIndex {
                    path: at.to_vec(),
                    index,
                });
                ContainerKind::Map
            }
            (kind, _) => kind,
        };
        trace!(key, segment, ?kind, "creating container");
        *node = kind.empty();
    }

    fn within_gap(&self, len: usize, index: usize) -> bool {
        index.saturating_sub(len) <= self.options.max_index_gap
    }

    fn report(&mut self, conflict: Conflict) {
        debug!(?conflict, "coerced existing data while patching");
        (self.on_conflict)(&conflict);
    }
}

/// Rekey a sequence by element index, leaving out the `padding` slots.
fn promote_to_map(node: &mut Value, padding: &BTreeSet<usize>) {
    if let Value::Array(items) = node {
        let map: Map<String, Value> = std::mem::take(items)
            .into_iter()
            .enumerate()
            .filter(|(index, _)| !padding.contains(index))
            .map(|(index, item)| (index.to_string(), item))
            .collect();
        *node = Value::Object(map);
    }
}
