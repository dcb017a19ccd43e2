//! Container classification for path-setting.
//!
//! When a patch path runs through a node that does not exist yet, the setter
//! has to invent a container for it. The generic rule picks a sequence when
//! the next segment looks like an array index and a map otherwise. Manifest
//! definition tables break that rule: they are keyed by numeric hashes
//! (`DestinyInventoryItemDefinition.2575506895`), and treating the hash as an
//! index would produce a sequence with billions of holes. Any node reached
//! through a key that starts with the definition prefix and ends with the
//! definition suffix is therefore always a map.

use manifest_path::parse_index;

use crate::types::ContainerKind;

/// Table-name prefix used by the Destiny manifest.
pub const DEFAULT_DEFINITION_PREFIX: &str = "Destiny";

/// Table-name suffix used by the Destiny manifest.
pub const DEFAULT_DEFINITION_SUFFIX: &str = "Definition";

/// Decides whether a newly created node is a map or a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyClassifier {
    pub prefix: String,
    pub suffix: String,
}

impl Default for KeyClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_DEFINITION_PREFIX, DEFAULT_DEFINITION_SUFFIX)
    }
}

impl KeyClassifier {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Check if `key` names a definition table.
    pub fn is_definition_table(&self, key: &str) -> bool {
        key.starts_with(self.prefix.as_str()) && key.ends_with(self.suffix.as_str())
    }

    /// Kind of container to create for the node reached through `key`, when
    /// the path continues into it with `next_segment`.
    ///
    /// # Example
    ///
    /// ```
    /// use manifest_patch::{ContainerKind, KeyClassifier};
    ///
    /// let classifier = KeyClassifier::default();
    /// assert_eq!(classifier.container_kind("DestinyFooDefinition", "123"), ContainerKind::Map);
    /// assert_eq!(classifier.container_kind("plainArray", "0"), ContainerKind::Sequence);
    /// assert_eq!(classifier.container_kind("plainArray", "name"), ContainerKind::Map);
    /// ```
    pub fn container_kind(&self, key: &str, next_segment: &str) -> ContainerKind {
        if self.is_definition_table(key) {
            return ContainerKind::Map;
        }
        if parse_index(next_segment).is_some() {
            ContainerKind::Sequence
        } else {
            ContainerKind::Map
        }
    }
}

/// Classify with the default Destiny manifest rule.
pub fn classify(key: &str, next_segment: &str) -> ContainerKind {
    KeyClassifier::default().container_kind(key, next_segment)
}
