//! Type definitions for manifest paths.

use std::borrow::Cow;

use crate::parse::parse_path;

/// A single step in a path.
///
/// Always a string: numeric-looking segments such as definition hashes stay
/// strings until a container decides how to interpret them.
pub type Segment = String;

/// A path into a manifest tree.
pub type Path = Vec<Segment>;

/// A path as supplied by a patch author.
///
/// Either a delimited string (`"DestinyInventoryItemDefinition.123.name"`)
/// or an already split sequence of segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSpec {
    Dotted(String),
    Segments(Path),
}

impl PathSpec {
    /// Resolve to segments, splitting dotted strings on `delimiter`.
    pub fn segments(&self, delimiter: char) -> Cow<'_, [Segment]> {
        match self {
            PathSpec::Dotted(s) => Cow::Owned(parse_path(s, delimiter)),
            PathSpec::Segments(path) => Cow::Borrowed(path),
        }
    }

    /// Check if this path names no segments at all.
    ///
    /// A dotted `""` is *not* empty: it addresses the empty-string key.
    pub fn is_empty(&self) -> bool {
        matches!(self, PathSpec::Segments(path) if path.is_empty())
    }
}

impl From<&str> for PathSpec {
    fn from(s: &str) -> Self {
        PathSpec::Dotted(s.to_string())
    }
}

impl From<String> for PathSpec {
    fn from(s: String) -> Self {
        PathSpec::Dotted(s)
    }
}

impl From<Path> for PathSpec {
    fn from(path: Path) -> Self {
        PathSpec::Segments(path)
    }
}

impl From<&[&str]> for PathSpec {
    fn from(path: &[&str]) -> Self {
        PathSpec::Segments(path.iter().map(|s| s.to_string()).collect())
    }
}
