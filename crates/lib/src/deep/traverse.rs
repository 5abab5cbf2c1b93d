//! Depth-first traversal engine.

use crate::{container::Container, key::Key, path::PathKey, value::Value};

/// A leaf reached by traversal, together with its full path from the traversal root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafPair<'a> {
    /// Full path from the traversal root
    pub key: PathKey,
    /// The leaf value
    pub value: &'a Value,
}

impl<'a> LeafPair<'a> {
    /// Creates a new pair.
    pub fn new(key: PathKey, value: &'a Value) -> Self {
        Self { key, value }
    }

    /// Converts into an owned `(key, value)` tuple.
    pub fn into_owned(self) -> (PathKey, Value) {
        (self.key, self.value.clone())
    }
}

impl<'a> From<LeafPair<'a>> for (PathKey, &'a Value) {
    fn from(pair: LeafPair<'a>) -> Self {
        (pair.key, pair.value)
    }
}

/// Appends every leaf below `container` to `out`, mapping insertion order, list index
/// order, depth first.
pub(crate) fn walk<'a>(
    container: &'a dyn Container,
    ancestry: &mut Vec<Key>,
    out: &mut Vec<LeafPair<'a>>,
) {
    for (segment, value) in container.shallow_entries() {
        match value.as_container() {
            Some(child) => {
                ancestry.push(segment);
                walk(child, ancestry, out);
                ancestry.pop();
            }
            None => out.push(LeafPair::new(PathKey::from_parts(ancestry, segment), value)),
        }
    }
}

/// Collects every leaf below `container`.
pub(crate) fn leaves(container: &dyn Container) -> Vec<LeafPair<'_>> {
    let mut out = Vec::new();
    walk(container, &mut Vec::new(), &mut out);
    out
}
