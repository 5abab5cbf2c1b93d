//! Filter engine shared by select, reject and duplicate.

use crate::{container::Container, key::Key, path::PathKey, value::Value};

/// Predicate over a leaf and its full path.
pub(crate) type Predicate<'f> = dyn FnMut(&PathKey, &Value) -> bool + 'f;

/// Rebuilds `container` keeping the leaves for which `predicate` returns `keep`.
///
/// Child containers are always kept under their key, even when nothing inside them
/// survives. Lists compact; maps keep the original (possibly sparse) keys.
pub(crate) fn select<C: Container>(
    container: &C,
    ancestry: &mut Vec<Key>,
    keep: bool,
    predicate: &mut Predicate<'_>,
) -> C {
    let mut result = container.empty_like();
    for (key, value) in container.shallow_entries() {
        let kept = match value {
            Value::Map(map) => {
                ancestry.push(key.clone());
                let nested = select(map, ancestry, keep, predicate);
                ancestry.pop();
                Some(nested.into_value())
            }
            Value::List(list) => {
                ancestry.push(key.clone());
                let nested = select(list, ancestry, keep, predicate);
                ancestry.pop();
                Some(nested.into_value())
            }
            leaf => {
                let path = PathKey::from_parts(ancestry, key.clone());
                (predicate(&path, leaf) == keep).then(|| leaf.clone())
            }
        };
        if let Some(value) = kept {
            result.append_or_set(key, value);
        }
    }
    result
}
