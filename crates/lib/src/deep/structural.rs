//! Structural combinators over two trees: diff, outersect, intersect and zip.
//!
//! Each combinator rebuilds the primary container's shape with `empty_like` and
//! `append_or_set`. A key recurses only when both sides hold a container under it; a
//! container facing a leaf (or nothing) is compared or paired as a leaf.

use indexmap::IndexSet;

use crate::{
    container::Container,
    key::Key,
    list::List,
    value::Value,
};

/// Equality used to compare two leaves.
pub(crate) type Equality<'f> = dyn FnMut(&Value, &Value) -> bool + 'f;

/// Keys of `a` in order, followed by keys only `b` has.
fn union_keys(a: &dyn Container, b: &dyn Container) -> IndexSet<Key> {
    let mut keys: IndexSet<Key> = a.shallow_keys().into_iter().collect();
    keys.extend(b.shallow_keys());
    keys
}

fn pair(a: Option<&Value>, b: Option<&Value>) -> Value {
    let items = vec![
        a.cloned().unwrap_or(Value::Null),
        b.cloned().unwrap_or(Value::Null),
    ];
    Value::List(List::from(items))
}

fn keep_nonempty<C: Container>(result: &mut C, key: Key, nested: Value) {
    if !nested.is_empty_branch() {
        result.append_or_set(key, nested);
    }
}

/// Entries of `a` that `b` lacks or holds a different value for.
pub(crate) fn diff<C: Container>(a: &C, b: &dyn Container, eq: &mut Equality<'_>) -> C {
    let mut result = a.empty_like();
    for (key, av) in a.shallow_entries() {
        let bv = b.try_get(&key);
        let nested = match (av, bv.and_then(Value::as_container)) {
            (Value::Map(am), Some(bc)) => Some(diff(am, bc, eq).into_value()),
            (Value::List(al), Some(bc)) => Some(diff(al, bc, eq).into_value()),
            _ => None,
        };
        match nested {
            Some(nested) => keep_nonempty(&mut result, key, nested),
            None => {
                let same = bv.is_some_and(|bv| eq(av, bv));
                if !same {
                    result.append_or_set(key, av.clone());
                }
            }
        }
    }
    result
}

/// Every key, from either side, whose values differ, as `[a, b]` pairs.
pub(crate) fn outersect<C: Container>(a: &C, b: &dyn Container, eq: &mut Equality<'_>) -> C {
    let mut result = a.empty_like();
    for key in union_keys(a, b) {
        let av = a.try_get(&key);
        let bv = b.try_get(&key);
        let nested = match (av, bv.and_then(Value::as_container)) {
            (Some(Value::Map(am)), Some(bc)) => Some(outersect(am, bc, eq).into_value()),
            (Some(Value::List(al)), Some(bc)) => Some(outersect(al, bc, eq).into_value()),
            _ => None,
        };
        match nested {
            Some(nested) => keep_nonempty(&mut result, key, nested),
            None => {
                let same = match (av, bv) {
                    (Some(av), Some(bv)) => eq(av, bv),
                    _ => false,
                };
                if !same {
                    result.append_or_set(key, pair(av, bv));
                }
            }
        }
    }
    result
}

/// Entries present and equal on both sides.
pub(crate) fn intersect<C: Container>(a: &C, b: &dyn Container, eq: &mut Equality<'_>) -> C {
    let mut result = a.empty_like();
    for key in union_keys(a, b) {
        let av = a.try_get(&key);
        let bv = b.try_get(&key);
        let nested = match (av, bv.and_then(Value::as_container)) {
            (Some(Value::Map(am)), Some(bc)) => Some(intersect(am, bc, eq).into_value()),
            (Some(Value::List(al)), Some(bc)) => Some(intersect(al, bc, eq).into_value()),
            _ => None,
        };
        match (nested, av, bv) {
            (Some(nested), _, _) => keep_nonempty(&mut result, key, nested),
            (None, Some(av), Some(bv)) => {
                if eq(av, bv) {
                    result.append_or_set(key, av.clone());
                }
            }
            _ => {}
        }
    }
    result
}

/// Leaves of `a` paired with whatever `b` holds at the same key.
pub(crate) fn zip<C: Container>(a: &C, b: &dyn Container) -> C {
    let mut result = a.empty_like();
    for (key, av) in a.shallow_entries() {
        let bv = b.try_get(&key);
        let nested = match (av, bv.and_then(Value::as_container)) {
            (Value::Map(am), Some(bc)) => Some(zip(am, bc).into_value()),
            (Value::List(al), Some(bc)) => Some(zip(al, bc).into_value()),
            _ => None,
        };
        match nested {
            Some(nested) => keep_nonempty(&mut result, key, nested),
            None => result.append_or_set(key, pair(Some(av), bv)),
        }
    }
    result
}
