//! Path accessor protocol: deep get and deep set.

use crate::{
    container::{Container, Intermediate},
    path::PathKey,
    value::Value,
};

/// Follows `key` down from `container`. A missing segment or a leaf in the middle of the
/// path yields `None`.
pub(crate) fn get<'a>(container: &'a dyn Container, key: &PathKey) -> Option<&'a Value> {
    let (head, tail) = key.split();
    let value = container.try_get(head)?;
    match tail {
        None => Some(value),
        Some(tail) => get(value.as_container()?, tail),
    }
}

/// Mutable counterpart of [`get`].
pub(crate) fn get_mut<'a>(
    container: &'a mut dyn Container,
    key: &PathKey,
) -> Option<&'a mut Value> {
    let (head, tail) = key.split();
    let value = container.try_get_mut(head)?;
    match tail {
        None => Some(value),
        Some(tail) => get_mut(value.as_container_mut()?, tail),
    }
}

/// Stores `value` at `key`, replacing missing or leaf intermediate slots with fresh
/// containers shaped by `intermediate`.
pub(crate) fn set(
    container: &mut dyn Container,
    key: &PathKey,
    value: Value,
    intermediate: Intermediate,
) {
    let (head, tail) = key.split();
    let Some(tail) = tail else {
        container.set(head.clone(), value);
        return;
    };

    let parent = container.kind();
    match container.try_get(head) {
        Some(existing) if existing.is_branch() => {}
        existing => {
            if let Some(leaf) = existing {
                tracing::debug!(
                    key = %head,
                    replaced = leaf.type_name(),
                    "replacing leaf with an intermediate container"
                );
            }
            let fresh = intermediate.create(parent, tail.head());
            container.set(head.clone(), fresh);
        }
    }

    match container.try_get_mut(head).and_then(|v| v.as_container_mut()) {
        Some(child) => set(child, tail, value, intermediate),
        None => tracing::warn!(
            key = %head,
            container = %parent,
            "segment cannot address this container; value dropped"
        ),
    }
}
