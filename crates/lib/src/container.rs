//! The container capability.
//!
//! Every deep operation is written against [`Container`], which [`Map`] and [`List`]
//! implement. A [`Value`] is a container exactly when it is `Value::Map` or `Value::List`;
//! see [`Value::as_container`].

use std::fmt;

use crate::{key::Key, list::List, map::Map, value::Value};

/// Which of the two container shapes a container is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Ordered mapping
    Map,
    /// Indexed sequence
    List,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Map => write!(f, "map"),
            ContainerKind::List => write!(f, "list"),
        }
    }
}

/// The minimal contract a shape satisfies to take part in deep operations.
///
/// Lookups never fail: a key the container cannot address (a name against a list, a
/// missing map key) is reported as `None`.
pub trait Container {
    /// Returns the shape of this container.
    fn kind(&self) -> ContainerKind;

    /// Returns the number of immediate entries.
    fn len(&self) -> usize;

    /// Returns true if there are no immediate entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the immediate `(key, value)` entries in traversal order.
    fn shallow_entries(&self) -> Vec<(Key, &Value)>;

    /// Returns the immediate keys in traversal order.
    fn shallow_keys(&self) -> Vec<Key> {
        self.shallow_entries().into_iter().map(|(k, _)| k).collect()
    }

    /// Looks up an immediate entry.
    fn try_get(&self, key: &Key) -> Option<&Value>;

    /// Looks up an immediate entry for mutation.
    fn try_get_mut(&mut self, key: &Key) -> Option<&mut Value>;

    /// Stores `value` under `key`, creating the slot if absent.
    fn set(&mut self, key: Key, value: Value);

    /// Adds an entry while rebuilding a container: lists append (closing gaps left by
    /// dropped entries), maps set under the original key.
    fn append_or_set(&mut self, key: Key, value: Value);

    /// Returns a new empty container of the same shape.
    fn empty_like(&self) -> Self
    where
        Self: Sized;

    /// Wraps the container into a branch value.
    fn into_value(self) -> Value
    where
        Self: Sized;
}

/// Shape of the containers created when `deep_set` passes through a missing or leaf slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intermediate {
    /// Create a list when the parent is a list and the next segment is an index, a map
    /// otherwise.
    #[default]
    Auto,
    /// Always create a map.
    Mapping,
}

impl Intermediate {
    /// Creates the empty container to place under a `parent` slot that `next` will address.
    pub fn create(self, parent: ContainerKind, next: &Key) -> Value {
        match (self, parent, next.as_index()) {
            (Intermediate::Auto, ContainerKind::List, Some(_)) => Value::List(List::new()),
            _ => Value::Map(Map::new()),
        }
    }
}
