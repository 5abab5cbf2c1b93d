//! Ordered mapping.
//!
//! [`Map`] keeps keys unique and preserves insertion order. Re-inserting an existing key
//! replaces its value in place; removing a key closes the gap without reordering the rest.
//!
//! `Key::Index(1)` and `Key::Name("1")` are distinct keys here but the same JSON object key.
//! A map holding both refuses to serialize instead of emitting a duplicate key.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::ser::Error as _;

use crate::{
    container::{Container, ContainerKind},
    key::Key,
    value::Value,
};

/// Ordered mapping from [`Key`]s to [`Value`]s.
///
/// # Examples
///
/// ```
/// # use deeptree::{Key, Map, Value};
/// let mut map = Map::new();
/// map.insert("name", "Alice");
/// map.insert(1, 30);
/// map.insert("name", "Bob");
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec![Key::from("name"), Key::from(1)]);
/// assert_eq!(map.get("name"), Some(&Value::from("Bob")));
/// assert_eq!(map.get(1), Some(&Value::from(30)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(transparent)]
pub struct Map {
    entries: IndexMap<Key, Value>,
}

impl Map {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the map contains the given key
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Gets a value by key
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    /// Gets a mutable reference to a value by key
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        self.entries.get_mut(&key.into())
    }

    /// Inserts a value, returning the previous one. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes a key, preserving the order of the remaining entries
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.entries.shift_remove(&key.into())
    }

    /// Returns an iterator over the keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Returns an iterator over the values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Returns an iterator over the entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Returns a new map with every key replaced by `f(key)`.
    ///
    /// Values are left untouched and nothing is recursed into. When two keys map to the same
    /// new key the later entry wins, keeping the position of the first.
    pub fn map_keys<F>(&self, f: F) -> Map
    where
        F: FnMut(&Key) -> Key,
    {
        let mut result = self.clone();
        result.map_keys_in_place(f);
        result
    }

    /// Replaces every key with `f(key)` in place.
    ///
    /// The entries are taken out of the map before the first new key is inserted, so `f`
    /// never observes a half-rewritten map.
    pub fn map_keys_in_place<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&Key) -> Key,
    {
        let snapshot = std::mem::take(&mut self.entries);
        self.entries.reserve(snapshot.len());
        for (key, value) in snapshot {
            let new_key = f(&key);
            if let Some(replaced) = self.entries.insert(new_key, value) {
                tracing::debug!(
                    from = %key,
                    replaced = replaced.type_name(),
                    "map_keys collapsed two entries onto one key"
                );
            }
        }
        self
    }

    /// Returns the first two keys that render to the same JSON object key, if any.
    pub fn json_key_collision(&self) -> Option<(&Key, &Key)> {
        let mut seen: HashMap<String, &Key> = HashMap::with_capacity(self.entries.len());
        self.entries
            .keys()
            .find_map(|key| seen.insert(key.to_string(), key).map(|first| (first, key)))
    }

    /// Serializes the map as compact JSON text.
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl serde::Serialize for Map {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some((first, second)) = self.json_key_collision() {
            return Err(S::Error::custom(format!(
                "keys {first:?} and {second:?} both serialize as the object key \"{second}\""
            )));
        }
        serializer.collect_map(&self.entries)
    }
}

impl Container for Map {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Map
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn shallow_entries(&self) -> Vec<(Key, &Value)> {
        self.entries.iter().map(|(k, v)| (k.clone(), v)).collect()
    }

    fn try_get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    fn try_get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    fn set(&mut self, key: Key, value: Value) {
        self.entries.insert(key, value);
    }

    fn append_or_set(&mut self, key: Key, value: Value) {
        self.entries.insert(key, value);
    }

    fn empty_like(&self) -> Self {
        Map::new()
    }

    fn into_value(self) -> Value {
        Value::Map(self)
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Map {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Map {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for Map {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
