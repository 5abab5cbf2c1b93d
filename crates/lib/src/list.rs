//! Indexed sequence.
//!
//! [`List`] is addressed by contiguous positions `0..len`. Setting a position past the end
//! extends the list, filling the gap with [`Value::Null`].

use crate::{
    container::{Container, ContainerKind},
    key::Key,
    value::Value,
};

/// Contiguous sequence of [`Value`]s.
///
/// # Examples
///
/// ```
/// # use deeptree::{Container, Key, List, Value};
/// let mut list = List::new();
/// list.push("a");
/// list.set(Key::from(3), Value::from("d"));
///
/// assert_eq!(list.len(), 4);
/// assert_eq!(list.get(1), Some(&Value::Null));
/// assert_eq!(list.get(3), Some(&Value::from("d")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets the element at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Gets a mutable reference to the element at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Appends an element
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Removes and returns the last element
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// Returns an iterator over the elements in index order
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Returns the elements as a slice
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Serializes the list as compact JSON text.
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Container for List {
    fn kind(&self) -> ContainerKind {
        ContainerKind::List
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn shallow_entries(&self) -> Vec<(Key, &Value)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, v)| (Key::from(i), v))
            .collect()
    }

    fn try_get(&self, key: &Key) -> Option<&Value> {
        self.items.get(key.as_index()?)
    }

    fn try_get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.items.get_mut(key.as_index()?)
    }

    fn set(&mut self, key: Key, value: Value) {
        let Some(index) = key.as_index() else {
            tracing::warn!(%key, "key cannot address a list position; set ignored");
            return;
        };
        if index >= self.items.len() {
            self.items.resize(index + 1, Value::Null);
        }
        self.items[index] = value;
    }

    fn append_or_set(&mut self, _key: Key, value: Value) {
        self.items.push(value);
    }

    fn empty_like(&self) -> Self {
        List::new()
    }

    fn into_value(self) -> Value {
        Value::List(self)
    }
}

impl<T: Into<Value>> FromIterator<T> for List {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for List {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
