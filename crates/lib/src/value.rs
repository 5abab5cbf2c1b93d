//! Value types for nested trees.
//!
//! This module provides the [`Value`] enum that represents everything that can be stored
//! inside a [`Map`] or [`List`]. Values are either leaves (null, booleans, integers, text)
//! or branches (maps and lists). Only branches take part in deep traversal; every other
//! value is an opaque leaf.

use std::fmt;

use thiserror::Error;

use crate::{container::Container, list::List, map::Map};

/// Errors raised when converting values.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    /// The value has a different type than requested
    #[error("Value type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// The input cannot be represented as a value (e.g. a JSON float)
    #[error("Unsupported value: {reason}")]
    Unsupported { reason: String },
}

impl ValueError {
    /// Check if this error is a type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, ValueError::TypeMismatch { .. })
    }

    /// Check if this error reports unrepresentable input
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ValueError::Unsupported { .. })
    }
}

/// Values that can be stored in nested trees.
///
/// # Value Types
///
/// ## Leaf Values
/// - [`Value::Null`] - Null; also the filler used when a list is extended past its end
/// - [`Value::Bool`] - Boolean values
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Text`] - UTF-8 text strings
///
/// ## Branch Values
/// - [`Value::Map`] - Ordered mapping
/// - [`Value::List`] - Indexed sequence
///
/// # Absence and null
///
/// Lookups return `Option<&Value>`, so a missing key (`None`) is distinct from a key holding
/// `Value::Null` (`Some(&Value::Null)`). The two only meet where a combinator has to
/// materialise a missing side, as in the `[a, b]` pairs built by outersect and zip, where
/// `Null` stands in for the absent value.
///
/// # Direct Comparisons
///
/// ```
/// # use deeptree::Value;
/// assert!(Value::from("hello") == "hello");
/// assert!(Value::from(42) == 42);
/// assert!(Value::from(true) == true);
/// assert!(!(Value::from(42) == "42"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    // Leaf values
    /// Null value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Text string value
    Text(String),

    // Branch values
    /// Ordered collection of values
    List(List),
    /// Ordered mapping of keys to values
    Map(Map),
}

impl Value {
    /// Returns true if this is a leaf value
    pub fn is_leaf(&self) -> bool {
        !self.is_branch()
    }

    /// Returns true if this is a branch value (a map or a list)
    pub fn is_branch(&self) -> bool {
        matches!(self, Value::Map(_) | Value::List(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a branch without entries
    pub fn is_empty_branch(&self) -> bool {
        match self {
            Value::Map(map) => map.is_empty(),
            Value::List(list) => list.is_empty(),
            _ => false,
        }
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Returns the container view of a branch value, `None` for leaves.
    pub fn as_container(&self) -> Option<&dyn Container> {
        match self {
            Value::Map(map) => Some(map),
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Returns the mutable container view of a branch value, `None` for leaves.
    pub fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        match self {
            Value::Map(map) => Some(map),
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a Map
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable Map
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a List
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable List
    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Parses JSON text into a value.
    ///
    /// Object keys become [`Key::Name`](crate::Key::Name) keys. Numbers must fit in an `i64`.
    ///
    /// ```
    /// # use deeptree::Value;
    /// let value = Value::from_json_str(r#"{"a": [1, "two", null]}"#)?;
    /// assert_eq!(value.to_json_string()?, r#"{"a":[1,"two",null]}"#);
    /// # Ok::<(), deeptree::Error>(())
    /// ```
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let json: serde_json::Value = serde_json::from_str(json)?;
        Ok(Value::try_from(json)?)
    }

    /// Serializes the value as compact JSON text.
    ///
    /// # Errors
    /// Fails with [`ValueError::Unsupported`] when a map holds two keys that render to the
    /// same JSON object key, such as `1` and `"1"`.
    pub fn to_json_string(&self) -> crate::Result<String> {
        let json = serde_json::Value::try_from(self)?;
        Ok(serde_json::to_string(&json)?)
    }

    /// Serializes the value as indented JSON text.
    pub fn to_json_string_pretty(&self) -> crate::Result<String> {
        let json = serde_json::Value::try_from(self)?;
        Ok(serde_json::to_string_pretty(&json)?)
    }
}

/// Compact JSON. A value with colliding map keys has no faithful JSON form and falls back
/// to its `Debug` rendering.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::Value::try_from(self) {
            Ok(json) => write!(f, "{json}"),
            Err(_) => write!(f, "{self:?}"),
        }
    }
}

// Conversions into Value

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Value::List(list)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// Typed access out of Value

impl TryFrom<&Value> for i64 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_int().ok_or(ValueError::TypeMismatch {
            expected: "int",
            actual: value.type_name(),
        })
    }
}

impl TryFrom<&Value> for bool {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or(ValueError::TypeMismatch {
            expected: "bool",
            actual: value.type_name(),
        })
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = ValueError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_text().ok_or(ValueError::TypeMismatch {
            expected: "text",
            actual: value.type_name(),
        })
    }
}

impl TryFrom<&Value> for String {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        <&str>::try_from(value).map(str::to_string)
    }
}

impl<'a> TryFrom<&'a Value> for &'a Map {
    type Error = ValueError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_map().ok_or(ValueError::TypeMismatch {
            expected: "map",
            actual: value.type_name(),
        })
    }
}

impl<'a> TryFrom<&'a Value> for &'a List {
    type Error = ValueError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_list().ok_or(ValueError::TypeMismatch {
            expected: "list",
            actual: value.type_name(),
        })
    }
}

// JSON bridge

impl TryFrom<serde_json::Value> for Value {
    type Error = ValueError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                Value::Int(n.as_i64().ok_or_else(|| ValueError::Unsupported {
                    reason: format!("number {n} does not fit in a 64-bit signed integer"),
                })?)
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => Value::List(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<List, _>>()?,
            ),
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| Ok((k, Value::try_from(v)?)))
                    .collect::<Result<Map, ValueError>>()?,
            ),
        })
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::from(*n),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::List(list) => list
                .iter()
                .map(serde_json::Value::try_from)
                .collect::<Result<_, _>>()?,
            Value::Map(map) => {
                if let Some((first, second)) = map.json_key_collision() {
                    return Err(ValueError::Unsupported {
                        reason: format!(
                            "keys {first:?} and {second:?} both map to the JSON object key \"{second}\""
                        ),
                    });
                }
                serde_json::Value::Object(
                    map.iter()
                        .map(|(k, v)| Ok((k.to_string(), serde_json::Value::try_from(v)?)))
                        .collect::<Result<_, ValueError>>()?,
                )
            }
        })
    }
}

// Comparisons with primitives

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(i64::from(*other))
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
