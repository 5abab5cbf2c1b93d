//! Key segments.
//!
//! A [`Key`] is one addressing unit inside a container: a name or an integer. Maps accept
//! either variant as a key. Lists are addressed by non-negative [`Key::Index`] values only.

use std::fmt;

use crate::{path::PathError, value::Value};

/// A single addressing unit: a map key or a list index.
///
/// Integer keys are ordinary map keys as well, so `{1: {2: 3}}` is a valid map. Looking up
/// an index in a map uses the index as a key; looking up a name in a list finds nothing.
///
/// ```
/// # use deeptree::Key;
/// assert_eq!(Key::from(3).as_index(), Some(3));
/// assert_eq!(Key::from(-1).as_index(), None);
/// assert_eq!(Key::from("name").as_index(), None);
/// assert_eq!(Key::from("name").to_string(), "name");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(untagged)]
pub enum Key {
    /// Integer key; a list position when non-negative
    Index(i64),
    /// Text key
    Name(String),
}

impl Key {
    /// Returns the key as a list position, if it is a non-negative integer.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(n) => usize::try_from(*n).ok(),
            Key::Name(_) => None,
        }
    }

    /// Returns the key as text, if it is a name.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(name) => Some(name),
            Key::Index(_) => None,
        }
    }

    /// Converts the key into the leaf value with the same content.
    pub fn to_value(&self) -> Value {
        match self {
            Key::Index(n) => Value::Int(*n),
            Key::Name(name) => Value::Text(name.clone()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(n) => write!(f, "{n}"),
            Key::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Index(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Key::Index(n.into())
    }
}

/// Positions beyond `i64::MAX` saturate; no list can hold that many entries.
impl From<usize> for Key {
    fn from(n: usize) -> Self {
        Key::Index(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl TryFrom<&Value> for Key {
    type Error = PathError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(Key::Index(*n)),
            Value::Text(name) => Ok(Key::Name(name.clone())),
            other => Err(PathError::InvalidSegment {
                segment: other.to_string(),
                reason: format!("a {} cannot be used as a key", other.type_name()),
            }),
        }
    }
}
