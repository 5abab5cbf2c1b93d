//! Path keys for addressing leaves inside nested containers.
//!
//! A [`PathKey`] is a right-nested chain of [`Key`]s: `Composite(head, tail)` links ending in
//! a bare `Leaf`. It has two equivalent surface forms, both accepted wherever a path is read:
//!
//! - the flat list `[s0, s1, ..., sn]` ([`PathKey::from_path`] / [`PathKey::to_path`]);
//! - the composite mapping `{s0: {s1: ... sn}}` ([`PathKey::to_value`] /
//!   `PathKey::try_from(&Value)`).
//!
//! # Usage
//!
//! ```rust
//! use deeptree::{Key, PathKey, path};
//! use std::str::FromStr;
//!
//! let key = PathKey::from_path(["events", "title"])?;
//! assert_eq!(key, path!["events", "title"]);
//! assert_eq!(key.leaf_segment(), &Key::from("title"));
//!
//! // Dot notation; all-digit segments are indexes
//! let key = PathKey::from_str("events.3.title")?;
//! assert_eq!(key.to_path(), vec![Key::from("events"), Key::from(3), Key::from("title")]);
//! assert_eq!(key.to_string(), "events.3.title");
//! # Ok::<(), deeptree::PathError>(())
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{key::Key, map::Map, value::Value};

/// Error type for malformed path keys.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// A path key needs at least one segment.
    #[error("Empty path: a path key needs at least one segment")]
    Empty,

    /// A segment could not be turned into a key.
    #[error("Invalid segment '{segment}': {reason}")]
    InvalidSegment { segment: String, reason: String },
}

impl PathError {
    /// Check if this error was caused by an empty segment list.
    pub fn is_empty_path(&self) -> bool {
        matches!(self, PathError::Empty)
    }
}

/// Address of a single leaf inside nested containers.
///
/// A one-level address is a bare `Leaf`; deeper addresses chain `Composite` links, the last
/// of which holds a `Leaf`. The chain is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathKey {
    /// Final segment of a path
    Leaf(Key),
    /// One segment followed by the rest of the path
    Composite(Key, Box<PathKey>),
}

impl PathKey {
    /// Creates a one-segment path key.
    pub fn leaf(key: impl Into<Key>) -> Self {
        PathKey::Leaf(key.into())
    }

    /// Builds a path key from a flat list of segments.
    ///
    /// # Errors
    /// Returns [`PathError::Empty`] when `segments` yields nothing.
    pub fn from_path<I, K>(segments: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let mut segments: Vec<Key> = segments.into_iter().map(Into::into).collect();
        let leaf = segments.pop().ok_or(PathError::Empty)?;
        Ok(Self::from_parts(&segments, leaf))
    }

    /// Builds a path key from its first segment and the remaining ones.
    ///
    /// Infallible counterpart of [`PathKey::from_path`], used by the [`path!`](crate::path)
    /// macro.
    pub fn from_nonempty(first: Key, rest: Vec<Key>) -> Self {
        match rest.split_last() {
            None => PathKey::Leaf(first),
            Some((leaf, middle)) => {
                let tail = Self::from_parts(middle, leaf.clone());
                PathKey::Composite(first, Box::new(tail))
            }
        }
    }

    /// Builds the path key for `leaf` reached through `ancestry`.
    pub fn from_parts(ancestry: &[Key], leaf: Key) -> Self {
        ancestry
            .iter()
            .rev()
            .fold(PathKey::Leaf(leaf), |tail, head| {
                PathKey::Composite(head.clone(), Box::new(tail))
            })
    }

    /// Returns an iterator over the segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &Key> {
        std::iter::successors(Some(self), |key| key.tail()).map(PathKey::head)
    }

    /// Flattens the path key into its list of segments.
    pub fn to_path(&self) -> Vec<Key> {
        self.segments().cloned().collect()
    }

    /// Returns the first segment.
    pub fn head(&self) -> &Key {
        match self {
            PathKey::Leaf(key) | PathKey::Composite(key, _) => key,
        }
    }

    /// Returns everything after the first segment, or `None` for a one-level key.
    pub fn tail(&self) -> Option<&PathKey> {
        match self {
            PathKey::Leaf(_) => None,
            PathKey::Composite(_, tail) => Some(tail),
        }
    }

    /// Splits the key into its first segment and the rest.
    pub fn split(&self) -> (&Key, Option<&PathKey>) {
        (self.head(), self.tail())
    }

    /// Returns the final segment.
    pub fn leaf_segment(&self) -> &Key {
        let mut current = self;
        while let PathKey::Composite(_, tail) = current {
            current = tail;
        }
        current.head()
    }

    /// Returns the number of segments. Always at least one.
    pub fn len(&self) -> usize {
        self.segments().count()
    }

    /// Returns `true` if the key addresses a single level.
    pub fn is_leaf(&self) -> bool {
        matches!(self, PathKey::Leaf(_))
    }

    /// Returns a new key with `key` appended as the final segment.
    pub fn join(&self, key: impl Into<Key>) -> PathKey {
        let mut segments = self.to_path();
        let leaf = key.into();
        let first = segments.remove(0);
        segments.push(leaf);
        Self::from_nonempty(first, segments)
    }

    /// Renders the composite mapping form: `{s0: {s1: ... sn}}`, a bare scalar for one level.
    ///
    /// ```
    /// # use deeptree::{Value, path};
    /// let key = path!["a", "c", "d"];
    /// assert_eq!(key.to_value().to_string(), r#"{"a":{"c":"d"}}"#);
    /// assert_eq!(path!["g"].to_value(), Value::from("g"));
    /// ```
    pub fn to_value(&self) -> Value {
        match self {
            PathKey::Leaf(key) => key.to_value(),
            PathKey::Composite(head, tail) => {
                let mut map = Map::new();
                map.insert(head.clone(), tail.to_value());
                Value::Map(map)
            }
        }
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Parses dot notation. Empty components are dropped and all-digit components become
/// [`Key::Index`] segments.
impl FromStr for PathKey {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = s
            .split('.')
            .filter(|component| !component.is_empty())
            .map(|component| {
                if component.bytes().all(|b| b.is_ascii_digit()) {
                    component
                        .parse::<i64>()
                        .map(Key::Index)
                        .map_err(|e| PathError::InvalidSegment {
                            segment: component.to_string(),
                            reason: e.to_string(),
                        })
                } else {
                    Ok(Key::Name(component.to_string()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_path(segments)
    }
}

impl From<Key> for PathKey {
    fn from(key: Key) -> Self {
        PathKey::Leaf(key)
    }
}

impl From<&str> for PathKey {
    fn from(name: &str) -> Self {
        PathKey::leaf(name)
    }
}

impl From<String> for PathKey {
    fn from(name: String) -> Self {
        PathKey::leaf(name)
    }
}

impl From<i64> for PathKey {
    fn from(n: i64) -> Self {
        PathKey::leaf(n)
    }
}

impl From<usize> for PathKey {
    fn from(n: usize) -> Self {
        PathKey::leaf(n)
    }
}

/// Accepts either surface form: a flat list of scalars, a chain of single-entry maps, or a
/// bare scalar for a one-level key. The two forms do not mix.
impl TryFrom<&Value> for PathKey {
    type Error = PathError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(list) => {
                let segments = list
                    .iter()
                    .map(Key::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Self::from_path(segments)
            }
            other => composite_from_value(other),
        }
    }
}

/// Parses the composite mapping form, where every level below the first is again a
/// single-entry map or a scalar.
fn composite_from_value(value: &Value) -> Result<PathKey, PathError> {
    match value {
        Value::Map(map) => {
            let mut entries = map.iter();
            match (entries.next(), entries.next()) {
                (Some((head, tail)), None) => Ok(PathKey::Composite(
                    head.clone(),
                    Box::new(composite_from_value(tail)?),
                )),
                (None, _) => Err(PathError::Empty),
                (Some(_), Some(_)) => Err(PathError::InvalidSegment {
                    segment: value.to_string(),
                    reason: "a composite key level must hold exactly one entry".to_string(),
                }),
            }
        }
        Value::List(_) => Err(PathError::InvalidSegment {
            segment: value.to_string(),
            reason: "a composite key level cannot hold a list".to_string(),
        }),
        scalar => Key::try_from(scalar).map(PathKey::Leaf),
    }
}

/// Constructs a [`PathKey`] from one or more segments.
///
/// Every argument goes through `Key::from`, so string slices, `String`s and integers can be
/// mixed freely.
///
/// ```rust
/// # use deeptree::{Key, PathKey, path};
/// let key = path!["events", 3, "title"];
/// assert_eq!(key.len(), 3);
/// assert_eq!(key.leaf_segment(), &Key::from("title"));
/// assert_eq!(path!["g"], PathKey::leaf("g"));
/// ```
#[macro_export]
macro_rules! path {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let rest: ::std::vec::Vec<$crate::Key> = ::std::vec![$($crate::Key::from($rest)),*];
        $crate::PathKey::from_nonempty($crate::Key::from($first), rest)
    }};
}
