//!
//! deeptree: deep traversal, comparison and rebuilding of nested data.
//! This library treats any nesting of ordered maps and lists as one flat collection of
//! leaf values addressed by composite path keys.
//!
//! ## Core Concepts
//!
//! * **Keys (`key::Key`)**: A single addressing unit, either an integer index or a name.
//! * **Path keys (`path::PathKey`)**: A right-nested chain of keys addressing one leaf inside
//!   nested containers. Converts losslessly to and from a flat list of keys.
//! * **Values (`value::Value`)**: Leaves (null, bool, int, text) and branches (`Map`, `List`).
//! * **Containers (`container::Container`)**: The capability shared by [`Map`] and [`List`]
//!   that every deep operation is written against.
//! * **Deep operations (`deep::DeepEnumerable`)**: Traversal, path access, structural
//!   combinators (diff, outersect, intersect, zip) and filter/map combinators. Implemented
//!   for every container.
//!
//! ```
//! use deeptree::{DeepEnumerable, Map, Value, path};
//!
//! let mut doc = Map::new();
//! doc.deep_set(&path!["user", "name"], Value::from("Alice"));
//! doc.deep_set(&path!["user", "age"], Value::from(30));
//!
//! assert_eq!(doc.deep_get(&path!["user", "name"]), Some(&Value::from("Alice")));
//! assert_eq!(doc.deep_values().len(), 2);
//! ```

pub mod container;
pub mod deep;
pub mod key;
pub mod list;
pub mod map;
pub mod path;
pub mod value;

pub use container::{Container, ContainerKind, Intermediate};
pub use deep::{DeepEnumerable, LeafPair};
pub use key::Key;
pub use list::List;
pub use map::Map;
pub use path::{PathError, PathKey};
pub use value::{Value, ValueError};

/// Result type used throughout the deeptree library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the deeptree library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured path errors from the path module
    #[error(transparent)]
    Path(#[from] PathError),

    /// Structured value errors from the value module
    #[error(transparent)]
    Value(#[from] ValueError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::Path(_) => "path",
            Error::Value(_) => "value",
        }
    }

    /// Check if this error was caused by a malformed path key.
    pub fn is_path_error(&self) -> bool {
        matches!(self, Error::Path(_))
    }

    /// Check if this error is a value type mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error happened while encoding or decoding JSON.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Serialize(_) => true,
            Error::Value(value_err) => value_err.is_unsupported(),
            _ => false,
        }
    }
}
