//! Recursive property exclusion for JSON output.
//!
//! A [`PropertyReducer`] drops every object member whose key is excluded, at any
//! depth, and leaves everything else alone. Arrays keep their length and order;
//! objects inside arrays are filtered like any other object.
//!
//! Typical use is stripping server-managed fields (ids, timestamps) before
//! diffing or printing a resource:
//!
//! ```
//! use deploykit::reducer::PropertyReducer;
//! use serde_json::json;
//!
//! let reducer = PropertyReducer::new(["client_id", "updated_at"]);
//! let remote = json!({
//!     "name": "app",
//!     "client_id": "abc",
//!     "grants": [{ "client_id": "abc", "scope": "read" }]
//! });
//!
//! assert_eq!(
//!     reducer.reduce(&remote),
//!     json!({ "name": "app", "grants": [{ "scope": "read" }] })
//! );
//! ```

use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::{DeployError, Result};

/// Property names to exclude: none, a single name, or a set of names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Exclusions {
    /// Exclude nothing; the reducer is the identity.
    #[default]
    None,
    /// Exclude one property name.
    One(String),
    /// Exclude every name in the set.
    Many(HashSet<String>),
}

impl From<&str> for Exclusions {
    fn from(name: &str) -> Self {
        Self::One(name.to_string())
    }
}

impl From<String> for Exclusions {
    fn from(name: String) -> Self {
        Self::One(name)
    }
}

impl From<Option<&str>> for Exclusions {
    fn from(name: Option<&str>) -> Self {
        name.map_or(Self::None, Self::from)
    }
}

impl<S: Into<String>> From<Vec<S>> for Exclusions {
    fn from(names: Vec<S>) -> Self {
        Self::Many(names.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Exclusions {
    fn from(names: [S; N]) -> Self {
        Self::Many(names.into_iter().map(Into::into).collect())
    }
}

impl From<HashSet<String>> for Exclusions {
    fn from(names: HashSet<String>) -> Self {
        Self::Many(names)
    }
}

/// Filter that removes excluded keys at every nesting depth.
#[derive(Debug, Clone, Default)]
pub struct PropertyReducer {
    excluded: HashSet<String>,
}

impl PropertyReducer {
    /// Build a reducer for the given exclusions.
    pub fn new(exclusions: impl Into<Exclusions>) -> Self {
        let excluded = match exclusions.into() {
            Exclusions::None => HashSet::new(),
            Exclusions::One(name) => HashSet::from([name]),
            Exclusions::Many(names) => names,
        };
        Self {
            excluded,
        }
    }

    /// A reducer that removes nothing.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded.contains(key)
    }

    /// Visit one key/value pair of an object.
    ///
    /// Returns `None` when the pair must be omitted, otherwise the filtered value.
    #[must_use]
    pub fn visit(&self, key: &str, value: &Value) -> Option<Value> {
        if self.is_excluded(key) {
            return None;
        }
        Some(self.reduce(value))
    }

    /// Return a filtered copy of `value`.
    #[must_use]
    pub fn reduce(&self, value: &Value) -> Value {
        if self.excluded.is_empty() {
            return value.clone();
        }

        match value {
            Value::Object(members) => {
                let mut kept = Map::with_capacity(members.len());
                for (key, member) in members {
                    if let Some(filtered) = self.visit(key, member) {
                        kept.insert(key.clone(), filtered);
                    }
                }
                Value::Object(kept)
            }
            Value::Array(items) => Value::Array(items.iter().map(|item| self.reduce(item)).collect()),
            scalar => scalar.clone(),
        }
    }

    /// Serialize `data` to compact JSON with excluded properties removed.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::Other`] if `data` cannot be represented as JSON
    /// (for example a map with non-string keys).
    pub fn to_json_string<T>(&self, data: &T) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(data).map_err(|e| DeployError::Other {
            message: format!("Failed to serialize value for filtering: {e}"),
        })?;
        Ok(self.reduce(&value).to_string())
    }
}

/// Shorthand for [`PropertyReducer::new`].
pub fn property_reducer(exclusions: impl Into<Exclusions>) -> PropertyReducer {
    PropertyReducer::new(exclusions)
}
