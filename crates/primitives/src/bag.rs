//! Property bag primitive
//!
//! An object that accepts any attribute name. Reads and writes of names
//! that were never declared are redirected into a backing mapping keyed by
//! name.
//!
//! # Design
//!
//! PropertyBag exclusively owns its mapping. Reads hand out shared borrows,
//! writes need `&mut self`, so no other handle can alias the entries. Use
//! [`SharedPropertyBag`](crate::SharedPropertyBag) when several threads need
//! the same bag.
//!
//! A name has no fixed type. `set` overwrites whatever was stored, so a name
//! may hold an integer and later a string.
//!
//! Reading a name that was never set fails with
//! `BagError::AttributeNotFound`. `try_get` is the sentinel-returning
//! variant.
//!
//! # Example
//!
//! ```
//! use propbag_primitives::PropertyBag;
//!
//! let mut bag = PropertyBag::new();
//!
//! bag.set("numberProperty", 42);
//! assert_eq!(bag.get("numberProperty")?.as_int(), Some(42));
//!
//! bag.set("numberProperty", "text");
//! assert_eq!(bag.get("numberProperty")?.as_str(), Some("text"));
//!
//! assert!(bag.get("missing").is_err());
//! # Ok::<(), propbag_core::BagError>(())
//! ```

use propbag_core::{Attributes, BagError, FromValue, Result, Value};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Open-attribute object backed by a name → value mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag {
    /// Backing mapping, owned by this bag only
    attributes: FxHashMap<String, Value>,
}

impl PropertyBag {
    /// Create an empty property bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bag with room for `capacity` attributes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            attributes: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Get the value stored under `name`
    ///
    /// # Errors
    ///
    /// `BagError::AttributeNotFound` if `name` was never set.
    pub fn get(&self, name: &str) -> Result<&Value> {
        match self.attributes.get(name) {
            Some(value) => {
                trace!(attribute = name, kind = %value.kind(), "attribute read");
                Ok(value)
            }
            None => {
                trace!(attribute = name, "attribute miss");
                Err(BagError::not_found(name))
            }
        }
    }

    /// Get the value stored under `name`, or `None` if it was never set
    pub fn try_get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Get the value under `name` extracted as `T`
    ///
    /// # Errors
    ///
    /// `AttributeNotFound` if `name` was never set, `WrongType` if the
    /// stored value has a kind `T` cannot be read from.
    pub fn get_as<T: FromValue>(&self, name: &str) -> Result<T> {
        let value = self.get(name)?;
        T::from_value(value).ok_or_else(|| BagError::WrongType {
            name: name.to_string(),
            expected: T::KIND,
            actual: value.kind(),
        })
    }

    /// Store `value` under `name`
    ///
    /// Inserts a new attribute or overwrites an existing one regardless of
    /// the kind previously stored. Never fails.
    ///
    /// # Returns
    ///
    /// The value previously stored under `name`, if any
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        debug!(attribute = %name, kind = %value.kind(), "attribute write");
        self.attributes.insert(name, value)
    }

    /// Remove `name`, returning its value if it was set
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let removed = self.attributes.remove(name);
        if removed.is_some() {
            debug!(attribute = name, "attribute removed");
        }
        removed
    }

    /// Remove every attribute
    pub fn clear(&mut self) {
        self.attributes.clear();
    }

    /// Check if `name` is set
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check if no attribute is set
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Attribute names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.attributes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate over `(name, value)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render the bag as a JSON object with sorted keys
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .names()
            .into_iter()
            .map(|name| (name.to_string(), self.attributes[name].clone().into()))
            .collect();
        serde_json::Value::Object(map)
    }
}

impl Attributes for PropertyBag {
    fn type_name(&self) -> &str {
        "PropertyBag"
    }

    fn get_attr(&self, name: &str) -> Result<Value> {
        self.get(name).cloned()
    }

    fn set_attr(&mut self, name: &str, value: Value) -> Result<()> {
        self.set(name, value);
        Ok(())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = PropertyBag::new();
        bag.extend(iter);
        bag
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for PropertyBag {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}
