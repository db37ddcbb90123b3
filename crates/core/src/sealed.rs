//! Sealed objects: the static-attribute baseline
//!
//! A SealedObject has a fixed set of declared attribute slots chosen at
//! construction. Declared slots can be read and overwritten; writing any
//! other name is rejected with `BagError::CannotSetAttribute`, the way a
//! built-in type refuses new attributes.

use crate::error::{BagError, Result};
use crate::traits::Attributes;
use crate::value::Value;
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// Object with a fixed, declared attribute set
///
/// # Example
///
/// ```
/// use propbag_core::{Attributes, BagError, SealedObject, Value};
///
/// let mut point = SealedObject::with_slots("Point", ["x", "y"]);
/// point.set_attr("x", Value::from(3)).unwrap();
///
/// let err = point.set_attr("z", Value::from(1)).unwrap_err();
/// assert!(matches!(err, BagError::CannotSetAttribute { .. }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SealedObject {
    type_name: String,
    /// Declared slots, initialised to `Value::Null`
    slots: BTreeMap<String, Value>,
}

impl SealedObject {
    /// Create an object with no declared attributes
    ///
    /// Every write fails. This models a plain built-in `object`.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            slots: BTreeMap::new(),
        }
    }

    /// Create an object declaring the given slots
    pub fn with_slots<I, S>(type_name: impl Into<String>, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            type_name: type_name.into(),
            slots: slots.into_iter().map(|s| (s.into(), Value::Null)).collect(),
        }
    }

    /// Declared slot names, sorted
    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// True if `name` is a declared slot
    pub fn declares(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }
}

impl Attributes for SealedObject {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn get_attr(&self, name: &str) -> Result<Value> {
        self.slots
            .get(name)
            .cloned()
            .ok_or_else(|| BagError::not_found(name))
    }

    fn set_attr(&mut self, name: &str, value: Value) -> Result<()> {
        match self.slots.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => {
                warn!(
                    type_name = %self.type_name,
                    attribute = name,
                    "rejected write to undeclared attribute"
                );
                Err(BagError::CannotSetAttribute {
                    type_name: self.type_name.clone(),
                    name: name.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for SealedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<type '{}'>", self.type_name)
    }
}
