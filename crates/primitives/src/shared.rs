//! Thread-safe property bag
//!
//! SharedPropertyBag puts a [`PropertyBag`] behind an `Arc<RwLock<_>>`.
//! Clones are cheap and share one mapping; every get and set takes the
//! lock for the duration of the call only.
//!
//! Reads return owned clones because a borrow cannot outlive the guard.

use crate::bag::PropertyBag;
use parking_lot::RwLock;
use propbag_core::{Attributes, FromValue, Result, Value};
use std::sync::Arc;

/// Clonable handle to a lock-protected property bag
///
/// # Thread Safety
///
/// SharedPropertyBag is Clone and Send + Sync. All clones observe the same
/// attributes.
#[derive(Debug, Clone, Default)]
pub struct SharedPropertyBag {
    inner: Arc<RwLock<PropertyBag>>,
}

impl SharedPropertyBag {
    /// Create an empty shared bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing bag
    pub fn from_bag(bag: PropertyBag) -> Self {
        Self {
            inner: Arc::new(RwLock::new(bag)),
        }
    }

    /// Clone out the value stored under `name`
    ///
    /// # Errors
    ///
    /// `BagError::AttributeNotFound` if `name` was never set.
    pub fn get(&self, name: &str) -> Result<Value> {
        self.inner.read().get(name).cloned()
    }

    /// Clone out the value under `name`, or `None` if it was never set
    pub fn try_get(&self, name: &str) -> Option<Value> {
        self.inner.read().try_get(name).cloned()
    }

    /// Typed read, see [`PropertyBag::get_as`]
    pub fn get_as<T: FromValue>(&self, name: &str) -> Result<T> {
        self.inner.read().get_as(name)
    }

    /// Store `value` under `name`, returning the previous value
    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner.write().set(name, value)
    }

    /// Remove `name`, returning its value if it was set
    pub fn remove(&self, name: &str) -> Option<Value> {
        self.inner.write().remove(name)
    }

    /// Check if `name` is set
    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().contains(name)
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if no attribute is set
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Run `f` against the bag under a single read lock
    pub fn with_read<R>(&self, f: impl FnOnce(&PropertyBag) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` against the bag under a single write lock
    pub fn with_write<R>(&self, f: impl FnOnce(&mut PropertyBag) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Owned copy of the current attributes
    pub fn snapshot(&self) -> PropertyBag {
        self.inner.read().clone()
    }
}

impl From<PropertyBag> for SharedPropertyBag {
    fn from(bag: PropertyBag) -> Self {
        Self::from_bag(bag)
    }
}

impl Attributes for SharedPropertyBag {
    fn type_name(&self) -> &str {
        "SharedPropertyBag"
    }

    fn get_attr(&self, name: &str) -> Result<Value> {
        self.get(name)
    }

    fn set_attr(&mut self, name: &str, value: Value) -> Result<()> {
        self.set(name, value);
        Ok(())
    }
}
