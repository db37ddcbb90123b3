//! Attribute access trait
//!
//! Every object whose members are resolved at call time implements
//! [`Attributes`]. Callers holding a `&mut dyn Attributes` do not know
//! whether the object accepts arbitrary names (a property bag) or only its
//! declared ones (a sealed object).

use crate::error::Result;
use crate::value::Value;

/// Runtime member access by name
pub trait Attributes {
    /// Name of the object's type, used in error messages and display
    fn type_name(&self) -> &str;

    /// Read the attribute `name`
    ///
    /// # Errors
    ///
    /// `BagError::AttributeNotFound` when the object has no such attribute.
    fn get_attr(&self, name: &str) -> Result<Value>;

    /// Write the attribute `name`
    ///
    /// # Errors
    ///
    /// Implementations with a fixed member set return
    /// `BagError::CannotSetAttribute` for undeclared names.
    fn set_attr(&mut self, name: &str, value: Value) -> Result<()>;

    /// Check whether `name` currently resolves
    fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_ok()
    }
}
