//! Public types for the propbag API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Values and typed extraction
pub use propbag_core::{FromValue, Value, ValueKind};

// Errors
pub use propbag_core::{BagError, Result};

// Runtime attribute access
pub use propbag_core::{Attributes, SealedObject};

// Containers
pub use propbag_primitives::{PropertyBag, SharedPropertyBag};
