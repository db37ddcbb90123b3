//! Error types for attribute access
//!
//! Reads of unknown names and writes rejected by a sealed object are the
//! only failures. Writes to a property bag never fail.

use crate::value::ValueKind;
use thiserror::Error;

/// Result type alias for attribute operations
pub type Result<T> = std::result::Result<T, BagError>;

/// Attribute access error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BagError {
    /// The name has never been set (or was removed)
    #[error("attribute '{name}' not found")]
    AttributeNotFound {
        /// Requested attribute name
        name: String,
    },

    /// A typed read found a value of another kind
    #[error("attribute '{name}' holds {actual}, expected {expected}")]
    WrongType {
        /// Requested attribute name
        name: String,
        /// Kind the caller asked for
        expected: ValueKind,
        /// Kind actually stored
        actual: ValueKind,
    },

    /// Write of an undeclared attribute on a sealed object
    #[error("can't set attributes of built-in/extension type '{type_name}'")]
    CannotSetAttribute {
        /// Type name of the rejecting object
        type_name: String,
        /// Attribute the caller tried to set
        name: String,
    },
}

impl BagError {
    /// Shorthand for `AttributeNotFound`
    pub fn not_found(name: impl Into<String>) -> Self {
        BagError::AttributeNotFound { name: name.into() }
    }

    /// True for `AttributeNotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, BagError::AttributeNotFound { .. })
    }

    /// Name of the attribute the failed operation addressed
    pub fn attribute(&self) -> &str {
        match self {
            BagError::AttributeNotFound { name }
            | BagError::WrongType { name, .. }
            | BagError::CannotSetAttribute { name, .. } => name,
        }
    }

    /// Error category, mirroring the exception a dynamic language would raise
    pub fn category(&self) -> &'static str {
        match self {
            BagError::AttributeNotFound { .. } => "AttributeError",
            BagError::WrongType { .. } | BagError::CannotSetAttribute { .. } => "TypeError",
        }
    }
}
