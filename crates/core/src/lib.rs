//! Core types for propbag
//!
//! This crate defines the pieces shared by every attribute container:
//! - Value: Dynamically-typed attribute value
//! - BagError: Attribute access errors
//! - Attributes: Runtime member access by name
//! - SealedObject: Fixed-member object that rejects unknown writes

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod sealed;
pub mod traits;
pub mod value;

pub use error::{BagError, Result};
pub use sealed::SealedObject;
pub use traits::Attributes;
pub use value::{FromValue, Value, ValueKind};
