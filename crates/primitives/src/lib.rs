//! Primitives layer for propbag
//!
//! This crate implements the attribute containers:
//! - PropertyBag: Open attribute semantics over an owned mapping
//! - SharedPropertyBag: Lock-protected bag shared between threads

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bag;
pub mod shared;

pub use bag::PropertyBag;
pub use shared::SharedPropertyBag;
