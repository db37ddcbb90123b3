//! Property Bag Contract Suite
//!
//! Verifies the observable contract of the public API:
//! - Write-then-read, overwrite and independence properties of PropertyBag
//! - Unset reads failing with AttributeNotFound
//! - Sealed objects rejecting undeclared writes through the same interface
//! - Shared bags staying consistent across clones and threads
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test bag_contract
//! ```

mod test_utils;

mod bag_properties;
mod sealed_contrast;
mod shared_bag;
