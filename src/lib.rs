//! propbag: objects that store arbitrary named values
//!
//! A [`PropertyBag`] accepts reads and writes of any attribute name and
//! keeps them in a backing mapping. A [`SealedObject`] is the static
//! baseline: it only knows its declared attributes and rejects writes to
//! anything else.
//!
//! ```
//! use propbag::{Attributes, PropertyBag, SealedObject, Value};
//!
//! let mut bag = PropertyBag::new();
//! bag.set("numberProperty", 42);
//! bag.set("textProperty", "another text");
//! assert_eq!(bag.get("numberProperty").unwrap(), &Value::Int(42));
//!
//! let mut object = SealedObject::new("object");
//! assert!(object.set_attr("aProperty", Value::from("text")).is_err());
//! ```

pub mod types;

pub use types::*;
