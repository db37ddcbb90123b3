//! Shared strategies for the contract suite

use propbag::Value;
use proptest::prelude::*;

/// Attribute names, including the empty name and non-ASCII names
pub fn attribute_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z_][a-zA-Z0-9_]{0,12}",
        "\\PC{1,8}",
    ]
}

/// Scalar values of every kind a bag commonly holds
///
/// Floats are finite so that equality checks hold.
pub fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e12f64..1.0e12).prop_map(Value::Float),
        ".{0,16}".prop_map(Value::String),
    ]
}

/// Scalars plus shallow arrays of scalars
pub fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => scalar_value(),
        1 => prop::collection::vec(scalar_value(), 0..4).prop_map(Value::Array),
    ]
}
