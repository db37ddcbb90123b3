//! PropertyBag read/write properties

use crate::test_utils::{any_value, attribute_name};
use propbag::{BagError, PropertyBag, Value, ValueKind};
use proptest::prelude::*;

proptest! {
    #[test]
    fn write_then_read_returns_written_value(name in attribute_name(), value in any_value()) {
        let mut bag = PropertyBag::new();
        bag.set(name.clone(), value.clone());
        prop_assert_eq!(bag.get(&name).unwrap(), &value);
    }

    #[test]
    fn last_write_wins(name in attribute_name(), first in any_value(), second in any_value()) {
        let mut bag = PropertyBag::new();
        bag.set(name.clone(), first.clone());
        let previous = bag.set(name.clone(), second.clone());

        prop_assert_eq!(previous, Some(first));
        prop_assert_eq!(bag.get(&name).unwrap(), &second);
        prop_assert_eq!(bag.len(), 1);
    }

    #[test]
    fn distinct_names_do_not_interfere(
        n1 in attribute_name(),
        n2 in attribute_name(),
        v1 in any_value(),
        v2 in any_value()
    ) {
        prop_assume!(n1 != n2);
        let mut bag = PropertyBag::new();
        bag.set(n1.clone(), v1.clone());
        bag.set(n2.clone(), v2.clone());

        prop_assert_eq!(bag.get(&n1).unwrap(), &v1);
        prop_assert_eq!(bag.get(&n2).unwrap(), &v2);
    }

    #[test]
    fn unset_read_fails(name in attribute_name()) {
        let bag = PropertyBag::new();
        prop_assert_eq!(bag.get(&name).unwrap_err(), BagError::not_found(name.clone()));
    }

    #[test]
    fn reading_other_names_still_fails(name in attribute_name(), other in attribute_name(), value in any_value()) {
        prop_assume!(name != other);
        let mut bag = PropertyBag::new();
        bag.set(name, value);
        prop_assert!(bag.get(&other).unwrap_err().is_not_found());
    }
}

#[test]
fn holds_int_and_string_at_once() {
    let mut bag = PropertyBag::new();
    bag.set("numberProperty", 42);
    bag.set("textProperty", "another text");

    assert_eq!(bag.get("numberProperty").unwrap(), &Value::Int(42));
    assert_eq!(
        bag.get("textProperty").unwrap(),
        &Value::from("another text")
    );
}

#[test]
fn one_name_changes_kind_over_time() {
    let mut bag = PropertyBag::new();

    bag.set("numberProperty", 42);
    assert_eq!(bag.get("numberProperty").unwrap(), &Value::Int(42));

    bag.set("numberProperty", "text");
    assert_eq!(bag.get("numberProperty").unwrap(), &Value::from("text"));
    assert_eq!(bag.get("numberProperty").unwrap().kind(), ValueKind::String);
}

#[test]
fn removed_name_reads_as_unset() {
    let mut bag: PropertyBag = [("a", 1), ("b", 2)].into_iter().collect();
    bag.remove("a");

    assert!(bag.get("a").unwrap_err().is_not_found());
    assert_eq!(bag.get_as::<i64>("b").unwrap(), 2);
}
