//! The same dynamic writes against a bag and a sealed object

use propbag::{Attributes, BagError, PropertyBag, SealedObject, Value};

fn try_store(obj: &mut dyn Attributes, name: &str, value: Value) -> Result<Value, BagError> {
    obj.set_attr(name, value)?;
    obj.get_attr(name)
}

#[test]
fn bag_accepts_what_plain_object_rejects() {
    let mut bag = PropertyBag::new();
    let mut object = SealedObject::new("object");

    assert_eq!(
        try_store(&mut bag, "aProperty", Value::from("text")).unwrap(),
        Value::from("text")
    );

    let err = try_store(&mut object, "aProperty", Value::from("text")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "can't set attributes of built-in/extension type 'object'"
    );
    assert_eq!(err.category(), "TypeError");
}

#[test]
fn sealed_slots_behave_like_fixed_fields() {
    let mut point = SealedObject::with_slots("Point", ["x", "y"]);

    assert_eq!(try_store(&mut point, "x", Value::from(1)).unwrap(), Value::Int(1));
    assert!(matches!(
        try_store(&mut point, "z", Value::from(1)),
        Err(BagError::CannotSetAttribute { ref name, .. }) if name == "z"
    ));
    assert!(point.get_attr("z").unwrap_err().is_not_found());
}

#[test]
fn type_names_are_reported() {
    let bag = PropertyBag::new();
    let object = SealedObject::new("object");
    let objects: [&dyn Attributes; 2] = [&bag, &object];

    let names: Vec<&str> = objects.iter().map(|o| o.type_name()).collect();
    assert_eq!(names, vec!["PropertyBag", "object"]);
}
