//! SharedPropertyBag across clones and threads

use propbag::{PropertyBag, SharedPropertyBag, Value};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn concurrent_writers_to_one_name_leave_one_of_their_values() {
    let bag = SharedPropertyBag::new();
    let barrier = Arc::new(Barrier::new(4));

    let handles: Vec<_> = (0..4i64)
        .map(|t| {
            let bag = bag.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..50 {
                    bag.set("contended", t);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let value = bag.get_as::<i64>("contended").unwrap();
    assert!((0..4).contains(&value));
    assert_eq!(bag.len(), 1);
}

#[test]
fn readers_observe_writes_from_other_threads() {
    let bag = SharedPropertyBag::from(PropertyBag::new());
    let writer = {
        let bag = bag.clone();
        thread::spawn(move || {
            bag.set("numberProperty", 42);
        })
    };
    writer.join().unwrap();

    assert_eq!(bag.get("numberProperty").unwrap(), Value::Int(42));
    assert!(bag.get("textProperty").unwrap_err().is_not_found());
}
