//! The demo script: a sealed object refusing new attributes, then a
//! property bag accepting them.

use std::io::Write;

use anyhow::{Context, Result};
use propbag_core::{Attributes, SealedObject, Value};
use propbag_primitives::PropertyBag;
use tracing::info;

use crate::config::DemoConfig;

/// How the demo describes a stored value in its output
fn label(value: &Value) -> &'static str {
    match value {
        Value::Int(_) | Value::Float(_) => "number",
        Value::String(_) => "text",
        _ => "value",
    }
}

/// Write `value` under `name` through the dynamic interface and echo it back
fn store_and_print(
    obj: &mut dyn Attributes,
    name: &str,
    value: Value,
    out: &mut impl Write,
) -> Result<()> {
    obj.set_attr(name, value)?;
    let stored = obj.get_attr(name)?;
    writeln!(out, "Here the stored {}: {}", label(&stored), stored)?;
    Ok(())
}

/// Run the demo, writing console output to `out`.
///
/// Returns the bag as it stands at the end so callers can inspect it.
pub fn run(config: &DemoConfig, out: &mut impl Write) -> Result<PropertyBag> {
    let mut object = SealedObject::new("object");
    writeln!(out, "anObject created: {}", object)?;

    if config.show_rejection {
        if let Err(e) = object.set_attr("aProperty", Value::from("text")) {
            writeln!(out, "{}: {}", e.category(), e)?;
        }
    }

    let mut bag = PropertyBag::new();
    info!("property bag created");

    store_and_print(&mut bag, "numberProperty", Value::from(42), out)?;
    store_and_print(&mut bag, "numberProperty", Value::from("text"), out)?;
    store_and_print(&mut bag, "textProperty", Value::from("another text"), out)?;

    for (name, value) in &config.assignments {
        store_and_print(&mut bag, name, value.clone(), out)?;
    }

    for name in &config.reads {
        let value = bag
            .get(name)
            .with_context(|| format!("reading '{}' from the property bag", name))?;
        writeln!(out, "{} = {}", name, value)?;
    }

    if config.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&bag.to_json())?)?;
    }

    Ok(bag)
}
