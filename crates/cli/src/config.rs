//! Command-line configuration for the demo.

use anyhow::{bail, Result};
use clap::Parser;
use propbag_core::Value;
use tracing_subscriber::EnvFilter;

/// Demonstrates a dynamic property bag against a sealed built-in object.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "propbag-demo")]
#[command(version)]
pub struct DemoConfig {
    /// Also try to set an attribute on the sealed object and print the rejection
    #[arg(long)]
    pub show_rejection: bool,

    /// Extra attribute to store, as NAME=VALUE (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub assignments: Vec<(String, Value)>,

    /// Attribute to read back after the demo (repeatable)
    #[arg(long = "get", value_name = "NAME")]
    pub reads: Vec<String>,

    /// Print the final bag as JSON
    #[arg(long)]
    pub json: bool,

    /// Log filter, e.g. `debug` or `propbag_primitives=trace` (defaults to RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl DemoConfig {
    /// Log filter: `--log-level` when given, otherwise `RUST_LOG`.
    pub fn log_filter(&self) -> Result<EnvFilter> {
        match &self.log_level {
            Some(level) => Ok(EnvFilter::try_new(level)?),
            None => Ok(EnvFilter::from_default_env()),
        }
    }
}

/// Parse `name=value`, typing the value with [`Value::parse_literal`].
pub fn parse_assignment(s: &str) -> Result<(String, Value)> {
    let Some((name, raw)) = s.split_once('=') else {
        bail!("expected NAME=VALUE, got '{}'", s);
    };
    if name.is_empty() {
        bail!("attribute name must not be empty in '{}'", s);
    }
    Ok((name.to_string(), Value::parse_literal(raw)))
}
