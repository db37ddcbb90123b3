//! propbag demo - console walkthrough of dynamic attributes
//!
//! Usage:
//!   propbag-demo                        - Run the default walkthrough
//!   propbag-demo --show-rejection       - Include the sealed object's TypeError
//!   propbag-demo --set k=v --get k      - Store and read extra attributes
//!   propbag-demo --json                 - Dump the final bag as JSON

mod config;
mod demo;

use clap::Parser;

use crate::config::DemoConfig;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter()?)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    demo::run(&config, &mut stdout.lock())?;
    Ok(())
}
