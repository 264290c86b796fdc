//! # Dunn Delivery
//!
//! Campus food-delivery ordering from the terminal.
//!
//! ## Usage
//! ```bash
//! # Interactive order
//! cargo run -p dunn-cli
//!
//! # Sample menu and receipt, no prompts
//! cargo run -p dunn-cli -- --demo
//!
//! # Receipt as JSON, order hour fixed at noon
//! cargo run -p dunn-cli -- --json --hour 12
//! ```

use std::io;

use anyhow::Context;
use tracing::info;

use dunn_cli::{init_tracing, CliConfig, Console};
use dunn_core::DeliveryEngine;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = CliConfig::load()
        .and_then(|config| config.apply_args(std::env::args().skip(1)))
        .context("failed to load configuration")?;
    info!(mode = ?config.mode, output = ?config.output, "Configuration loaded");

    let engine = DeliveryEngine::default();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(&engine, &config, stdin.lock(), stdout.lock());
    console.run().context("ordering session ended")?;

    info!("Session complete");
    Ok(())
}
