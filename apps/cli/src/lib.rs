//! # Dunn Delivery CLI
//!
//! Console collaborator for the delivery engine.
//!
//! ## Module Organization
//! ```text
//! dunn_cli/
//! ├── lib.rs          ◄─── You are here (logging setup, re-exports)
//! ├── config.rs       ◄─── Environment + flag configuration
//! ├── console.rs      ◄─── Prompt / re-prompt session
//! └── error.rs        ◄─── Session error type
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `DUNN_MODE` - `interactive` (default) or `demo`
//! - `DUNN_OUTPUT` - `text` (default) or `json`
//! - `DUNN_CURRENT_HOUR` - fixed order hour, skips the hour prompt
//! - `DUNN_USE_CLOCK` - `true` to take the hour from the local clock
//! - `RUST_LOG` - log filter (logs go to stderr)

pub mod config;
pub mod console;
pub mod error;

use tracing_subscriber::EnvFilter;

// Re-exports
pub use config::{CliConfig, ConfigError, OutputFormat, RunMode};
pub use console::{Console, SessionOutcome};
pub use error::{CliError, CliResult};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: warnings only, so prompts stay readable
/// - `RUST_LOG=dunn_cli=info` - session events
/// - `RUST_LOG=dunn_core=debug` - every engine operation
///
/// Logs are written to stderr so they never mix into the receipt.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
