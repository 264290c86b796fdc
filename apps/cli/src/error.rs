//! Error types for the console session.

use dunn_core::CoreError;

use crate::config::ConfigError;

/// Console session errors.
///
/// Rejected input (unknown item, bad rating) never surfaces here; the
/// console re-prompts instead. These are the failures that end a session.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input closed while waiting for {prompt}")]
    InputClosed { prompt: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Order error: {0}")]
    Core(#[from] CoreError),

    #[error("Could not encode receipt: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;
