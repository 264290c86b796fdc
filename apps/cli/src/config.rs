//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults; command-line flags are applied on top.

use serde::{Deserialize, Serialize};
use std::env;

use dunn_core::validation::parse_hour;

/// How the session runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Prompt for every value.
    #[default]
    Interactive,

    /// Print the sample menu and receipt without prompting.
    Demo,
}

/// How the receipt is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    pub mode: RunMode,

    pub output: OutputFormat,

    /// Fixed order hour; skips the hour prompt.
    pub current_hour: Option<u8>,

    /// Use the local clock hour instead of prompting.
    pub use_clock: bool,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match lookup("DUNN_MODE")
            .unwrap_or_else(|| "interactive".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "interactive" => RunMode::Interactive,
            "demo" => RunMode::Demo,
            _ => return Err(ConfigError::InvalidValue("DUNN_MODE".to_string())),
        };

        let output = match lookup("DUNN_OUTPUT")
            .unwrap_or_else(|| "text".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            _ => return Err(ConfigError::InvalidValue("DUNN_OUTPUT".to_string())),
        };

        let current_hour = lookup("DUNN_CURRENT_HOUR")
            .map(|raw| parse_hour(&raw))
            .transpose()
            .map_err(|_| ConfigError::InvalidValue("DUNN_CURRENT_HOUR".to_string()))?;

        let use_clock = lookup("DUNN_USE_CLOCK")
            .unwrap_or_else(|| "false".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("DUNN_USE_CLOCK".to_string()))?;

        Ok(CliConfig {
            mode,
            output,
            current_hour,
            use_clock,
        })
    }

    /// Applies command-line flags over the loaded configuration.
    ///
    /// `args` excludes the program name.
    pub fn apply_args<I, S>(mut self, args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--demo" => self.mode = RunMode::Demo,
                "--json" => self.output = OutputFormat::Json,
                "--clock" => self.use_clock = true,
                "--hour" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingRequired("--hour value".to_string()))?;
                    let hour = parse_hour(value.as_ref())
                        .map_err(|_| ConfigError::InvalidValue("--hour".to_string()))?;
                    self.current_hour = Some(hour);
                }
                other => return Err(ConfigError::UnknownFlag(other.to_string())),
            }
        }
        Ok(self)
    }
}

/// Configuration error types.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Unknown flag: {0} (expected --demo, --json, --clock, --hour N)")]
    UnknownFlag(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.mode, RunMode::Interactive);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.current_hour, None);
        assert!(!config.use_clock);
    }

    #[test]
    fn test_environment_values() {
        let config = CliConfig::from_lookup(lookup_from(&[
            ("DUNN_MODE", "Demo"),
            ("DUNN_OUTPUT", "json"),
            ("DUNN_CURRENT_HOUR", "12"),
            ("DUNN_USE_CLOCK", "true"),
        ]))
        .unwrap();

        assert_eq!(config.mode, RunMode::Demo);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.current_hour, Some(12));
        assert!(config.use_clock);
    }

    #[test]
    fn test_invalid_environment_values() {
        assert_eq!(
            CliConfig::from_lookup(lookup_from(&[("DUNN_MODE", "batch")])),
            Err(ConfigError::InvalidValue("DUNN_MODE".to_string()))
        );
        assert_eq!(
            CliConfig::from_lookup(lookup_from(&[("DUNN_OUTPUT", "xml")])),
            Err(ConfigError::InvalidValue("DUNN_OUTPUT".to_string()))
        );
        assert_eq!(
            CliConfig::from_lookup(lookup_from(&[("DUNN_CURRENT_HOUR", "25")])),
            Err(ConfigError::InvalidValue("DUNN_CURRENT_HOUR".to_string()))
        );
        assert_eq!(
            CliConfig::from_lookup(lookup_from(&[("DUNN_USE_CLOCK", "sometimes")])),
            Err(ConfigError::InvalidValue("DUNN_USE_CLOCK".to_string()))
        );
    }

    #[test]
    fn test_flags_override_environment() {
        let config = CliConfig::from_lookup(lookup_from(&[("DUNN_CURRENT_HOUR", "8")]))
            .unwrap()
            .apply_args(["--demo", "--json", "--hour", "13", "--clock"])
            .unwrap();

        assert_eq!(config.mode, RunMode::Demo);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.current_hour, Some(13));
        assert!(config.use_clock);
    }

    #[test]
    fn test_bad_flags() {
        assert_eq!(
            CliConfig::default().apply_args(["--hour"]),
            Err(ConfigError::MissingRequired("--hour value".to_string()))
        );
        assert_eq!(
            CliConfig::default().apply_args(["--hour", "noon"]),
            Err(ConfigError::InvalidValue("--hour".to_string()))
        );
        assert_eq!(
            CliConfig::default().apply_args(["--verbose"]),
            Err(ConfigError::UnknownFlag("--verbose".to_string()))
        );
    }
}
