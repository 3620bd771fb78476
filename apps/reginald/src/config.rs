//! # Application Configuration
//!
//! Settings are layered, highest priority first:
//!
//! 1. command-line flags (`--log-level`, `--log-format`)
//! 2. environment (`REGINALD_LOG_LEVEL`, `REGINALD_LOG_FORMAT`)
//! 3. a TOML file given with `--config`
//! 4. defaults (INFO, text)
//!
//! Levels use the same string format in every layer.

use crate::cli::Cli;
use crate::error::CliError;
use reginald_core::Level;
use serde::Deserialize;
use std::path::Path;

/// Environment variable holding the minimum log level.
pub const ENV_LOG_LEVEL: &str = "REGINALD_LOG_LEVEL";

/// Environment variable selecting the log format.
pub const ENV_LOG_FORMAT: &str = "REGINALD_LOG_FORMAT";

/// Maximum config file size (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

// =============================================================================
// LOG FORMAT
// =============================================================================

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Read the environment value. `json` (any case) selects JSON output,
    /// anything else falls back to text.
    #[must_use]
    pub fn from_env_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

// =============================================================================
// LAYERS
// =============================================================================

/// One configuration source. Unset fields defer to lower layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub log_level: Option<Level>,
    pub log_format: Option<LogFormat>,
}

impl ConfigLayer {
    /// The layer set by command-line flags.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            log_level: cli.log_level,
            log_format: cli.log_format,
        }
    }

    /// Build the environment layer from a variable lookup.
    pub fn from_env<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(ENV_LOG_LEVEL) {
            Some(value) => Some(Level::parse(value.trim()).map_err(|e| {
                CliError::Config(format!("{}: {}", ENV_LOG_LEVEL, e))
            })?),
            None => None,
        };
        let log_format = lookup(ENV_LOG_FORMAT).map(|value| LogFormat::from_env_value(&value));

        Ok(Self {
            log_level,
            log_format,
        })
    }

    /// Parse a TOML config document.
    pub fn from_toml_str(text: &str) -> Result<Self, CliError> {
        toml::from_str(text).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Load the file layer.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            CliError::Io(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(CliError::Config(format!(
                "Config file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::Io(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }
}

// =============================================================================
// RESOLVED CONFIG
// =============================================================================

/// Fully resolved application settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub log_level: Level,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Merge layers given highest priority first.
    #[must_use]
    pub fn resolve(layers: &[ConfigLayer]) -> Self {
        let defaults = Self::default();
        Self {
            log_level: layers
                .iter()
                .find_map(|layer| layer.log_level)
                .unwrap_or(defaults.log_level),
            log_format: layers
                .iter()
                .find_map(|layer| layer.log_format)
                .unwrap_or(defaults.log_format),
        }
    }

    /// Resolve settings for a parsed command line from flags, the process
    /// environment and the optional config file.
    pub fn load(cli: &Cli) -> Result<Self, CliError> {
        let flags = ConfigLayer::from_cli(cli);
        let env = ConfigLayer::from_env(|key| std::env::var(key).ok())?;
        let file = match &cli.config {
            Some(path) => ConfigLayer::load(path)?,
            None => ConfigLayer::default(),
        };

        Ok(Self::resolve(&[flags, env, file]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_layer_sets_anything() {
        let config = AppConfig::resolve(&[ConfigLayer::default()]);
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn higher_layers_win_per_field() {
        let flags = ConfigLayer {
            log_level: Some(Level::DEBUG),
            log_format: None,
        };
        let file = ConfigLayer {
            log_level: Some(Level::ERROR),
            log_format: Some(LogFormat::Json),
        };

        let config = AppConfig::resolve(&[flags, file]);
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn env_layer_parses_level_strings() {
        let layer = ConfigLayer::from_env(|key| match key {
            ENV_LOG_LEVEL => Some(" warn+1 ".to_string()),
            ENV_LOG_FORMAT => Some("JSON".to_string()),
            _ => None,
        })
        .expect("env layer");

        assert_eq!(layer.log_level, Some(Level::WARN + 1));
        assert_eq!(layer.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn env_layer_rejects_bad_level() {
        let err = ConfigLayer::from_env(|key| (key == ENV_LOG_LEVEL).then(|| "loud".to_string()))
            .expect_err("bad level");
        assert!(err.to_string().contains(ENV_LOG_LEVEL));
        assert!(err.to_string().contains("unknown name"));
    }

    #[test]
    fn unknown_env_format_falls_back_to_text() {
        assert_eq!(LogFormat::from_env_value("pretty"), LogFormat::Text);
    }

    #[test]
    fn toml_layer_reads_level_and_format() {
        let layer = ConfigLayer::from_toml_str(
            r#"
            log_level = "Error-8"
            log_format = "json"
            "#,
        )
        .expect("toml");

        assert_eq!(layer.log_level, Some(Level::INFO));
        assert_eq!(layer.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn toml_layer_rejects_unknown_keys() {
        assert!(ConfigLayer::from_toml_str("verbosity = 3").is_err());
    }
}
