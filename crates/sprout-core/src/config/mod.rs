mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SproutError;
use defaults::*;

/// Top-level Sprout configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub reminders: RemindersConfig,
}

/// General assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Display name used in confirmations and the console header.
    #[serde(default = "default_name")]
    pub name: String,
    /// Log level when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
        }
    }
}

/// Reminder delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemindersConfig {
    /// When true the console notifier prints the full alarm banner;
    /// when false, a single line per fire.
    #[serde(default = "default_banner")]
    pub banner: bool,
}

impl Default for RemindersConfig {
    fn default() -> Self {
        Self {
            banner: default_banner(),
        }
    }
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist. Deliberately silent
/// about the fallback: callers load config before logging is initialized,
/// so they report it themselves once a subscriber is up.
pub fn load(path: &str) -> Result<Config, SproutError> {
    let path = Path::new(path);
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| SproutError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| SproutError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
