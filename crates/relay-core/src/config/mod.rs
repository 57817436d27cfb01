mod defaults;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::error::RelayError;
use defaults::*;

/// Top-level Relay configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub text: TextConfig,
    /// Per-channel settings keyed by channel name (e.g. "telegram").
    #[serde(default)]
    pub channel: BTreeMap<String, ChannelConfig>,
}

impl Config {
    /// Outbound segment limit for `channel`, falling back to `text.default_max_length`.
    ///
    /// Never returns 0.
    pub fn max_length_for(&self, channel: &str) -> usize {
        self.channel
            .get(channel)
            .and_then(|c| c.max_length)
            .unwrap_or(self.text.default_max_length)
            .max(1)
    }
}

/// General gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
        }
    }
}

/// Text normalization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfig {
    /// Run the base64 sniffer on inbound text.
    #[serde(default = "default_true")]
    pub decode_base64: bool,
    /// Outbound segment limit for channels without their own `max_length`.
    #[serde(default = "default_max_length")]
    pub default_max_length: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            decode_base64: true,
            default_max_length: default_max_length(),
        }
    }
}

/// Per-channel config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Maximum characters per outbound segment.
    #[serde(default)]
    pub max_length: Option<usize>,
}

/// Load configuration from a TOML file.
pub fn load(path: &str) -> Result<Config, RelayError> {
    let path = Path::new(path);
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| RelayError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| RelayError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
