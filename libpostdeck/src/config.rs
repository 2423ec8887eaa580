//! Configuration management for Postdeck

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::types::{PostStatus, SocialNetwork};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Location of the slot file holding the serialized collection
    #[serde(default = "default_slot_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_slot_path(),
        }
    }
}

/// Defaults applied by consuming surfaces when creating posts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_status")]
    pub status: PostStatus,
    #[serde(default)]
    pub networks: Vec<SocialNetwork>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            status: default_status(),
            networks: Vec::new(),
        }
    }
}

fn default_slot_path() -> String {
    "~/.local/share/postdeck/posts.json".to_string()
}

fn default_status() -> PostStatus {
    PostStatus::Draft
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing config file is not an error: the tool works out of the box
    /// with built-in defaults.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        Ok(config)
    }
}

/// Resolve the configuration file path following the XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("POSTDECK_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("postdeck").join("config.toml"))
}

/// Resolve the slot file path: `POSTDECK_SLOT` wins over the configured path
pub fn resolve_slot_path(configured: &str) -> String {
    match std::env::var("POSTDECK_SLOT") {
        Ok(path) if !path.is_empty() => path,
        _ => configured.to_string(),
    }
}
