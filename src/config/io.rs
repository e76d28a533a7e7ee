//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Config;
use crate::page::expand_home;

/// Environment variable pointing at the config directory
pub const CONFIG_DIR_ENV: &str = "TEMBO_CONFIG";

const CONFIG_FILE: &str = "config.yml";

impl Config {
    /// Get the config directory ($TEMBO_CONFIG or ~/tembo/.config)
    pub fn config_dir() -> PathBuf {
        match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => expand_home(&dir),
            _ => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("tembo")
                .join(".config"),
        }
    }

    /// Get the config file path inside a config directory
    pub fn config_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Parse configuration from YAML.
    ///
    /// Settings may sit at the top level or under a `tembo:` key. An empty
    /// document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let document: serde_yaml::Value =
            serde_yaml::from_str(content).with_context(|| "Failed to parse config YAML")?;

        let settings = match document.get("tembo") {
            Some(inner) => inner.clone(),
            None => document,
        };
        if settings.is_null() {
            return Ok(Self::default());
        }

        serde_yaml::from_value(settings).with_context(|| "Invalid tembo configuration")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Load configuration and apply environment overrides.
    ///
    /// A missing file is not an error: defaults are used and no scopes are
    /// defined.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }
}
