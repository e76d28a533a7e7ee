//! Logging settings

use serde::{Deserialize, Serialize};

/// Logging configuration (`logging:` in config.yml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level filter (e.g. "warn", "DEBUG", "tembo=trace")
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for `tembo.log`; logs go to stderr when unset
    #[serde(default)]
    pub path: Option<String>,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            path: None,
        }
    }
}

impl LoggingSettings {
    /// The level as an `EnvFilter` directive
    pub fn filter_directive(&self) -> String {
        self.level.trim().to_lowercase()
    }
}
