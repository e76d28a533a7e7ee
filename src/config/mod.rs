//! Configuration loading and management

mod io;
mod scope;
mod settings;

pub use scope::ScopeConfig;
pub use settings::LoggingSettings;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::page::{PageError, expand_home};
use crate::{ScopeDefinition, ScopeRegistry};

/// Main configuration structure (config.yml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root directory for all pages
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Template directory (defaults to `<base_path>/.templates`)
    #[serde(default)]
    pub template_path: Option<String>,

    /// Scope definitions
    #[serde(default)]
    pub scopes: Vec<ScopeConfig>,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

fn default_base_path() -> String {
    "~/tembo".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            template_path: None,
            scopes: Vec::new(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Config {
    /// Directory templates are loaded from, with `~` expanded
    pub fn template_dir(&self) -> PathBuf {
        match &self.template_path {
            Some(path) => expand_home(path),
            None => expand_home(&self.base_path).join(".templates"),
        }
    }

    /// Validate the configured scopes and collect them into a registry
    pub fn scope_registry(&self) -> Result<ScopeRegistry, PageError> {
        let scopes = self
            .scopes
            .iter()
            .cloned()
            .map(ScopeDefinition::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        ScopeRegistry::new(scopes)
    }

    /// Override settings from environment variables.
    ///
    /// `lookup` is usually `std::env::var(..).ok()`; recognised keys are
    /// `TEMBO_BASE_PATH`, `TEMBO_TEMPLATE_PATH`, `TEMBO_LOGGING_LEVEL` and
    /// `TEMBO_LOGGING_PATH`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_path) = lookup("TEMBO_BASE_PATH") {
            self.base_path = base_path;
        }
        if let Some(template_path) = lookup("TEMBO_TEMPLATE_PATH") {
            self.template_path = Some(template_path);
        }
        if let Some(level) = lookup("TEMBO_LOGGING_LEVEL") {
            self.logging.level = level;
        }
        if let Some(path) = lookup("TEMBO_LOGGING_PATH") {
            self.logging.path = Some(path);
        }
    }
}
