//! Scope configuration types

use serde::{Deserialize, Serialize};

use crate::ScopeDefinition;
use crate::page::PageError;

/// A scope entry as written in config.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeConfig {
    /// Name used on the command line (`tembo new <name>`)
    pub name: String,

    /// Directory pattern relative to the base path
    pub path: String,

    /// Filename pattern
    pub filename: String,

    /// File extension (a leading dot is allowed)
    pub extension: String,

    /// Template file inside the template directory
    #[serde(default)]
    pub template_filename: Option<String>,

    /// Example command shown with `--example` and on input errors
    #[serde(default)]
    pub example: Option<String>,
}

impl TryFrom<ScopeConfig> for ScopeDefinition {
    type Error = PageError;

    fn try_from(config: ScopeConfig) -> Result<Self, Self::Error> {
        ScopeDefinition::new(
            config.name,
            config.path,
            config.filename,
            config.extension,
            config.template_filename,
            config.example,
        )
    }
}
