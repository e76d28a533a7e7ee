use std::collections::BTreeSet;

use crate::page::{PageError, Token, tokenize};

/// A named category of notes with its own path, filename and template rules
///
/// Built once from configuration and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeDefinition {
    /// Unique scope name, used on the command line
    pub name: String,

    /// Directory pattern, relative to the base path
    pub path_pattern: String,

    /// Filename pattern, without extension
    pub filename_pattern: String,

    /// File extension without the leading dot
    pub extension: String,

    /// Template file backing the page body, if any
    pub template_name: Option<String>,

    /// Example command shown to the user
    pub example: Option<String>,
}

impl ScopeDefinition {
    /// Create a scope definition, checking its input tokens.
    ///
    /// Input indices referenced across the path and filename patterns must be
    /// contiguous from zero: `{input1}` requires `{input0}`.
    pub fn new(
        name: impl Into<String>,
        path_pattern: impl Into<String>,
        filename_pattern: impl Into<String>,
        extension: impl Into<String>,
        template_name: Option<String>,
        example: Option<String>,
    ) -> Result<Self, PageError> {
        let extension: String = extension.into();
        let scope = Self {
            name: name.into(),
            path_pattern: path_pattern.into(),
            filename_pattern: filename_pattern.into(),
            extension: extension.trim_start_matches('.').to_string(),
            template_name,
            example,
        };
        scope.check_input_indices()?;
        Ok(scope)
    }

    fn check_input_indices(&self) -> Result<(), PageError> {
        let indices: BTreeSet<usize> = [&self.path_pattern, &self.filename_pattern]
            .into_iter()
            .flat_map(|pattern| tokenize(pattern))
            .filter_map(|token| match token {
                Token::Input(index) => Some(index),
                _ => None,
            })
            .collect();

        if let Some(missing) = (0..indices.len()).find(|i| !indices.contains(i)) {
            return Err(PageError::InvalidScope {
                name: self.name.clone(),
                reason: format!(
                    "{{input{}}} is used but {{input{}}} is not",
                    indices.iter().next_back().copied().unwrap_or(missing),
                    missing
                ),
            });
        }
        Ok(())
    }
}

/// All scopes known to the configuration, in declaration order
#[derive(Debug, Clone, Default)]
pub struct ScopeRegistry {
    scopes: Vec<ScopeDefinition>,
}

impl ScopeRegistry {
    /// Build a registry, rejecting duplicate scope names.
    pub fn new(scopes: Vec<ScopeDefinition>) -> Result<Self, PageError> {
        let mut seen = BTreeSet::new();
        for scope in &scopes {
            if !seen.insert(scope.name.as_str()) {
                return Err(PageError::InvalidScope {
                    name: scope.name.clone(),
                    reason: "defined more than once in config.yml".to_string(),
                });
            }
        }
        Ok(Self { scopes })
    }

    /// Look up a scope by name
    pub fn get(&self, name: &str) -> Result<&ScopeDefinition, PageError> {
        self.scopes
            .iter()
            .find(|scope| scope.name == name)
            .ok_or_else(|| PageError::UnknownScope {
                name: name.to_string(),
            })
    }

    /// The example command for a scope, if one is configured
    pub fn example(&self, name: &str) -> Result<Option<&str>, PageError> {
        Ok(self.get(name)?.example.as_deref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(|scope| scope.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
