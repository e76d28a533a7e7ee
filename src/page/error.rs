//! Error type for page resolution and creation

use std::path::PathBuf;

/// Errors raised while resolving or writing a page
///
/// Every variant carries the structured context the CLI needs to build a
/// user-facing message. None of these conditions are transient.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Malformed or unknown date token inside a pattern or template body
    #[error("Invalid date token in \"{pattern}\": {reason}")]
    TokenFormat { pattern: String, reason: String },

    /// Fewer positional inputs than the scope references
    #[error(
        "Your tembo config.yml/template specifies {expected} input tokens, you gave {actual}{}",
        example_hint(.example)
    )]
    InputArity {
        expected: usize,
        actual: usize,
        example: Option<String>,
    },

    #[error("{} already exists", .path.display())]
    PageAlreadyExists { path: PathBuf },

    #[error("Scope {name} not found in config.yml")]
    UnknownScope { name: String },

    #[error("Template file {} does not exist.", .path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("Tembo base path of {} does not exist.", .path.display())]
    BasePathNotFound { path: PathBuf },

    /// A scope definition breaks one of its invariants
    #[error("Scope {name} is invalid: {reason}")]
    InvalidScope { name: String, reason: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PageError {
    /// Attach a scope's example command to an arity error.
    ///
    /// Other variants are returned unchanged.
    pub fn with_example(self, scope_example: Option<&str>) -> Self {
        match self {
            PageError::InputArity {
                expected,
                actual,
                example: None,
            } => PageError::InputArity {
                expected,
                actual,
                example: scope_example.map(String::from),
            },
            other => other,
        }
    }
}

fn example_hint(example: &Option<String>) -> String {
    match example {
        Some(example) => format!(". Example: {}", example),
        None => String::new(),
    }
}
