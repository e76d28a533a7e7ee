//! Template loading and rendering

use std::path::PathBuf;

use chrono::NaiveDateTime;

use super::PageError;
use super::resolve::Resolution;

/// Render a template body, expanding date tokens and binding inputs.
///
/// All text outside tokens, including whitespace, is kept verbatim.
pub fn render(
    template_body: &str,
    reference_date: NaiveDateTime,
    inputs: &[String],
) -> Result<String, PageError> {
    Resolution::new(reference_date, inputs).apply(template_body)
}

/// Source of raw template bodies
pub trait TemplateLoader {
    fn load(&self, template_name: &str) -> Result<String, PageError>;
}

/// Loads templates from a directory on disk
#[derive(Debug, Clone)]
pub struct FsTemplateLoader {
    dir: PathBuf,
}

impl FsTemplateLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateLoader for FsTemplateLoader {
    fn load(&self, template_name: &str) -> Result<String, PageError> {
        let path = self.dir.join(template_name);
        match std::fs::read_to_string(&path) {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(PageError::TemplateNotFound { path })
            }
            Err(source) => Err(PageError::Io { path, source }),
        }
    }
}
