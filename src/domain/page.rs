use std::fmt;
use std::path::{Path, PathBuf};

use crate::page::PageError;

/// A page resolved for one command: where it goes and what it contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPage {
    /// Absolute path of the page file
    pub path: PathBuf,

    /// Rendered template body
    pub body: String,
}

impl ResolvedPage {
    pub fn new(path: PathBuf, body: String) -> Self {
        Self { path, body }
    }

    /// Write the body to disk, creating parent directories as needed.
    ///
    /// An existing file is only replaced when `overwrite` is set; otherwise
    /// [`PageError::PageAlreadyExists`] is returned and nothing is written.
    /// The existence check and the write are not atomic.
    pub fn write(&self, overwrite: bool) -> Result<(), PageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;
        }

        if self.path.exists() && !overwrite {
            return Err(PageError::PageAlreadyExists {
                path: self.path.clone(),
            });
        }

        std::fs::write(&self.path, &self.body).map_err(|source| io_error(&self.path, source))
    }
}

impl fmt::Display for ResolvedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResolvedPage(\"{}\")", self.path.display())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> PageError {
    PageError::Io {
        path: path.to_path_buf(),
        source,
    }
}
