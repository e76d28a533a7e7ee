//! Page creation: resolve a scope into a page and write it to disk

use chrono::NaiveDateTime;
use tracing::{debug, info};

use super::PageError;
use super::path::{expand_home, resolve_with};
use super::resolve::Resolution;
use super::template::TemplateLoader;
use crate::{ResolvedPage, ScopeDefinition};

/// Resolve a page's path and body from one resolution, without writing.
///
/// Arity is checked once across the path, filename and template body.
pub fn resolve_page(
    scope: &ScopeDefinition,
    base_path: &str,
    template_body: &str,
    reference_date: NaiveDateTime,
    inputs: &[String],
) -> Result<ResolvedPage, PageError> {
    let resolution = Resolution::new(reference_date, inputs)
        .with_name(&scope.name)
        .with_example(scope.example.as_deref());

    resolution.validate(&[
        scope.path_pattern.as_str(),
        scope.filename_pattern.as_str(),
        template_body,
    ])?;

    let path = resolve_with(&resolution, scope, base_path)?;
    let body = resolution.apply(template_body)?;
    Ok(ResolvedPage::new(path, body))
}

/// Resolve a page and write it.
///
/// Fails with [`PageError::PageAlreadyExists`] if the file exists and
/// `overwrite` is false; nothing is written in that case.
pub fn create_page(
    scope: &ScopeDefinition,
    base_path: &str,
    template_body: &str,
    reference_date: NaiveDateTime,
    inputs: &[String],
    overwrite: bool,
) -> Result<ResolvedPage, PageError> {
    let page = resolve_page(scope, base_path, template_body, reference_date, inputs)?;
    page.write(overwrite)?;
    Ok(page)
}

/// Creates pages under a base path using templates from a loader
#[derive(Debug, Clone)]
pub struct PageCreator<L> {
    base_path: String,
    loader: L,
}

impl<L: TemplateLoader> PageCreator<L> {
    pub fn new(base_path: impl Into<String>, loader: L) -> Self {
        Self {
            base_path: base_path.into(),
            loader,
        }
    }

    /// Resolve a page without writing it (dry run).
    ///
    /// Checks that the base path exists and loads the scope's template;
    /// a scope without a template gets an empty body.
    pub fn resolve(
        &self,
        scope: &ScopeDefinition,
        reference_date: NaiveDateTime,
        inputs: &[String],
    ) -> Result<ResolvedPage, PageError> {
        self.check_base_path()?;

        let template_body = match &scope.template_name {
            Some(name) => self.loader.load(name)?,
            None => String::new(),
        };

        let page = resolve_page(scope, &self.base_path, &template_body, reference_date, inputs)?;
        debug!(scope = %scope.name, path = %page.path.display(), "Resolved page");
        Ok(page)
    }

    /// Resolve a page and write it to disk.
    pub fn create(
        &self,
        scope: &ScopeDefinition,
        reference_date: NaiveDateTime,
        inputs: &[String],
        overwrite: bool,
    ) -> Result<ResolvedPage, PageError> {
        let page = self.resolve(scope, reference_date, inputs)?;
        page.write(overwrite)?;
        info!(scope = %scope.name, path = %page.path.display(), "Saved page");
        Ok(page)
    }

    fn check_base_path(&self) -> Result<(), PageError> {
        let base = expand_home(&self.base_path);
        if !base.exists() {
            return Err(PageError::BasePathNotFound { path: base });
        }
        Ok(())
    }
}
