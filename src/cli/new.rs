//! New command implementation

use std::path::Path;
use std::process::ExitCode;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use tembo::config::Config;
use tembo::page::{FsTemplateLoader, PageCreator, PageError};
use tembo::ScopeRegistry;

use super::message;

/// Arguments of `tembo new`
#[derive(Debug, Clone, Default)]
pub struct NewOptions {
    pub scope: String,
    pub inputs: Vec<String>,
    pub dry_run: bool,
    pub example: bool,
    pub force: bool,
    pub date: Option<NaiveDateTime>,
}

/// Create a new page for a scope
pub fn new_command(config: &Config, config_path: &Path, options: NewOptions) -> ExitCode {
    let registry = match config.scope_registry() {
        Ok(registry) => registry,
        Err(e) => return report(e),
    };

    let scope = match registry.get(&options.scope) {
        Ok(scope) => scope,
        Err(e) => {
            message(missing_scope_message(&registry, config_path, e));
            return ExitCode::FAILURE;
        }
    };

    if options.example {
        match registry.example(&scope.name) {
            Ok(Some(example)) => message(format!("Example for {}: {}", scope.name, example)),
            Ok(None) => message("No example in config.yml"),
            Err(e) => return report(e),
        }
        return ExitCode::SUCCESS;
    }

    let creator = PageCreator::new(
        config.base_path.clone(),
        FsTemplateLoader::new(config.template_dir()),
    );
    let reference_date = options
        .date
        .unwrap_or_else(|| Local::now().naive_local());

    if options.dry_run {
        return match creator.resolve(scope, reference_date, &options.inputs) {
            Ok(page) => {
                message(format!("{} will be created", page.path.display()));
                ExitCode::SUCCESS
            }
            Err(e) => report(e),
        };
    }

    match creator.create(scope, reference_date, &options.inputs, options.force) {
        Ok(page) => {
            message(format!("Saved {} to disk", page.path.display()));
            ExitCode::SUCCESS
        }
        Err(PageError::PageAlreadyExists { path }) => {
            message(format!("File {} already exists", path.display()));
            ExitCode::SUCCESS
        }
        Err(e) => report(e),
    }
}

/// Parse `--date` as `YYYY-MM-DD` or `YYYY-MM-DD HH:MM`
pub fn parse_date(value: &str) -> Result<NaiveDateTime, String> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M")
        .map_err(|_| format!("expected YYYY-MM-DD or \"YYYY-MM-DD HH:MM\", got {}", value))
}

fn missing_scope_message(registry: &ScopeRegistry, config_path: &Path, error: PageError) -> String {
    if !registry.is_empty() {
        return error.to_string();
    }
    let dir = config_path.parent().unwrap_or(config_path);
    if config_path.exists() {
        format!("Config.yml found in {} is empty", dir.display())
    } else {
        format!("No config.yml found in {}", dir.display())
    }
}

fn report(error: PageError) -> ExitCode {
    tracing::debug!(error = ?error, "Page command failed");
    message(error);
    ExitCode::FAILURE
}
