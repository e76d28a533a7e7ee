//! List command implementation

use std::process::ExitCode;

use tembo::config::Config;

use super::message;

/// List all scopes defined in the config.yml
pub fn list_command(config: &Config) -> ExitCode {
    let registry = match config.scope_registry() {
        Ok(registry) => registry,
        Err(e) => {
            message(e);
            return ExitCode::FAILURE;
        }
    };

    let names: Vec<&str> = registry.names().collect();
    message(format!(
        "{} names found in config.yml: '{}'",
        names.len(),
        names.join("', '")
    ));
    ExitCode::SUCCESS
}
