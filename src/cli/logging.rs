//! Logging initialisation

use std::fs::OpenOptions;
use std::sync::Mutex;

use tembo::config::LoggingSettings;
use tembo::page::expand_home;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "tembo.log";

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence, then `--verbose`, then the configured level.
/// Logs go to `<logging.path>/tembo.log` when the directory exists and to
/// stderr otherwise.
pub fn init(settings: &LoggingSettings, verbose: bool) {
    let level = if verbose {
        "debug".to_string()
    } else {
        settings.filter_directive()
    };
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let Some(dir) = settings.path.as_deref() else {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
        return;
    };

    let dir = expand_home(dir);
    match OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .init();
            tracing::warn!("Logging directory {} is not usable: {}", dir.display(), e);
        }
    }
}
