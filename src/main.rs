use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use tembo::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "tembo")]
#[command(about = "Tembo - an organiser for work notes")]
#[command(version)]
struct Cli {
    /// Path to the config file
    ///
    /// Defaults to $TEMBO_CONFIG/config.yml, then ~/tembo/.config/config.yml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new page
    ///
    /// Example: tembo new meeting my_presentation
    New {
        /// The name of the scope in the config.yml
        scope: String,

        /// Values for the input tokens defined for this scope
        inputs: Vec<String>,

        /// Show the full path of the page to be created without saving it
        #[arg(long)]
        dry_run: bool,

        /// Show the example command in the config.yml if it exists
        #[arg(long)]
        example: bool,

        /// Overwrite the page if it already exists
        #[arg(short, long)]
        force: bool,

        /// Resolve date tokens against this date instead of now
        #[arg(long, value_parser = cli::new::parse_date)]
        date: Option<NaiveDateTime>,
    },

    /// List all scopes defined in the config.yml
    List,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .unwrap_or_else(|| Config::config_path(&Config::config_dir()));
    let config = Config::load(&config_path)?;

    cli::logging::init(&config.logging, cli.verbose);

    let code = match cli.command {
        Commands::New {
            scope,
            inputs,
            dry_run,
            example,
            force,
            date,
        } => cli::new::new_command(
            &config,
            &config_path,
            cli::new::NewOptions {
                scope,
                inputs,
                dry_run,
                example,
                force,
                date,
            },
        ),
        Commands::List => cli::list::list_command(&config),
    };

    Ok(code)
}
