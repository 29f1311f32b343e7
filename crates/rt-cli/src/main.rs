//! reltime CLI
//!
//! Describes a point in time relative to now (or to `--now`):
//! - `ago`: how long ago a past time was
//! - `until`: how long until a future time
//! - `units`, `config`: inspection and settings

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reltime::commands::{self, DescribeArgs};
use reltime::output::print_error;
use rt_core::Tense;

#[derive(Parser)]
#[command(name = "reltime")]
#[command(author, version, about = "Human-readable relative time phrases")]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "RELTIME_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe how long ago a past time was ("5 minutes ago")
    Ago(DescribeArgs),

    /// Describe how long until a future time ("in a week")
    /// Alias: in
    #[command(alias = "in")]
    Until(DescribeArgs),

    /// List the time units phrases are built from
    Units,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Get a configuration value
    Get {
        /// Dotted key, e.g. format.month_policy
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Dotted key, e.g. format.month_policy
        key: String,
        /// New value
        value: String,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run(cli) {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_ref();

    match cli.command {
        Commands::Ago(args) => {
            let settings = commands::load_settings(config_path)?;
            commands::describe_command(Tense::Past, &args, &settings, cli.json)
        }
        Commands::Until(args) => {
            let settings = commands::load_settings(config_path)?;
            commands::describe_command(Tense::Future, &args, &settings, cli.json)
        }
        Commands::Units => commands::units_command(cli.json),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_show(config_path),
            ConfigAction::Path => commands::config_path(config_path),
            ConfigAction::Get { key } => commands::config_get(config_path, &key),
            ConfigAction::Set { key, value } => commands::config_set(config_path, &key, &value),
            ConfigAction::Init { force } => commands::config_init(config_path, force),
        },
    }
}
