//! Screener CLI - Command Line Front End for the Options Screener
//!
//! Loads rows exported by the screener backend and renders the views the web
//! tool shows.
//!
//! # Commands
//!
//! - `screener scenarios --input <file>` - Ordered option scenario table
//! - `screener heatmap --input <file>` - EPS trend heatmap and quick-watch list
//! - `screener timeline --input <file>` - Per-ticker EPS estimate timeline
//! - `screener check` - Validate and print the effective configuration

use clap::{Parser, Subcommand};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod input;
mod output;

use config::{OutputFormat, ScreenerConfig};
pub use error::{CliError, Result};

/// Options Screener CLI
#[derive(Parser)]
#[command(name = "screener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "screener.toml")]
    config: String,

    /// Output format (table, csv, json); overrides the configured format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise a batch of option simulation rows
    Scenarios {
        /// Path to a JSON array of scenario rows
        #[arg(short, long)]
        input: String,
    },

    /// Build the EPS trend heatmap
    Heatmap {
        /// Path to a JSON array of EPS rows
        #[arg(short, long)]
        input: String,

        /// Period to include (e.g. "Curr Qtr"); repeat for several, default all
        #[arg(short, long = "period")]
        periods: Vec<String>,
    },

    /// Show per-ticker EPS estimate timelines
    Timeline {
        /// Path to a JSON array of EPS rows
        #[arg(short, long)]
        input: String,
    },

    /// Check configuration
    Check,
}

fn init_tracing(log_level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { log_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ScreenerConfig::load_with_env_and_validate(Path::new(&cli.config))?;
    init_tracing(&config.log_level, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let format = commands::resolve_format(cli.format, config.format);

    match cli.command {
        Commands::Scenarios { input } => commands::scenarios::run(&input, format),
        Commands::Heatmap { input, periods } => {
            commands::heatmap::run(&input, &periods, format, &config)
        }
        Commands::Timeline { input } => commands::timeline::run(&input, format, &config),
        Commands::Check => commands::check::run(&config),
    }
}
