//! Barrier Pricer CLI - Heston PDE pricing from the command line
//!
//! # Commands
//!
//! - `barrier-pricer price` - Price the configured down-and-out call
//! - `barrier-pricer delta` - Bump-and-revalue spot delta
//! - `barrier-pricer check` - Validate the configuration and report on it
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate loads a TOML run
//! description and orchestrates the pricer layers below it.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::RunConfig;

/// Heston PDE pricer for down-and-out barrier calls
#[derive(Parser)]
#[command(name = "barrier-pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "barrier.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the configured contract
    Price {
        /// Spot to price at (overrides query.spot)
        #[arg(short, long)]
        spot: Option<f64>,
    },

    /// Compute spot delta by bump-and-revalue
    Delta {
        /// Spot to bump around (overrides query.spot)
        #[arg(short, long)]
        spot: Option<f64>,

        /// Absolute spot bump (overrides query.bump)
        #[arg(short, long)]
        bump: Option<f64>,
    },

    /// Check the configuration without pricing
    Check,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = RunConfig::from_file(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    init_tracing(level);

    info!("Barrier Pricer v{}", env!("CARGO_PKG_VERSION"));
    info!(config = %cli.config.display(), log_level = level, "Configuration loaded");

    match cli.command {
        Commands::Price { spot } => commands::price::run(&config, spot).map(|_| ())?,
        Commands::Delta { spot, bump } => commands::delta::run(&config, spot, bump).map(|_| ())?,
        Commands::Check => commands::check::run(&config)?,
    }

    Ok(())
}
