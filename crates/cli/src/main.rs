//! Storefront config CLI - resolve and inspect the runtime configuration.
//!
//! Responsibilities:
//! - Load `.env`, initialize logging, and resolve the snapshot exactly once.
//! - Print the snapshot with secrets redacted.
//! - Report fatal resolution errors with structured exit codes.
//!
//! Does NOT handle:
//! - Resolution logic (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults.
//! - Logs go to stderr; stdout carries only the rendered snapshot.

mod args;
mod error;
mod output;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use storefront_config::constants::DEFAULT_CONFIGS_DIR;
use storefront_config::{ConfigLoader, UnsetEnvPolicy};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new(DEFAULT_CONFIGS_DIR).load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut loader = ConfigLoader::new(&cli.configs_dir);
    if let Some(tag) = cli.environment() {
        loader = loader.with_environment(tag);
    }
    if cli.strict_env {
        loader = loader.with_unset_env_policy(UnsetEnvPolicy::Strict);
    }

    let config = loader
        .load()
        .context("Failed to resolve configuration")?;
    tracing::debug!(environment = %config.environment, "rendering snapshot");

    println!("{}", output::render(&config, cli.format)?);
    Ok(())
}
