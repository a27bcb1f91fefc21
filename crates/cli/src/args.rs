//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Resolve the configs directory from `--configs-dir` or `CONFIGS_DIR`.
//!
//! Non-responsibilities:
//! - Does not resolve the snapshot (see `main`).
//! - Does not read `APP_ENV`; the loader does that when `--env` is absent.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use storefront_config::constants::DEFAULT_CONFIGS_DIR;

#[derive(Parser, Debug)]
#[command(name = "storefront-config")]
#[command(
    about = "Resolve the Storefront configuration snapshot and print it with secrets redacted",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  storefront-config\n  storefront-config --env prod --format yaml\n  APP_ENV=prod storefront-config --configs-dir ./deploy/configs --strict-env\n"
)]
pub struct Cli {
    /// Directory holding `main` and the per-environment overlay documents
    #[arg(long, env = "CONFIGS_DIR", default_value = DEFAULT_CONFIGS_DIR)]
    pub configs_dir: PathBuf,

    /// Environment tag to resolve instead of APP_ENV (`env` means local)
    #[arg(long = "env", value_name = "TAG")]
    pub environment: Option<String>,

    /// Fail when any bound environment variable is unset
    #[arg(long)]
    pub strict_env: bool,

    /// Output format for the resolved snapshot
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl Cli {
    /// The explicit environment tag, ignoring blank values.
    pub fn environment(&self) -> Option<&str> {
        self.environment
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}

/// How the snapshot is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}
