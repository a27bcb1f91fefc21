//! Snapshot rendering for stdout.
//!
//! Secrets are redacted by the snapshot's own `Serialize` impl; this module
//! only picks the format.

use anyhow::{Context, Result};
use storefront_config::Config;

use crate::args::OutputFormat;

/// Render `config` in `format`.
pub fn render(config: &Config, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(config).context("Failed to serialize snapshot as JSON")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(config).context("Failed to serialize snapshot as YAML")
        }
    }
}
