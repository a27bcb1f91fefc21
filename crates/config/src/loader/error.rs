//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration resolution failures.
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see the CLI crate).
//!
//! Invariants:
//! - Every variant is fatal for the process that hit it; none are retried.
//! - All error variants include context for debugging (section, variable, directory).
//! - Errors NEVER include environment variable values or raw .env line contents,
//!   so secrets cannot leak through error messages.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The base document is absent or could not be parsed.
    #[error("Base config 'main' not found or unreadable in {dir}: {reason}")]
    MissingBaseConfig { dir: PathBuf, reason: String },

    /// A non-local environment has no readable overlay document.
    #[error(
        "Overlay config '{environment}' not found or unreadable in {dir}: {reason}. Hint: deployed environments need an explicit overlay, or set APP_ENV=env for local runs"
    )]
    MissingOverlayConfig {
        environment: String,
        dir: PathBuf,
        reason: String,
    },

    /// A document section could not be converted to its typed form.
    #[error("Invalid config section '{section}': {message}")]
    ConfigDecodeError { section: String, message: String },

    /// A bound environment variable is set but cannot be parsed.
    #[error("Invalid value for {var}: {message}")]
    InvalidEnvValue { var: String, message: String },

    /// A bound environment variable is unset while the strict policy is active.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    pub(crate) fn decode(section: impl Into<String>, message: impl ToString) -> Self {
        Self::ConfigDecodeError {
            section: section.into(),
            message: message.to_string(),
        }
    }
}
