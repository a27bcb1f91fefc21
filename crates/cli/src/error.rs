//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that deploy scripts can use to tell
//!   configuration failures apart.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Every ConfigError is fatal; exit codes only classify it.
//! - Errors that are not ConfigError map to GeneralError.

use storefront_config::ConfigError;

/// Structured exit codes for storefront-config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - snapshot resolved and printed.
    #[allow(dead_code)]
    Success = 0,

    /// General error - unhandled failure, including `.env` problems.
    GeneralError = 1,

    /// The base `main` document is absent or unparsable.
    MissingBaseConfig = 2,

    /// A deployed environment has no readable overlay document.
    ///
    /// Scripts should check APP_ENV and the configs directory.
    MissingOverlayConfig = 3,

    /// A document section or bound variable has an invalid value.
    InvalidConfig = 4,

    /// A bound environment variable is unset under `--strict-env`.
    MissingEnvVar = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingBaseConfig { .. } => ExitCode::MissingBaseConfig,
            ConfigError::MissingOverlayConfig { .. } => ExitCode::MissingOverlayConfig,
            ConfigError::ConfigDecodeError { .. } | ConfigError::InvalidEnvValue { .. } => {
                ExitCode::InvalidConfig
            }
            ConfigError::MissingEnvVar(_) => ExitCode::MissingEnvVar,
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
