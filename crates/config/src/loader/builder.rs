//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that resolves the `Config` snapshot.
//! - Run the resolution stages in order: defaults, document merge, section
//!   decode, environment override, derived values.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Document lookup and merging (delegated to document.rs).
//! - Reloading: a new snapshot requires a new `load()` call.
//!
//! Invariants / Assumptions:
//! - Precedence is defaults < base document < overlay document < environment variables.
//! - `load()` consumes the loader; resolution is one-shot and never retried.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::defaults::default_tree;
use super::derived::build_google_oauth;
use super::document::load_documents;
use super::env::{EnvBinding, UnsetEnvPolicy};
use super::error::ConfigError;
use super::sections::{Sections, decode_sections};
use super::tree::merged;
use crate::types::duration::DisplayDuration;
use crate::types::{
    AuthConfig, CacheConfig, Config, DatabaseConfig, EmailConfig, GoogleOAuthConfig, HttpConfig,
    JwtConfig, RedisConfig, SmtpConfig, secret,
};

/// Resolve the snapshot from `configs_dir` with the default policy.
///
/// Loads `.env` first (unless `DOTENV_DISABLED` is set). Any error is fatal for
/// the calling process.
pub fn init(configs_dir: impl AsRef<Path>) -> Result<Config, ConfigError> {
    ConfigLoader::new(configs_dir).load_dotenv()?.load()
}

/// Configuration loader that builds the snapshot from defaults, documents, and
/// environment variables.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    configs_dir: PathBuf,
    environment: Option<String>,
    unset_env_policy: UnsetEnvPolicy,
}

impl ConfigLoader {
    /// Create a loader reading documents from `configs_dir`.
    pub fn new(configs_dir: impl AsRef<Path>) -> Self {
        Self {
            configs_dir: configs_dir.as_ref().to_path_buf(),
            environment: None,
            unset_env_policy: UnsetEnvPolicy::default(),
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Use `tag` as the environment instead of reading `APP_ENV`.
    ///
    /// The tag is trimmed like `APP_ENV`; a blank tag leaves `APP_ENV` in charge.
    pub fn with_environment(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let tag = tag.trim();
        self.environment = (!tag.is_empty()).then(|| tag.to_string());
        self
    }

    /// Set what happens when a bound environment variable is unset.
    pub fn with_unset_env_policy(mut self, policy: UnsetEnvPolicy) -> Self {
        self.unset_env_policy = policy;
        self
    }

    /// Resolve the snapshot.
    ///
    /// # Errors
    ///
    /// - `MissingBaseConfig` if `main` is absent or unparsable.
    /// - `MissingOverlayConfig` if the environment is not local and its overlay
    ///   is absent or unparsable.
    /// - `ConfigDecodeError` if a section does not match its typed form.
    /// - `InvalidEnvValue` / `MissingEnvVar` from the environment pass.
    pub fn load(self) -> Result<Config, ConfigError> {
        // Bound variables are read once up front so overlay selection and the
        // override pass see the same APP_ENV.
        let binding = EnvBinding::read(self.unset_env_policy, self.environment.as_deref())?;

        let defaults = default_tree();
        debug!("populated defaults");

        let documents = load_documents(&self.configs_dir, &binding.environment)?;
        let tree = merged(defaults, documents.tree);

        let mut sections = decode_sections(&tree)?;
        debug!("decoded config sections");
        let google_section = std::mem::take(&mut sections.google);

        let mut config = assemble(sections);
        let credentials = binding.apply(&mut config);
        debug!("applied environment overrides");

        config.google = build_google_oauth(google_section, credentials);

        info!(
            environment = %config.environment,
            http_addr = %config.http.addr(),
            base = %documents.base_path.display(),
            overlay = ?documents.overlay_path,
            access_token_ttl = %DisplayDuration(config.auth.jwt.access_token_ttl),
            "configuration resolved"
        );
        Ok(config)
    }
}

/// Build the typed snapshot from decoded sections, leaving binder-owned fields empty.
fn assemble(sections: Sections) -> Config {
    Config {
        environment: String::new(),
        http: HttpConfig {
            host: String::new(),
            port: sections.http.port,
            max_header_megabytes: sections.http.max_header_megabytes,
            read_timeout: sections.http.read_timeout,
            write_timeout: sections.http.write_timeout,
        },
        database: DatabaseConfig::default(),
        redis: RedisConfig::default(),
        cache: CacheConfig {
            ttl: sections.cache_ttl,
        },
        email: EmailConfig {
            templates: sections.templates,
            subjects: sections.subjects,
        },
        smtp: SmtpConfig {
            host: sections.smtp.host,
            port: sections.smtp.port,
            from: sections.smtp.from,
            password: secret(""),
        },
        limiter: sections.limiter,
        auth: AuthConfig {
            jwt: JwtConfig {
                access_token_ttl: sections.auth.access_token_ttl,
                refresh_token_ttl: sections.auth.refresh_token_ttl,
                signing_key: secret(""),
            },
            password_salt: secret(""),
            verification_code_length: sections.auth.verification_code_length,
        },
        google: GoogleOAuthConfig::default(),
    }
}
