//! Environment variable binding for configuration.
//!
//! Responsibilities:
//! - Read the fixed set of bound environment variables once.
//! - Apply them to the snapshot under construction, overwriting document/default values.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Loading documents (see document.rs).
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Every bound variable overwrites its field unconditionally, set or not.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Under `UnsetEnvPolicy::Blank` an unset variable yields the empty/zero value;
//!   under `UnsetEnvPolicy::Strict` it is `ConfigError::MissingEnvVar`.
//! - Set-but-unparsable numeric variables return ConfigError::InvalidEnvValue.
//! - Values are never logged; only variable names are.

use secrecy::SecretString;
use std::str::FromStr;
use tracing::warn;

use super::error::ConfigError;
use crate::constants::{
    ENV_APP_ENV, ENV_DB_HOST, ENV_DB_NAME, ENV_DB_PASSWORD, ENV_DB_PORT, ENV_DB_SSLMODE,
    ENV_DB_USER, ENV_GOOGLE_CLIENT_ID, ENV_GOOGLE_CLIENT_SECRET, ENV_HTTP_HOST, ENV_HTTP_PORT,
    ENV_JWT_SIGNING_KEY, ENV_PASSWORD_SALT, ENV_REDIS_ADDRESS, ENV_REDIS_DB, ENV_REDIS_PASSWORD,
    ENV_SMTP_PASSWORD,
};
use crate::types::{Config, DatabaseConfig, RedisConfig, secret};

/// What to do when a bound environment variable is unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnsetEnvPolicy {
    /// Use the empty/zero value and defer failure to the consumer.
    #[default]
    Blank,
    /// Fail resolution with `ConfigError::MissingEnvVar`.
    Strict,
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Google client credentials handed to the derived OAuth builder.
#[derive(Debug, Clone)]
pub struct GoogleCredentials {
    pub client_id: String,
    pub client_secret: SecretString,
}

/// Values of every bound environment variable, read in one pass.
#[derive(Debug, Clone)]
pub struct EnvBinding {
    pub environment: String,
    http_host: String,
    http_port: u16,
    database: DatabaseConfig,
    redis: RedisConfig,
    password_salt: SecretString,
    jwt_signing_key: SecretString,
    smtp_password: SecretString,
    google: GoogleCredentials,
}

impl EnvBinding {
    /// Read the bound variables from the process environment.
    ///
    /// When `environment` is given it replaces `APP_ENV`, which is then not read.
    pub fn read(
        policy: UnsetEnvPolicy,
        environment: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let reader = Reader { policy };
        let environment = match environment {
            Some(tag) => tag.to_string(),
            None => reader.string(ENV_APP_ENV)?,
        };

        Ok(Self {
            environment,
            http_host: reader.string(ENV_HTTP_HOST)?,
            http_port: reader.number(ENV_HTTP_PORT)?,
            database: DatabaseConfig {
                name: reader.string(ENV_DB_NAME)?,
                host: reader.string(ENV_DB_HOST)?,
                port: reader.number(ENV_DB_PORT)?,
                ssl_mode: reader.string(ENV_DB_SSLMODE)?,
                user: reader.string(ENV_DB_USER)?,
                password: reader.secret(ENV_DB_PASSWORD)?,
            },
            redis: RedisConfig {
                address: reader.string(ENV_REDIS_ADDRESS)?,
                password: reader.secret(ENV_REDIS_PASSWORD)?,
                db: reader.number(ENV_REDIS_DB)?,
            },
            password_salt: reader.secret(ENV_PASSWORD_SALT)?,
            jwt_signing_key: reader.secret(ENV_JWT_SIGNING_KEY)?,
            smtp_password: reader.secret(ENV_SMTP_PASSWORD)?,
            google: GoogleCredentials {
                client_id: reader.string(ENV_GOOGLE_CLIENT_ID)?,
                client_secret: reader.secret(ENV_GOOGLE_CLIENT_SECRET)?,
            },
        })
    }

    /// Overwrite every binder-owned field of `config`.
    ///
    /// Returns the Google credentials for the derived OAuth descriptor.
    pub fn apply(self, config: &mut Config) -> GoogleCredentials {
        config.environment = self.environment;
        config.http.host = self.http_host;
        config.http.port = self.http_port;
        config.database = self.database;
        config.redis = self.redis;
        config.auth.password_salt = self.password_salt;
        config.auth.jwt.signing_key = self.jwt_signing_key;
        config.smtp.password = self.smtp_password;
        self.google
    }
}

struct Reader {
    policy: UnsetEnvPolicy,
}

impl Reader {
    fn raw(&self, var: &str) -> Result<Option<String>, ConfigError> {
        match env_var_or_none(var) {
            Some(value) => Ok(Some(value)),
            None => match self.policy {
                UnsetEnvPolicy::Blank => {
                    warn!(var, "bound environment variable is unset, using empty value");
                    Ok(None)
                }
                UnsetEnvPolicy::Strict => Err(ConfigError::MissingEnvVar(var.to_string())),
            },
        }
    }

    fn string(&self, var: &str) -> Result<String, ConfigError> {
        Ok(self.raw(var)?.unwrap_or_default())
    }

    fn secret(&self, var: &str) -> Result<SecretString, ConfigError> {
        Ok(secret(self.raw(var)?.unwrap_or_default()))
    }

    fn number<T>(&self, var: &str) -> Result<T, ConfigError>
    where
        T: FromStr + Default,
    {
        match self.raw(var)? {
            None => Ok(T::default()),
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                message: "must be a non-negative integer within range".to_string(),
            }),
        }
    }
}
