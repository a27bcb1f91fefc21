//! The resolved configuration snapshot.
//!
//! Responsibilities:
//! - Group every typed section into one `Config` value.
//!
//! Does NOT handle:
//! - Resolution (see `loader::ConfigLoader`).
//!
//! Invariants:
//! - Built once per process by `ConfigLoader::load()` and never mutated afterwards;
//!   consumers receive `&Config` or `Arc<Config>`.
//! - `Config` is `Send + Sync`, so shared readers need no locking.

use serde::Serialize;

use super::{
    AuthConfig, CacheConfig, DatabaseConfig, EmailConfig, GoogleOAuthConfig, HttpConfig,
    LimiterConfig, RedisConfig, SmtpConfig,
};
use crate::constants::LOCAL_ENVIRONMENT;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Environment tag (`APP_ENV`); `"env"` means local.
    pub environment: String,
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub cache: CacheConfig,
    pub email: EmailConfig,
    pub smtp: SmtpConfig,
    pub limiter: LimiterConfig,
    pub auth: AuthConfig,
    pub google: GoogleOAuthConfig,
}

impl Config {
    /// Whether this snapshot was resolved for local development.
    pub fn is_local(&self) -> bool {
        self.environment == LOCAL_ENVIRONMENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_config_is_shareable_without_locks() {
        assert_send_sync::<Config>();
        assert_send_sync::<std::sync::Arc<Config>>();
    }
}
