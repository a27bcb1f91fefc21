//! Configuration snapshot types for Storefront.
//!
//! Responsibilities:
//! - Define the typed groups that make up the resolved `Config` snapshot.
//! - Provide serde helpers for secrets (redacted), durations and quoted numbers.
//!
//! Does NOT handle:
//! - Reading documents or environment variables (see `loader` module).
//! - Constructing the downstream clients that consume these groups.
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Secrets serialize as `"[REDACTED]"` when set and `""` when unset, never in clear.
//! - Durations serialize in the compact string form (`"15m"`, `"720h"`).

mod auth;
mod config;
pub mod duration;
mod email;
mod http;
mod limiter;
pub(crate) mod number;
mod oauth;
mod storage;

pub use auth::{AuthConfig, JwtConfig};
pub use config::Config;
pub use email::{EmailConfig, EmailSubjects, EmailTemplates, NotificationKind, SmtpConfig};
pub use http::HttpConfig;
pub use limiter::LimiterConfig;
pub use oauth::{GoogleOAuthConfig, OAuthEndpoint};
pub use storage::{CacheConfig, DatabaseConfig, RedisConfig};

use secrecy::SecretString;

/// Placeholder written in place of a secret that has a value.
pub const REDACTED: &str = "[REDACTED]";

/// Wrap a plain string as a secret.
pub(crate) fn secret(value: impl Into<String>) -> SecretString {
    SecretString::new(value.into().into_boxed_str())
}

/// Serialize a secret without revealing it.
pub(crate) mod redacted {
    use super::REDACTED;
    use secrecy::{ExposeSecret, SecretString};
    use serde::Serializer;

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if secret.expose_secret().is_empty() {
            serializer.serialize_str("")
        } else {
            serializer.serialize_str(REDACTED)
        }
    }
}
