//! Datastore and cache connection settings.
//!
//! Responsibilities:
//! - Define the Postgres connection group (`DatabaseConfig`).
//! - Define the Redis connection group (`RedisConfig`) and the cache TTL (`CacheConfig`).
//!
//! Invariants:
//! - `DatabaseConfig` and `RedisConfig` are entirely binder-owned: every field comes
//!   from an environment variable, never from a document.

use secrecy::SecretString;
use serde::Serialize;
use std::time::Duration;

use super::duration::duration_str;
use super::{redacted, secret};

/// Postgres connection settings.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseConfig {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub ssl_mode: String,
    pub user: String,
    #[serde(serialize_with = "redacted::serialize")]
    pub password: SecretString,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            host: String::new(),
            port: 0,
            ssl_mode: String::new(),
            user: String::new(),
            password: secret(""),
        }
    }
}

/// Redis connection settings.
#[derive(Debug, Clone, Serialize)]
pub struct RedisConfig {
    pub address: String,
    #[serde(serialize_with = "redacted::serialize")]
    pub password: SecretString,
    /// Logical database index.
    pub db: u32,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            password: secret(""),
            db: 0,
        }
    }
}

/// Response cache settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheConfig {
    /// Lifetime of cached entries. Zero when no document sets `cache.ttl`.
    #[serde(with = "duration_str")]
    pub ttl: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_defaults_are_blank() {
        let db = DatabaseConfig::default();
        assert!(db.name.is_empty());
        assert_eq!(db.port, 0);
        assert!(db.password.expose_secret().is_empty());

        let redis = RedisConfig::default();
        assert!(redis.address.is_empty());
        assert_eq!(redis.db, 0);
    }

    #[test]
    fn test_database_debug_does_not_expose_password() {
        let db = DatabaseConfig {
            password: secret("db-password-789"),
            ..Default::default()
        };
        let debug_output = format!("{:?}", db);
        assert!(
            !debug_output.contains("db-password-789"),
            "Debug output should not contain the database password"
        );
    }

    #[test]
    fn test_redis_password_serializes_redacted() {
        let redis = RedisConfig {
            address: "localhost:6379".to_string(),
            password: secret("redis-secret"),
            db: 1,
        };
        let json = serde_json::to_string(&redis).unwrap();
        assert!(!json.contains("redis-secret"));
        assert!(json.contains("[REDACTED]"));
    }
}
