//! Runtime configuration for the Storefront service.
//!
//! This crate resolves one immutable `Config` snapshot at process start from
//! built-in defaults, a base document, an environment overlay document, and
//! environment variables.

pub mod constants;
mod loader;
pub mod types;

pub use loader::tree;
pub use loader::{
    ConfigError, ConfigLoader, LoadedDocuments, UnsetEnvPolicy, default_tree, env_var_or_none,
    find_document, init, load_documents,
};
pub use types::{
    AuthConfig, CacheConfig, Config, DatabaseConfig, EmailConfig, EmailSubjects, EmailTemplates,
    GoogleOAuthConfig, HttpConfig, JwtConfig, LimiterConfig, NotificationKind, OAuthEndpoint,
    RedisConfig, SmtpConfig,
};
