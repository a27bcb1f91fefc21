//! Centralized constants for the Storefront configuration core.
//!
//! This module contains default values, document names, and environment
//! variable names so that no magic strings are duplicated across modules.

// =============================================================================
// Environment Tags & Document Names
// =============================================================================

/// Environment tag that selects local resolution (no overlay document).
pub const LOCAL_ENVIRONMENT: &str = "env";

/// Name (without extension) of the mandatory base document.
pub const BASE_DOCUMENT: &str = "main";

/// Recognized document extensions, in lookup order.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["yml", "yaml", "json"];

/// Default configuration directory used by the CLI.
pub const DEFAULT_CONFIGS_DIR: &str = "configs";

// =============================================================================
// HTTP Defaults
// =============================================================================

/// Default HTTP listener port.
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Default read/write timeout for the HTTP listener.
pub const DEFAULT_HTTP_RW_TIMEOUT: &str = "10s";

/// Default maximum header size in megabytes.
pub const DEFAULT_HTTP_MAX_HEADER_MEGABYTES: usize = 1;

// =============================================================================
// Auth Defaults
// =============================================================================

/// Default access token lifetime.
pub const DEFAULT_ACCESS_TOKEN_TTL: &str = "15m";

/// Default refresh token lifetime (30 days).
pub const DEFAULT_REFRESH_TOKEN_TTL: &str = "720h";

/// Default length of email verification codes.
pub const DEFAULT_VERIFICATION_CODE_LENGTH: usize = 8;

// =============================================================================
// Rate Limiter Defaults
// =============================================================================

/// Default requests per second per visitor.
pub const DEFAULT_LIMITER_RPS: u32 = 10;

/// Default burst size.
pub const DEFAULT_LIMITER_BURST: u32 = 2;

/// Default lifetime of an idle limiter entry.
pub const DEFAULT_LIMITER_TTL: &str = "10m";

// =============================================================================
// Google OAuth Defaults
// =============================================================================

/// Default OAuth callback handled by the users API.
pub const DEFAULT_GOOGLE_REDIRECT_URL: &str = "http://localhost:8000/api/v1/users/google_callback";

/// Default scopes requested from Google.
pub const DEFAULT_GOOGLE_SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/userinfo.email",
    "https://www.googleapis.com/auth/userinfo.profile",
];

/// Google authorization endpoint.
pub const DEFAULT_GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/auth";

/// Google token endpoint.
pub const DEFAULT_GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const ENV_APP_ENV: &str = "APP_ENV";
pub const ENV_HTTP_HOST: &str = "HTTP_HOST";
pub const ENV_HTTP_PORT: &str = "HTTP_PORT";
pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_SSLMODE: &str = "DB_SSLMODE";
pub const ENV_PASSWORD_SALT: &str = "PASSWORD_SALT";
pub const ENV_JWT_SIGNING_KEY: &str = "JWT_SIGNING_KEY";
pub const ENV_SMTP_PASSWORD: &str = "SMTP_PASSWORD";
pub const ENV_REDIS_ADDRESS: &str = "REDIS_ADDRESS";
pub const ENV_REDIS_PASSWORD: &str = "REDIS_PASSWORD";
pub const ENV_REDIS_DB: &str = "REDIS_DB";
pub const ENV_GOOGLE_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";
pub const ENV_GOOGLE_CLIENT_SECRET: &str = "GOOGLE_CLIENT_SECRET";

/// Every variable owned by the environment binder, in binding order.
pub const BOUND_ENV_VARS: &[&str] = &[
    ENV_APP_ENV,
    ENV_HTTP_HOST,
    ENV_HTTP_PORT,
    ENV_DB_NAME,
    ENV_DB_HOST,
    ENV_DB_PORT,
    ENV_DB_USER,
    ENV_DB_PASSWORD,
    ENV_DB_SSLMODE,
    ENV_PASSWORD_SALT,
    ENV_JWT_SIGNING_KEY,
    ENV_SMTP_PASSWORD,
    ENV_REDIS_ADDRESS,
    ENV_REDIS_PASSWORD,
    ENV_REDIS_DB,
    ENV_GOOGLE_CLIENT_ID,
    ENV_GOOGLE_CLIENT_SECRET,
];
