//! Authentication policy types for Storefront configuration.
//!
//! Responsibilities:
//! - Define password hashing and verification code settings (`AuthConfig`).
//! - Define token lifetimes and the signing key (`JwtConfig`).
//!
//! Does NOT handle:
//! - Hashing passwords or signing tokens (the auth service consumes these values).
//!
//! Invariants:
//! - `password_salt` and `signing_key` are binder-owned secrets; documents never supply them.
//! - Token lifetimes come from defaults or the `auth` document section.

use secrecy::SecretString;
use serde::Serialize;
use std::time::Duration;

use super::duration::duration_str;
use super::redacted;

/// Token issuing policy.
#[derive(Debug, Clone, Serialize)]
pub struct JwtConfig {
    #[serde(with = "duration_str")]
    pub access_token_ttl: Duration,
    #[serde(with = "duration_str")]
    pub refresh_token_ttl: Duration,
    #[serde(serialize_with = "redacted::serialize")]
    pub signing_key: SecretString,
}

/// Authentication policy.
#[derive(Debug, Clone, Serialize)]
pub struct AuthConfig {
    pub jwt: JwtConfig,
    #[serde(serialize_with = "redacted::serialize")]
    pub password_salt: SecretString,
    pub verification_code_length: usize,
}
