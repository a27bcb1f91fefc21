//! Built-in default values.
//!
//! Responsibilities:
//! - Build the lowest-precedence key-value tree before any document or
//!   environment variable is consulted.
//!
//! Does NOT handle:
//! - Reading documents (see document.rs) or environment variables (see env.rs).
//!
//! Invariants:
//! - Pure and idempotent: every call returns an identical tree.
//! - Only structural keys have defaults; secrets never do.
//! - Durations are stored in their document form (`"10s"`) so they decode
//!   through the same path as document values.

use serde_yaml::{Mapping, Value};

use super::tree::set_path;
use crate::constants::{
    DEFAULT_ACCESS_TOKEN_TTL, DEFAULT_GOOGLE_AUTH_URL, DEFAULT_GOOGLE_REDIRECT_URL,
    DEFAULT_GOOGLE_SCOPES, DEFAULT_GOOGLE_TOKEN_URL, DEFAULT_HTTP_MAX_HEADER_MEGABYTES,
    DEFAULT_HTTP_PORT, DEFAULT_HTTP_RW_TIMEOUT, DEFAULT_LIMITER_BURST, DEFAULT_LIMITER_RPS,
    DEFAULT_LIMITER_TTL, DEFAULT_REFRESH_TOKEN_TTL, DEFAULT_VERIFICATION_CODE_LENGTH,
};

/// Build the default key-value tree.
pub fn default_tree() -> Value {
    let scopes = DEFAULT_GOOGLE_SCOPES
        .iter()
        .map(|scope| Value::from(*scope))
        .collect::<Vec<_>>();

    let entries: [(&str, Value); 14] = [
        ("http.port", Value::from(DEFAULT_HTTP_PORT)),
        (
            "http.maxHeaderMegabytes",
            Value::from(DEFAULT_HTTP_MAX_HEADER_MEGABYTES),
        ),
        ("http.readTimeout", Value::from(DEFAULT_HTTP_RW_TIMEOUT)),
        ("http.writeTimeout", Value::from(DEFAULT_HTTP_RW_TIMEOUT)),
        ("auth.accessTokenTTL", Value::from(DEFAULT_ACCESS_TOKEN_TTL)),
        ("auth.refreshTokenTTL", Value::from(DEFAULT_REFRESH_TOKEN_TTL)),
        (
            "auth.verificationCodeLength",
            Value::from(DEFAULT_VERIFICATION_CODE_LENGTH),
        ),
        ("limiter.rps", Value::from(DEFAULT_LIMITER_RPS)),
        ("limiter.burst", Value::from(DEFAULT_LIMITER_BURST)),
        ("limiter.ttl", Value::from(DEFAULT_LIMITER_TTL)),
        ("google.redirectUrl", Value::from(DEFAULT_GOOGLE_REDIRECT_URL)),
        ("google.scopes", Value::Sequence(scopes)),
        ("google.authUrl", Value::from(DEFAULT_GOOGLE_AUTH_URL)),
        ("google.tokenUrl", Value::from(DEFAULT_GOOGLE_TOKEN_URL)),
    ];

    let mut tree = Mapping::new();
    for (path, value) in entries {
        set_path(&mut tree, path, value);
    }
    Value::Mapping(tree)
}
