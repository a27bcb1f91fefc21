//! Google OAuth client descriptor.
//!
//! Responsibilities:
//! - Describe the OAuth client handed to the Google login flow.
//!
//! Does NOT handle:
//! - Performing the OAuth exchange.
//!
//! Invariants:
//! - Entirely derived: credentials come from the environment, endpoints and
//!   scopes from the `google` section (with built-in defaults).
//! - Missing credentials yield a well-formed descriptor; `has_credentials()` reports it.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use super::{redacted, secret};

/// Provider endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OAuthEndpoint {
    pub auth_url: String,
    pub token_url: String,
}

/// OAuth client settings for Google login.
#[derive(Debug, Clone, Serialize)]
pub struct GoogleOAuthConfig {
    pub redirect_url: String,
    pub client_id: String,
    #[serde(serialize_with = "redacted::serialize")]
    pub client_secret: SecretString,
    pub scopes: Vec<String>,
    pub endpoint: OAuthEndpoint,
}

impl GoogleOAuthConfig {
    /// Whether both the client id and secret are present.
    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.expose_secret().is_empty()
    }
}

impl Default for GoogleOAuthConfig {
    fn default() -> Self {
        Self {
            redirect_url: String::new(),
            client_id: String::new(),
            client_secret: secret(""),
            scopes: Vec::new(),
            endpoint: OAuthEndpoint::default(),
        }
    }
}
