//! Configuration derived from already-resolved values.
//!
//! Runs after the environment pass. Pure: the output depends only on the
//! decoded `google` section and the bound credentials.

use tracing::debug;

use super::env::GoogleCredentials;
use super::sections::GoogleSection;
use crate::types::{GoogleOAuthConfig, OAuthEndpoint};

/// Assemble the Google OAuth client descriptor.
///
/// Absent credentials still produce a well-formed descriptor; the login
/// flow fails when it first uses it.
pub fn build_google_oauth(
    section: GoogleSection,
    credentials: GoogleCredentials,
) -> GoogleOAuthConfig {
    let google = GoogleOAuthConfig {
        redirect_url: section.redirect_url,
        client_id: credentials.client_id,
        client_secret: credentials.client_secret,
        scopes: section.scopes,
        endpoint: OAuthEndpoint {
            auth_url: section.auth_url,
            token_url: section.token_url,
        },
    };
    debug!(
        has_credentials = google.has_credentials(),
        scopes = google.scopes.len(),
        "derived google oauth client"
    );
    google
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_GOOGLE_AUTH_URL, DEFAULT_GOOGLE_REDIRECT_URL};
    use crate::loader::defaults::default_tree;
    use crate::loader::sections::decode_sections;
    use crate::types::secret;
    use secrecy::ExposeSecret;

    fn default_section() -> GoogleSection {
        decode_sections(&default_tree()).unwrap().google
    }

    #[test]
    fn test_defaults_and_credentials_combine() {
        let google = build_google_oauth(
            default_section(),
            GoogleCredentials {
                client_id: "client-id".to_string(),
                client_secret: secret("client-secret"),
            },
        );

        assert_eq!(google.redirect_url, DEFAULT_GOOGLE_REDIRECT_URL);
        assert_eq!(google.endpoint.auth_url, DEFAULT_GOOGLE_AUTH_URL);
        assert_eq!(
            google.scopes,
            [
                "https://www.googleapis.com/auth/userinfo.email",
                "https://www.googleapis.com/auth/userinfo.profile",
            ]
        );
        assert_eq!(google.client_id, "client-id");
        assert_eq!(google.client_secret.expose_secret(), "client-secret");
        assert!(google.has_credentials());
    }

    #[test]
    fn test_missing_credentials_still_well_formed() {
        let google = build_google_oauth(
            default_section(),
            GoogleCredentials {
                client_id: String::new(),
                client_secret: secret(""),
            },
        );
        assert!(!google.has_credentials());
        assert!(!google.redirect_url.is_empty());
        assert!(!google.endpoint.token_url.is_empty());
    }
}
