//! Typed decoding of document sections.
//!
//! Responsibilities:
//! - Convert sub-trees of the merged key-value tree into typed groups.
//! - Report the offending section name on failure.
//!
//! Does NOT handle:
//! - Secrets: the section types below have no secret fields, so a secret
//!   written into a document is never read.
//! - Environment overrides (see env.rs).
//!
//! Invariants:
//! - A section absent from every layer decodes from an empty mapping.
//! - A section whose parent holds a scalar is a decode error, not an absence.
//! - Null keys are dropped before decoding, so `host:` with no value means
//!   "not specified".
//! - Unknown keys inside a section are ignored.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::time::Duration;

use super::error::ConfigError;
use super::tree::{drop_nulls, lookup};
use crate::types::duration::duration_str;
use crate::types::number;
use crate::types::{EmailSubjects, EmailTemplates, LimiterConfig};

/// `http` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpSection {
    #[serde(deserialize_with = "number::lenient")]
    pub port: u16,
    #[serde(deserialize_with = "number::lenient")]
    pub max_header_megabytes: usize,
    #[serde(with = "duration_str")]
    pub read_timeout: Duration,
    #[serde(with = "duration_str")]
    pub write_timeout: Duration,
}

/// `auth` section: token lifetimes and verification code length.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AuthSection {
    #[serde(rename = "accessTokenTTL", with = "duration_str")]
    pub access_token_ttl: Duration,
    #[serde(rename = "refreshTokenTTL", with = "duration_str")]
    pub refresh_token_ttl: Duration,
    #[serde(rename = "verificationCodeLength", deserialize_with = "number::lenient")]
    pub verification_code_length: usize,
}

/// `smtp` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SmtpSection {
    pub host: String,
    #[serde(deserialize_with = "number::lenient")]
    pub port: u16,
    pub from: String,
}

/// `google` section: overridable OAuth endpoints and scopes.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GoogleSection {
    pub redirect_url: String,
    pub scopes: Vec<String>,
    pub auth_url: String,
    pub token_url: String,
}

/// A bare duration value such as `cache.ttl`.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
struct DurationValue(#[serde(with = "duration_str")] Duration);

/// Every section the assembler decodes.
#[derive(Debug)]
pub struct Sections {
    pub cache_ttl: Duration,
    pub templates: EmailTemplates,
    pub subjects: EmailSubjects,
    pub limiter: LimiterConfig,
    pub auth: AuthSection,
    pub smtp: SmtpSection,
    pub http: HttpSection,
    pub google: GoogleSection,
}

/// Decode every section from the merged tree.
pub fn decode_sections(tree: &Value) -> Result<Sections, ConfigError> {
    let sections = Sections {
        cache_ttl: decode_section::<DurationValue>(tree, "cache.ttl")?.0,
        templates: decode_section(tree, "email.templates")?,
        subjects: decode_section(tree, "email.subjects")?,
        limiter: decode_section(tree, "limiter")?,
        auth: decode_section(tree, "auth")?,
        smtp: decode_section(tree, "smtp")?,
        http: decode_section(tree, "http")?,
        google: decode_section(tree, "google")?,
    };
    validate_google(&sections.google)?;
    Ok(sections)
}

/// Decode the sub-tree at `path`, or `T::default()` when absent.
pub fn decode_section<T>(tree: &Value, path: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    match lookup(tree, path).map_err(|reason| ConfigError::decode(path, reason))? {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => {
            let mut value = value.clone();
            drop_nulls(&mut value);
            serde_yaml::from_value(value).map_err(|e| ConfigError::decode(path, e))
        }
    }
}

fn validate_google(google: &GoogleSection) -> Result<(), ConfigError> {
    for (key, raw) in [
        ("google.redirectUrl", &google.redirect_url),
        ("google.authUrl", &google.auth_url),
        ("google.tokenUrl", &google.token_url),
    ] {
        let parsed = url::Url::parse(raw).map_err(|e| ConfigError::decode(key, e))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::decode(
                key,
                format!("scheme must be http or https, got: {}", parsed.scheme()),
            ));
        }
    }
    Ok(())
}
