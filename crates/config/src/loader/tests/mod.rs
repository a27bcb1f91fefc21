//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test precedence across defaults, base document, overlay, and environment.
//! - Test overlay selection and the fatal error paths.
//! - Test the unset-variable policy and dotenv loading.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::Path;
use std::sync::Mutex;


use crate::constants::BOUND_ENV_VARS;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `(file name, body)` pairs into `dir`.
pub fn write_configs(dir: &Path, files: &[(&str, &str)]) {
    for (name, body) in files {
        std::fs::write(dir.join(name), body).unwrap();
    }
}

/// Every bound variable unset, with the given overrides applied on top.
pub fn bound_env<'a>(
    overrides: &[(&'a str, &'a str)],
) -> Vec<(&'a str, Option<&'a str>)> {
    let mut vars: Vec<(&str, Option<&str>)> =
        BOUND_ENV_VARS.iter().map(|var| (*var, None)).collect();
    for (key, value) in overrides {
        match vars.iter_mut().find(|(var, _)| *var == *key) {
            Some(slot) => slot.1 = Some(*value),
            None => vars.push((*key, Some(*value))),
        }
    }
    vars
}

/// The base document used by most loader tests.
pub const MAIN_YML: &str = r#"
http:
  maxHeaderMegabytes: 2
  readTimeout: 20s
cache:
  ttl: 60s
limiter:
  rps: 20
auth:
  accessTokenTTL: 30m
smtp:
  host: smtp.example.com
  port: 587
  from: shop@example.com
email:
  templates:
    verification_email: ./templates/verification_email.html
    purchase_successful: ./templates/purchase_successful.html
  subjects:
    verification_email: Thanks for signing up
    purchase_successful: Purchase completed
database:
  password: filevalue
"#;

/// The production overlay used by most loader tests.
pub const PROD_YML: &str = r#"
http:
  writeTimeout: 30s
limiter:
  rps: 30
smtp:
  host: smtp.prod.example.com
"#;
