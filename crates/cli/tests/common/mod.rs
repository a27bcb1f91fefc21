//! Shared test utilities for storefront-config integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write configs directories for a test.
//!
//! Invariants / Assumptions:
//! - Every bound variable is cleared so host values never leak into a run.
//! - `APP_ENV` is left unset unless a test sets it.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use storefront_config::constants::BOUND_ENV_VARS;

#[allow(dead_code)]
pub const MAIN_YML: &str = r#"
http:
  readTimeout: 20s
limiter:
  rps: 20
smtp:
  host: smtp.example.com
  port: 587
  from: shop@example.com
"#;

#[allow(dead_code)]
pub const PROD_YML: &str = "limiter:\n  rps: 30\n";

/// Returns a hermetic `storefront-config` command for integration testing.
pub fn storefront_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("storefront-config");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("CONFIGS_DIR");
    for var in BOUND_ENV_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Write `files` into `dir`.
pub fn write_configs(dir: &Path, files: &[(&str, &str)]) {
    for (name, body) in files {
        fs::write(dir.join(name), body).expect("write config document");
    }
}
