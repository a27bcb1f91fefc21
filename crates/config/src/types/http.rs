//! HTTP listener settings.

use serde::Serialize;
use std::time::Duration;

use super::duration::duration_str;

const BYTES_PER_MEGABYTE: usize = 1 << 20;

/// Settings for the HTTP listener.
///
/// `host` and `port` are bound from `HTTP_HOST` / `HTTP_PORT`; the rest comes
/// from defaults and the `http` document section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    pub max_header_megabytes: usize,
    #[serde(with = "duration_str")]
    pub read_timeout: Duration,
    #[serde(with = "duration_str")]
    pub write_timeout: Duration,
}

impl HttpConfig {
    /// Listen address in `host:port` form.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Maximum header size in bytes.
    pub fn max_header_bytes(&self) -> usize {
        self.max_header_megabytes.saturating_mul(BYTES_PER_MEGABYTE)
    }
}
