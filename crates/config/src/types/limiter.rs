//! Rate limiter settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::duration::duration_str;
use super::number;

/// Per-visitor rate limiting policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimiterConfig {
    /// Requests per second.
    #[serde(deserialize_with = "number::lenient")]
    pub rps: u32,
    #[serde(deserialize_with = "number::lenient")]
    pub burst: u32,
    /// How long an idle visitor entry is kept.
    #[serde(with = "duration_str")]
    pub ttl: Duration,
}
