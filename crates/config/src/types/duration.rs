//! Duration parsing and serialization for configuration documents.
//!
//! Responsibilities:
//! - Parse compound duration strings such as `"10s"`, `"15m"`, `"720h"`, `"1h30m"`.
//! - Provide a serde `with` module (`duration_str`) for typed section decoding.
//!
//! Does NOT handle:
//! - Negative durations (rejected).
//! - Calendar units (days, weeks); `720h` is the way to write 30 days.
//!
//! Invariants:
//! - Integers are interpreted as whole seconds.
//! - `format_duration` output always parses back to the same value.

use std::fmt;
use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Parse a duration string made of one or more `<number><unit>` parts.
///
/// Supported units: `ns`, `us` (or `µs`), `ms`, `s`, `m`, `h`. Parts may carry a
/// decimal fraction (`"1.5h"`). The bare string `"0"` is accepted.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let s = input.trim();
    if s.is_empty() {
        return Err("empty duration".to_string());
    }
    if s == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total: u128 = 0;
    let mut rest = s;
    while !rest.is_empty() {
        let num_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if num_end == 0 {
            return Err(format!("invalid duration {input:?}: expected a number"));
        }
        let (number, tail) = rest.split_at(num_end);
        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_end);

        let unit_nanos: u128 = match unit {
            "ns" => 1,
            "us" | "µs" => 1_000,
            "ms" => 1_000_000,
            "s" => NANOS_PER_SEC,
            "m" => 60 * NANOS_PER_SEC,
            "h" => 3_600 * NANOS_PER_SEC,
            "" => return Err(format!("invalid duration {input:?}: missing unit")),
            other => return Err(format!("invalid duration {input:?}: unknown unit {other:?}")),
        };

        total = total
            .checked_add(part_nanos(input, number, unit_nanos)?)
            .ok_or_else(|| format!("invalid duration {input:?}: overflow"))?;
        rest = next;
    }

    let secs = u64::try_from(total / NANOS_PER_SEC)
        .map_err(|_| format!("invalid duration {input:?}: overflow"))?;
    // Remainder is always below one second.
    let nanos = (total % NANOS_PER_SEC) as u32;
    Ok(Duration::new(secs, nanos))
}

fn part_nanos(input: &str, number: &str, unit_nanos: u128) -> Result<u128, String> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(format!("invalid duration {input:?}: expected a number"));
    }
    if fraction.contains('.') {
        return Err(format!("invalid duration {input:?}: malformed number {number:?}"));
    }

    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| format!("invalid duration {input:?}: malformed number {number:?}"))?
    };
    let mut nanos = whole
        .checked_mul(unit_nanos)
        .ok_or_else(|| format!("invalid duration {input:?}: overflow"))?;

    // Digits past nanosecond precision cannot contribute.
    let fraction = &fraction[..fraction.len().min(18)];
    if !fraction.is_empty() {
        let digits: u128 = fraction
            .parse()
            .map_err(|_| format!("invalid duration {input:?}: malformed number {number:?}"))?;
        let scale = 10u128.pow(fraction.len() as u32);
        nanos += digits * unit_nanos / scale;
    }
    Ok(nanos)
}

/// Render a duration in the compact form accepted by [`parse_duration`].
pub fn format_duration(duration: Duration) -> String {
    if duration.is_zero() {
        return "0s".to_string();
    }
    if duration.subsec_nanos() != 0 {
        let nanos = duration.as_nanos();
        return if nanos % 1_000_000 == 0 {
            format!("{}ms", nanos / 1_000_000)
        } else {
            format!("{nanos}ns")
        };
    }

    let secs = duration.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    if seconds > 0 {
        out.push_str(&format!("{seconds}s"));
    }
    out
}

/// Serde helpers for `Duration` fields written as duration strings.
pub mod duration_str {
    use super::{format_duration, parse_duration};
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_duration(*duration))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DurationVisitor)
    }

    struct DurationVisitor;

    impl<'de> Visitor<'de> for DurationVisitor {
        type Value = Duration;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a duration string such as \"10s\" or a whole number of seconds")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Duration, E> {
            parse_duration(value).map_err(E::custom)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Duration, E> {
            Ok(Duration::from_secs(value))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Duration, E> {
            u64::try_from(value)
                .map(Duration::from_secs)
                .map_err(|_| E::custom(format!("negative duration: {value}")))
        }
    }
}

/// Display adapter used in log lines.
pub struct DisplayDuration(pub Duration);

impl fmt::Display for DisplayDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.0))
    }
}
