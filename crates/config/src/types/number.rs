//! Lenient decoding for integer fields.
//!
//! Responsibilities:
//! - Accept either a YAML number or a numeric string (`rps: "20"`) for
//!   integer fields in documents.
//!
//! Invariants:
//! - The target type's range still applies: `port: "70000"` is an error.
//! - Fractions and negative values are errors.

use serde::Deserialize;
use serde::de::Error as _;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    U64(u64),
    I64(i64),
    String(String),
}

/// Deserialize an unsigned integer from a number or a numeric string.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: TryFrom<u64> + FromStr,
    <T as FromStr>::Err: Display,
{
    let out_of_range = |v: &dyn Display| D::Error::custom(format!("{v} is out of range"));
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::U64(v) => T::try_from(v).map_err(|_| out_of_range(&v)),
        NumberOrString::I64(v) => Err(out_of_range(&v)),
        NumberOrString::String(s) => s
            .trim()
            .parse::<T>()
            .map_err(|e| D::Error::custom(format!("invalid number {s:?}: {e}"))),
    }
}
