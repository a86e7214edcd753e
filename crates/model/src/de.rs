//! Deserialization helpers for loosely typed wire fields.
//!
//! The backend serves ids and years as either JSON strings or numbers
//! depending on which data file they came from, so both are coerced to
//! `String` at the model boundary.

use serde::de::{Deserializer, Error};
use serde::Deserialize;
use serde_json::Value;

/// Coerce a string or number into an identifier string.
pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

/// Coerce an optional scalar (string, number, null, absent) into a string.
pub fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected scalar, got {other}"
        ))),
    }
}
