//! Lenient field decoding shared by every course source.
//!
//! Backends disagree on whether identifiers are strings or integers, and on whether an
//! absent list is `null` or missing. These helpers normalize both before the record
//! reaches the coordinator. Display attributes never fail a record: a value that
//! cannot be read decodes as absent and the display default applies.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;
use tracing::debug;

/// Renders a JSON identifier (string or integer) as a string.
pub fn id_to_string(v: &JsonValue) -> Option<String> {
    if let Some(s) = v.as_str() {
        return Some(s.to_string());
    }
    if let Some(i) = v.as_i64() {
        return Some(i.to_string());
    }
    if let Some(u) = v.as_u64() {
        return Some(u.to_string());
    }
    None
}

/// Like `id_to_string`, but also accepts floats and booleans (prices, durations).
pub fn scalar_to_string(v: &JsonValue) -> Option<String> {
    match v {
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        other => id_to_string(other),
    }
}

pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = JsonValue::deserialize(deserializer)?;
    match id_to_string(&v) {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(D::Error::custom(format!(
            "expected a non-empty string or integer identifier, got {}",
            v
        ))),
    }
}

/// Optional identifier; `null` and blank strings decode as `None`.
pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<JsonValue>::deserialize(deserializer)? {
        None | Some(JsonValue::Null) => Ok(None),
        Some(v) => match id_to_string(&v) {
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => Ok(Some(s)),
            None => Err(D::Error::custom(format!(
                "expected a string or integer identifier, got {}",
                v
            ))),
        },
    }
}

/// Display text (price, duration, language, ...). Numbers and booleans are rendered;
/// arrays and objects decode as `None`.
pub fn opt_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_value(deserializer)?.and_then(|v| {
        let s = scalar_to_string(&v);
        if s.is_none() {
            debug!(value = %v, "Ignoring non-scalar display attribute");
        }
        s
    }))
}

/// Numeric display attribute given as a number or a numeric string.
pub fn opt_f32<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_value(deserializer)?.and_then(|v| {
        let n = match &v {
            JsonValue::Number(n) => n.as_f64().map(|f| f as f32),
            JsonValue::String(s) => s.trim().parse::<f32>().ok(),
            _ => None,
        };
        let n = n.filter(|f| f.is_finite());
        if n.is_none() {
            debug!(value = %v, "Ignoring unreadable numeric display attribute");
        }
        n
    }))
}

/// Count display attribute given as a non-negative integer or an integer string.
pub fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_value(deserializer)?.and_then(|v| {
        let n = match &v {
            JsonValue::Number(n) => n.as_u64().and_then(|u| u32::try_from(u).ok()),
            JsonValue::String(s) => s.trim().parse::<u32>().ok(),
            _ => None,
        };
        if n.is_none() {
            debug!(value = %v, "Ignoring unreadable count display attribute");
        }
        n
    }))
}

fn opt_value<'de, D>(deserializer: D) -> Result<Option<JsonValue>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<JsonValue>::deserialize(deserializer)?.filter(|v| !v.is_null()))
}

pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
