//! Serde adapters for the provider's loosely typed JSON.
//!
//! Missing keys are handled with `#[serde(default)]` on the records; these
//! functions additionally treat an explicit `null` as the zero value.

use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

/// `null` or a number; `null` yields `0.0`.
pub(crate) fn de_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any `T`, with `null` mapped to `T::default()`.
pub(crate) fn de_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` or an integer; integral floats (`1200.0`) are accepted, fractional ones rejected.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn de_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
                    Ok(f as i64)
                }
                _ => Err(de::Error::custom(format!("cannot convert {n} to i64"))),
            }
        }
        Some(other) => Err(de::Error::custom(format!("expected integer, got {other}"))),
    }
}

/// Text field that may arrive as a string, a number or a boolean.
///
/// Numbers keep the exact lexeme the provider sent (`2.90` stays `"2.90"`);
/// booleans become `"true"`/`"false"` and `null` becomes `""`.
pub(crate) fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(de::Error::custom(format!("expected text, got {other}"))),
    }
}

/// Like [`de_text`] but keeps absence and `null` distinct from `""`.
pub(crate) fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = de_text(deserializer)?;
    Ok(if s.is_empty() { None } else { Some(s) })
}
