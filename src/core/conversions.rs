//! Conversions from provider text and epoch values into richer types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a provider text number without going through `f64`.
///
/// Accepts plain and scientific notation; returns `None` for empty text or
/// placeholders such as `"NA"`.
#[must_use]
pub fn text_to_decimal(text: &str) -> Option<Decimal> {
    let t = text.trim();
    if t.is_empty() {
        return None;
    }
    Decimal::from_str(t)
        .or_else(|_| Decimal::from_scientific(t))
        .ok()
}

/// Convert an epoch-seconds timestamp to `DateTime<Utc>`.
#[must_use]
pub fn i64_to_datetime(timestamp: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0)
}
