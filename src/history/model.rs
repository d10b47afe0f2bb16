use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::conversions::i64_to_datetime;
use crate::core::wire::{de_f64, de_i64, de_text};

/// One intraday bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntradayData {
    #[serde(deserialize_with = "de_f64")]
    pub open: f64,
    #[serde(deserialize_with = "de_f64")]
    pub high: f64,
    #[serde(deserialize_with = "de_f64")]
    pub low: f64,
    #[serde(deserialize_with = "de_f64")]
    pub close: f64,
    #[serde(deserialize_with = "de_f64")]
    pub adjusted_close: f64,
    #[serde(deserialize_with = "de_i64")]
    pub volume: i64,
    /// Bar start, seconds since the UNIX epoch.
    #[serde(deserialize_with = "de_i64")]
    pub timestamp: i64,
    /// Exchange offset from GMT in seconds.
    #[serde(deserialize_with = "de_i64")]
    pub gmtoffset: i64,
    /// Bar start as `YYYY-MM-DD HH:MM:SS` (UTC).
    #[serde(deserialize_with = "de_text")]
    pub datetime: String,
}

impl IntradayData {
    /// `timestamp` as a UTC datetime.
    #[must_use]
    pub fn datetime_utc(&self) -> Option<DateTime<Utc>> {
        i64_to_datetime(self.timestamp)
    }
}

/// One end-of-day bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceEOD {
    #[serde(deserialize_with = "de_text")]
    pub date: String,
    #[serde(deserialize_with = "de_f64")]
    pub open: f64,
    #[serde(deserialize_with = "de_f64")]
    pub high: f64,
    #[serde(deserialize_with = "de_f64")]
    pub low: f64,
    #[serde(deserialize_with = "de_f64")]
    pub close: f64,
    #[serde(deserialize_with = "de_f64")]
    pub adjusted_close: f64,
    #[serde(deserialize_with = "de_i64")]
    pub volume: i64,
}
