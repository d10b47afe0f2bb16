use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::conversions::i64_to_datetime;
use crate::core::wire::{de_f64, de_i64, de_text};

/// Latest (delayed) quote from the real-time endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Price {
    /// Instrument code as echoed by the provider, e.g. `AAPL.US`.
    #[serde(deserialize_with = "de_text")]
    pub code: String,
    #[serde(deserialize_with = "de_f64")]
    pub open: f64,
    #[serde(deserialize_with = "de_f64")]
    pub high: f64,
    #[serde(deserialize_with = "de_f64")]
    pub low: f64,
    #[serde(deserialize_with = "de_f64")]
    pub close: f64,
    #[serde(rename = "previousClose", deserialize_with = "de_f64")]
    pub previous_close: f64,
    #[serde(deserialize_with = "de_f64")]
    pub change: f64,
    /// Change in percent of `previous_close`.
    #[serde(rename = "change_p", deserialize_with = "de_f64")]
    pub change_percentage: f64,
    #[serde(deserialize_with = "de_i64")]
    pub volume: i64,
    #[serde(deserialize_with = "de_i64")]
    pub timestamp: i64,
    #[serde(deserialize_with = "de_i64")]
    pub gmtoffset: i64,
}

impl Price {
    /// `timestamp` as a UTC datetime.
    #[must_use]
    pub fn datetime_utc(&self) -> Option<DateTime<Utc>> {
        i64_to_datetime(self.timestamp)
    }
}
