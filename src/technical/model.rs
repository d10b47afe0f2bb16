use serde::{Deserialize, Serialize};

use crate::core::wire::{de_f64, de_text};

/// One point of a technical indicator series.
///
/// The endpoint fills only the column of the requested function; the others stay `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalIndicator {
    #[serde(deserialize_with = "de_text")]
    pub date: String,
    #[serde(rename = "avgvol", deserialize_with = "de_f64")]
    pub average_volume: f64,
    #[serde(deserialize_with = "de_f64")]
    pub sma: f64,
    #[serde(deserialize_with = "de_f64")]
    pub ema: f64,
    #[serde(deserialize_with = "de_f64")]
    pub wma: f64,
    #[serde(deserialize_with = "de_f64")]
    pub rsi: f64,
}
