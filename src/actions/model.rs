use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::conversions::text_to_decimal;
use crate::core::wire::{de_i64, de_opt_text, de_text};

/// One historical dividend event.
///
/// Dates and the cash value are kept as the provider formats them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dividend {
    /// Ex-dividend date.
    #[serde(deserialize_with = "de_text")]
    pub date: String,
    #[serde(rename = "declarationDate", deserialize_with = "de_text")]
    pub declaration_date: String,
    #[serde(rename = "paymentDate", deserialize_with = "de_text")]
    pub payment_date: String,
    #[serde(rename = "recordDate", deserialize_with = "de_text")]
    pub record_date: String,
    /// Cash amount per share.
    #[serde(deserialize_with = "de_text")]
    pub value: String,
    /// Cash amount before split adjustment, when the provider sends it.
    #[serde(rename = "unadjustedValue", deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub unadjusted_value: Option<String>,
    #[serde(deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Payment frequency label (e.g. `Quarterly`).
    #[serde(deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

impl Dividend {
    /// The cash value parsed without loss of precision.
    #[must_use]
    pub fn value_decimal(&self) -> Option<Decimal> {
        text_to_decimal(&self.value)
    }
}

/// One historical stock split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Split {
    #[serde(deserialize_with = "de_text")]
    pub date: String,
    /// Ratio as text, e.g. `4.000000/1.000000`.
    #[serde(deserialize_with = "de_text")]
    pub split: String,
}

/// Daily short-interest snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortInterest {
    #[serde(deserialize_with = "de_text")]
    pub date: String,
    /// Shares sold short.
    #[serde(deserialize_with = "de_i64")]
    pub short: i64,
    #[serde(deserialize_with = "de_i64")]
    pub volume: i64,
}
