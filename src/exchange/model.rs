use serde::{Deserialize, Serialize};

use crate::core::wire::{de_opt_text, de_text};

/// One instrument listed on an exchange.
///
/// The provider capitalizes these keys (`Code`, `Name`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Symbol {
    #[serde(deserialize_with = "de_text")]
    pub code: String,
    #[serde(deserialize_with = "de_text")]
    pub name: String,
    #[serde(deserialize_with = "de_text")]
    pub country: String,
    #[serde(deserialize_with = "de_text")]
    pub exchange: String,
    #[serde(deserialize_with = "de_text")]
    pub currency: String,
    /// Instrument type, e.g. `Common Stock` or `ETF`.
    #[serde(rename = "Type", deserialize_with = "de_text")]
    pub instrument_type: String,
    #[serde(deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub isin: Option<String>,
}
