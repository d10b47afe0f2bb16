use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::conversions::text_to_decimal;
use crate::core::wire::{de_i64, de_or_default, de_text};

/// One option contract quote.
///
/// Prices, greeks and ratios stay text so the provider's formatting is kept
/// verbatim; the `*_decimal` accessors parse them without going through `f64`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionContract {
    #[serde(deserialize_with = "de_text")]
    pub contract_name: String,
    #[serde(deserialize_with = "de_text")]
    pub contract_size: String,
    #[serde(deserialize_with = "de_text")]
    pub currency: String,
    /// `CALL` or `PUT`.
    #[serde(rename = "type", deserialize_with = "de_text")]
    pub contract_type: String,
    #[serde(deserialize_with = "de_text")]
    pub in_the_money: String,
    #[serde(deserialize_with = "de_text")]
    pub last_trade_date_time: String,
    #[serde(deserialize_with = "de_text")]
    pub expiration_date: String,
    #[serde(deserialize_with = "de_text")]
    pub strike: String,
    #[serde(deserialize_with = "de_text")]
    pub last_price: String,
    #[serde(deserialize_with = "de_text")]
    pub bid: String,
    #[serde(deserialize_with = "de_text")]
    pub ask: String,
    #[serde(deserialize_with = "de_text")]
    pub change: String,
    #[serde(deserialize_with = "de_text")]
    pub change_percent: String,
    #[serde(deserialize_with = "de_i64")]
    pub volume: i64,
    #[serde(deserialize_with = "de_i64")]
    pub open_interest: i64,
    #[serde(deserialize_with = "de_text")]
    pub implied_volatility: String,
    #[serde(deserialize_with = "de_text")]
    pub delta: String,
    #[serde(deserialize_with = "de_text")]
    pub gamma: String,
    #[serde(deserialize_with = "de_text")]
    pub theta: String,
    #[serde(deserialize_with = "de_text")]
    pub vega: String,
    #[serde(deserialize_with = "de_text")]
    pub rho: String,
    /// Model (theoretical) value.
    #[serde(deserialize_with = "de_text")]
    pub theoretical: String,
    #[serde(deserialize_with = "de_text")]
    pub intrinsic_value: String,
    #[serde(deserialize_with = "de_text")]
    pub time_value: String,
    #[serde(deserialize_with = "de_text")]
    pub updated_at: String,
}

impl OptionContract {
    #[must_use]
    pub fn strike_decimal(&self) -> Option<Decimal> {
        text_to_decimal(&self.strike)
    }

    #[must_use]
    pub fn last_price_decimal(&self) -> Option<Decimal> {
        text_to_decimal(&self.last_price)
    }

    #[must_use]
    pub fn bid_decimal(&self) -> Option<Decimal> {
        text_to_decimal(&self.bid)
    }

    #[must_use]
    pub fn ask_decimal(&self) -> Option<Decimal> {
        text_to_decimal(&self.ask)
    }

    /// `true` when the provider flags the contract as in the money.
    #[must_use]
    pub fn is_in_the_money(&self) -> bool {
        self.in_the_money.eq_ignore_ascii_case("true")
    }
}

/// Puts and calls of one expiration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionSides {
    #[serde(rename = "PUT", deserialize_with = "de_or_default")]
    pub put: Vec<OptionContract>,
    #[serde(rename = "CALL", deserialize_with = "de_or_default")]
    pub call: Vec<OptionContract>,
}

/// All contracts sharing one expiration date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionExpiration {
    #[serde(rename = "expirationDate", deserialize_with = "de_text")]
    pub expiration_date: String,
    #[serde(deserialize_with = "de_or_default")]
    pub options: OptionSides,
}

/// Full options chain of one instrument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionData {
    #[serde(deserialize_with = "de_text")]
    pub code: String,
    #[serde(deserialize_with = "de_text")]
    pub exchange: String,
    #[serde(rename = "lastTradeDate", deserialize_with = "de_text")]
    pub last_trade_date: String,
    #[serde(rename = "lastTradePrice", deserialize_with = "de_text")]
    pub last_trade_price: String,
    /// Expiration groups in provider order.
    #[serde(deserialize_with = "de_or_default")]
    pub data: Vec<OptionExpiration>,
}

impl OptionData {
    /// Looks up the group for an expiration date as the provider formats it.
    #[must_use]
    pub fn expiration(&self, date: &str) -> Option<&OptionExpiration> {
        self.data.iter().find(|e| e.expiration_date == date)
    }
}
