//! Query parameters passed alongside an endpoint call.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Sampling period for end-of-day and technical data (`period=d|w|m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    /// `d`
    Daily,
    /// `w`
    Weekly,
    /// `m`
    Monthly,
}

impl Period {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "d",
            Self::Weekly => "w",
            Self::Monthly => "m",
        }
    }
}

/// Row ordering of historical series (`order=a|d`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// `a`, oldest first.
    Ascending,
    /// `d`, newest first.
    Descending,
}

impl Order {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "a",
            Self::Descending => "d",
        }
    }
}

/// Bar size of the intraday endpoint (`interval=1m|5m|1h`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntradayInterval {
    Minute1,
    Minute5,
    Hour1,
}

impl IntradayInterval {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minute1 => "1m",
            Self::Minute5 => "5m",
            Self::Hour1 => "1h",
        }
    }
}

/// Caller-supplied query parameters.
///
/// Keys are kept sorted so the outgoing query string is deterministic. The
/// client's mandatory keys (`api_token`, `fmt`, and for technical indicators
/// `function` and `period`) are written after these and always win.
///
/// ```
/// use chrono::NaiveDate;
/// use eodhd_rs::{Order, QueryParams};
///
/// let params = QueryParams::new()
///     .from_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .order(Order::Descending);
/// assert_eq!(params.get("from"), Some("2024-01-01"));
/// assert_eq!(params.get("order"), Some("d"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an arbitrary key, replacing any previous value.
    #[must_use]
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// First date of a historical range (`from=YYYY-MM-DD`).
    #[must_use]
    pub fn from_date(self, date: NaiveDate) -> Self {
        self.insert("from", date.format("%Y-%m-%d").to_string())
    }

    /// Last date of a historical range (`to=YYYY-MM-DD`).
    #[must_use]
    pub fn to_date(self, date: NaiveDate) -> Self {
        self.insert("to", date.format("%Y-%m-%d").to_string())
    }

    /// Intraday lower bound as a UNIX timestamp.
    #[must_use]
    pub fn from_timestamp(self, ts: i64) -> Self {
        self.insert("from", ts.to_string())
    }

    /// Intraday upper bound as a UNIX timestamp.
    #[must_use]
    pub fn to_timestamp(self, ts: i64) -> Self {
        self.insert("to", ts.to_string())
    }

    #[must_use]
    pub fn period(self, period: Period) -> Self {
        self.insert("period", period.as_str())
    }

    #[must_use]
    pub fn order(self, order: Order) -> Self {
        self.insert("order", order.as_str())
    }

    #[must_use]
    pub fn interval(self, interval: IntradayInterval) -> Self {
        self.insert("interval", interval.as_str())
    }

    /// Looks up a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Caller pairs first, then `mandatory` on top so colliding keys take the mandatory value.
    pub(crate) fn merged(caller: Option<&Self>, mandatory: &[(&str, &str)]) -> Self {
        let mut out = caller.cloned().unwrap_or_default();
        for (k, v) in mandatory {
            out.0.insert((*k).to_string(), (*v).to_string());
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<HashMap<String, String>> for QueryParams {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map.into_iter().collect())
    }
}
