//! Centralized constants for the default endpoint and UA.

/// UA sent when the caller does not override it.
pub(crate) const USER_AGENT: &str = concat!("eodhd-rs/", env!("CARGO_PKG_VERSION"));

/// Provider host; every endpoint path is joined onto it.
pub(crate) const DEFAULT_BASE_URL: &str = "https://eodhistoricaldata.com/";
