//! Intraday and end-of-day price series.

mod model;

pub use model::{IntradayData, PriceEOD};

use crate::core::{EodClient, EodError, QueryParams, net};

impl EodClient {
    /// Fetches intraday bars for `symbol` on `exchange`.
    ///
    /// Use [`QueryParams::interval`] and the timestamp bounds to select the
    /// bar size and window; the provider's defaults apply otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a status
    /// of 400 or above, or the body cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err))]
    pub async fn intraday_data(
        &self,
        symbol: &str,
        exchange: &str,
        params: Option<&QueryParams>,
    ) -> Result<Vec<IntradayData>, EodError> {
        let params = QueryParams::merged(params, &[("api_token", self.api_token()), ("fmt", "json")]);
        let target = net::instrument(symbol, exchange);
        net::get(self, &["api", "intraday", target.as_str()], &params, "intraday").await
    }

    /// Fetches end-of-day bars for `symbol` on `exchange`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a status
    /// of 400 or above, or the body cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err))]
    pub async fn price_eod(
        &self,
        symbol: &str,
        exchange: &str,
        params: Option<&QueryParams>,
    ) -> Result<Vec<PriceEOD>, EodError> {
        let params = QueryParams::merged(params, &[("api_token", self.api_token()), ("fmt", "json")]);
        let target = net::instrument(symbol, exchange);
        net::get(self, &["api", "eod", target.as_str()], &params, "eod").await
    }
}
