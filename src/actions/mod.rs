//! Corporate actions: dividends, splits and short interest.

mod model;
mod wire;

pub use model::{Dividend, ShortInterest, Split};

use crate::core::{EodClient, EodError, QueryParams, net};

impl EodClient {
    /// Fetches the dividend history of `symbol` on `exchange`, newest first.
    ///
    /// See <https://eodhistoricaldata.com/knowledgebase/api-splits-dividends/>.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a status
    /// of 400 or above, or any record of the history cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err))]
    pub async fn historical_dividends(
        &self,
        symbol: &str,
        exchange: &str,
        params: Option<&QueryParams>,
    ) -> Result<Vec<Dividend>, EodError> {
        let params = QueryParams::merged(params, &[("api_token", self.api_token()), ("fmt", "json")]);
        let target = net::instrument(symbol, exchange);
        net::get_with(self, &["api", "div", target.as_str()], &params, wire::decode_dividends).await
    }

    /// Fetches the split history of `symbol` on `exchange`, in provider order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a status
    /// of 400 or above, or the body cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err))]
    pub async fn historical_splits(
        &self,
        symbol: &str,
        exchange: &str,
        params: Option<&QueryParams>,
    ) -> Result<Vec<Split>, EodError> {
        let params = QueryParams::merged(params, &[("api_token", self.api_token()), ("fmt", "json")]);
        let target = net::instrument(symbol, exchange);
        net::get(self, &["api", "splits", target.as_str()], &params, "splits").await
    }

    /// Fetches the short-interest history of `symbol` on `exchange`, in provider order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a status
    /// of 400 or above, or the body cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err))]
    pub async fn historical_short_interest(
        &self,
        symbol: &str,
        exchange: &str,
        params: Option<&QueryParams>,
    ) -> Result<Vec<ShortInterest>, EodError> {
        let params = QueryParams::merged(params, &[("api_token", self.api_token()), ("fmt", "json")]);
        let target = net::instrument(symbol, exchange);
        net::get(self, &["api", "shorts", target.as_str()], &params, "shorts").await
    }
}
