//! Real-time (delayed) quotes.

mod model;

pub use model::Price;

use crate::core::{EodClient, EodError, QueryParams, net};

impl EodClient {
    /// Fetches the latest quote of `symbol` on `exchange`. Prices lag the market by about 20 minutes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a status
    /// of 400 or above, or the body cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err))]
    pub async fn price(
        &self,
        symbol: &str,
        exchange: &str,
        params: Option<&QueryParams>,
    ) -> Result<Price, EodError> {
        let params = QueryParams::merged(params, &[("api_token", self.api_token()), ("fmt", "json")]);
        let target = net::instrument(symbol, exchange);
        net::get(self, &["api", "real-time", target.as_str()], &params, "real-time").await
    }
}
