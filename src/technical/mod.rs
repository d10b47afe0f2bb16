//! Technical indicators computed by the provider.

mod model;

pub use model::TechnicalIndicator;

use crate::core::{EodClient, EodError, QueryParams, net};

impl EodClient {
    /// Fetches the `function` indicator (e.g. `sma`, `rsi`, `avgvol`) over `period` bars.
    ///
    /// `function` and `period` are sent as query parameters and override any
    /// caller value under the same keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a status
    /// of 400 or above, or the body cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err))]
    pub async fn technical_indicator(
        &self,
        symbol: &str,
        exchange: &str,
        function: &str,
        period: u32,
        params: Option<&QueryParams>,
    ) -> Result<Vec<TechnicalIndicator>, EodError> {
        let period = period.to_string();
        let params = QueryParams::merged(
            params,
            &[
                ("api_token", self.api_token()),
                ("fmt", "json"),
                ("function", function),
                ("period", period.as_str()),
            ],
        );
        let target = net::instrument(symbol, exchange);
        net::get(self, &["api", "technical", target.as_str()], &params, "technical").await
    }
}
