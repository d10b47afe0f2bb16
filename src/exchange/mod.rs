//! Symbol listings per exchange.

mod model;

pub use model::Symbol;

use crate::core::{EodClient, EodError, QueryParams, net};

impl EodClient {
    /// Lists the instruments traded on `exchange` (e.g. `US`, `LSE`), in provider order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a status
    /// of 400 or above, or the body cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err))]
    pub async fn symbols_for_exchange(
        &self,
        exchange: &str,
        params: Option<&QueryParams>,
    ) -> Result<Vec<Symbol>, EodError> {
        let params = QueryParams::merged(params, &[("api_token", self.api_token()), ("fmt", "json")]);
        net::get(self, &["api", "exchanges", exchange], &params, "exchanges").await
    }
}
