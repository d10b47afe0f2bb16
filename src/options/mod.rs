//! Options chains.

mod model;

pub use model::{OptionContract, OptionData, OptionExpiration, OptionSides};

use crate::core::{EodClient, EodError, QueryParams, net};

impl EodClient {
    /// Fetches the options chain of `symbol` on `exchange`.
    ///
    /// Unlike the other endpoints no `fmt=json` is sent; the options
    /// endpoint answers in JSON without it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a status
    /// of 400 or above, or the body cannot be decoded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err))]
    pub async fn option_data(
        &self,
        symbol: &str,
        exchange: &str,
        params: Option<&QueryParams>,
    ) -> Result<OptionData, EodError> {
        let params = QueryParams::merged(params, &[("api_token", self.api_token())]);
        let target = net::instrument(symbol, exchange);
        net::get(self, &["api", "options", target.as_str()], &params, "options").await
    }
}
