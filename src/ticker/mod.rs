use crate::actions::{Dividend, ShortInterest, Split};
use crate::core::{EodClient, EodError, QueryParams};
use crate::history::{IntradayData, PriceEOD};
use crate::options::OptionData;
use crate::quote::Price;
use crate::technical::TechnicalIndicator;

/// A handle on one instrument, `symbol` listed on `exchange`.
///
/// Every method forwards to the [`EodClient`] endpoint of the same purpose,
/// so a `Ticker` is just a way of not repeating the symbol and exchange.
///
/// # Example
///
/// ```no_run
/// # use eodhd_rs::{EodClient, QueryParams, Ticker};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EodClient::new("demo")?;
/// let aapl = Ticker::new(&client, "AAPL", "US");
///
/// let quote = aapl.price(None).await?;
/// println!("AAPL last: {}", quote.close);
///
/// let bars = aapl.eod(None).await?;
/// println!("Fetched {} daily bars.", bars.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Ticker {
    client: EodClient,
    symbol: String,
    exchange: String,
}

impl Ticker {
    /// Creates a new `Ticker` for `symbol` on `exchange`.
    pub fn new(client: &EodClient, symbol: impl Into<String>, exchange: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            exchange: exchange.into(),
        }
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    /* ---------------- Quotes ---------------- */

    /// Latest delayed quote.
    ///
    /// # Errors
    ///
    /// See [`EodClient::price`].
    pub async fn price(&self, params: Option<&QueryParams>) -> Result<Price, EodError> {
        self.client.price(&self.symbol, &self.exchange, params).await
    }

    /* ---------------- Price history ---------------- */

    /// End-of-day bars.
    ///
    /// # Errors
    ///
    /// See [`EodClient::price_eod`].
    pub async fn eod(&self, params: Option<&QueryParams>) -> Result<Vec<PriceEOD>, EodError> {
        self.client.price_eod(&self.symbol, &self.exchange, params).await
    }

    /// Intraday bars.
    ///
    /// # Errors
    ///
    /// See [`EodClient::intraday_data`].
    pub async fn intraday(
        &self,
        params: Option<&QueryParams>,
    ) -> Result<Vec<IntradayData>, EodError> {
        self.client.intraday_data(&self.symbol, &self.exchange, params).await
    }

    /* ---------------- Corporate actions ---------------- */

    /// Dividend history, newest first.
    ///
    /// # Errors
    ///
    /// See [`EodClient::historical_dividends`].
    pub async fn dividends(&self, params: Option<&QueryParams>) -> Result<Vec<Dividend>, EodError> {
        self.client
            .historical_dividends(&self.symbol, &self.exchange, params)
            .await
    }

    /// Split history.
    ///
    /// # Errors
    ///
    /// See [`EodClient::historical_splits`].
    pub async fn splits(&self, params: Option<&QueryParams>) -> Result<Vec<Split>, EodError> {
        self.client
            .historical_splits(&self.symbol, &self.exchange, params)
            .await
    }

    /// Short-interest history.
    ///
    /// # Errors
    ///
    /// See [`EodClient::historical_short_interest`].
    pub async fn short_interest(
        &self,
        params: Option<&QueryParams>,
    ) -> Result<Vec<ShortInterest>, EodError> {
        self.client
            .historical_short_interest(&self.symbol, &self.exchange, params)
            .await
    }

    /* ---------------- Options & indicators ---------------- */

    /// Full options chain.
    ///
    /// # Errors
    ///
    /// See [`EodClient::option_data`].
    pub async fn options(&self, params: Option<&QueryParams>) -> Result<OptionData, EodError> {
        self.client.option_data(&self.symbol, &self.exchange, params).await
    }

    /// `function` indicator over `period` bars.
    ///
    /// # Errors
    ///
    /// See [`EodClient::technical_indicator`].
    pub async fn technical(
        &self,
        function: &str,
        period: u32,
        params: Option<&QueryParams>,
    ) -> Result<Vec<TechnicalIndicator>, EodError> {
        self.client
            .technical_indicator(&self.symbol, &self.exchange, function, period, params)
            .await
    }
}

impl EodClient {
    /// Shorthand for [`Ticker::new`].
    pub fn ticker(&self, symbol: impl Into<String>, exchange: impl Into<String>) -> Ticker {
        Ticker::new(self, symbol, exchange)
    }
}
