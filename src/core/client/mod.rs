//! Public client surface + builder.
//! Defaults (UA, provider host) live in `constants`.

mod constants;

use crate::core::EodError;
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Client for the EOD Historical Data API.
///
/// Holds the provider base URL, the API token and a pooled `reqwest` client.
/// Cloning is cheap and every endpoint method takes `&self`, so one instance
/// can be shared freely between tasks.
///
/// # Example
///
/// ```no_run
/// # use eodhd_rs::EodClient;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EodClient::new("demo")?;
/// let price = client.price("AAPL", "US", None).await?;
/// println!("AAPL closed at {}", price.close);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct EodClient {
    http: Client,
    base_url: Url,
    api_token: String,
}

impl fmt::Debug for EodClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EodClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl EodClient {
    /// Creates a client bound to the provider host with default settings.
    ///
    /// No network activity happens here.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be initialized.
    pub fn new(api_token: impl Into<String>) -> Result<Self, EodError> {
        Self::builder(api_token).build()
    }

    /// Create a new builder for the given API token.
    pub fn builder(api_token: impl Into<String>) -> EodClientBuilder {
        EodClientBuilder::new(api_token)
    }

    /// The token injected as `api_token` into every request.
    #[must_use]
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// The base every endpoint path is appended to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) const fn http(&self) -> &Client {
        &self.http
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`EodClient`].
pub struct EodClientBuilder {
    api_token: String,
    user_agent: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl EodClientBuilder {
    /// Starts a builder for the given API token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            user_agent: None,
            base_url: None,
            timeout: None,
            connect_timeout: None,
        }
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the provider base (e.g., `https://eodhistoricaldata.com/`).
    ///
    /// Any path on the base is kept; endpoint paths are appended to it.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL fails to parse or the HTTP
    /// client cannot be initialized.
    pub fn build(self) -> Result<EodClient, EodError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(EodClient {
            http,
            base_url,
            api_token: self.api_token,
        })
    }
}
