use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum EodError {
    /// The request never completed (DNS, connect, TLS, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server answered with a status code of 400 or above.
    #[error("API error: {status} - {body}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The raw response body, exactly as received.
        body: String,
    },

    /// The body did not match the shape expected for the endpoint.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

impl EodError {
    /// Returns `true` if the error came from the transport layer rather than the API.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// The HTTP status carried by an [`EodError::Api`], if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
