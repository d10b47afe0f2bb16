//! The one place a request is sent and its outcome translated.

use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{EodClient, EodError, QueryParams};

/// Appends `segments` to the client's base path. Each segment is percent-encoded on its own.
pub(crate) fn endpoint_url(client: &EodClient, segments: &[&str]) -> Result<Url, EodError> {
    let mut url = client.base_url().clone();
    url.path_segments_mut()
        .map_err(|()| EodError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Performs the GET and hands the body to `decode` when the status is below 400.
///
/// Transport failures are returned as-is and a status >= 400 becomes
/// [`EodError::Api`] carrying the raw body; `decode` never sees either.
pub(crate) async fn get_with<T, F>(
    client: &EodClient,
    segments: &[&str],
    params: &QueryParams,
    decode: F,
) -> Result<T, EodError>
where
    F: FnOnce(&str) -> Result<T, EodError>,
{
    let mut url = endpoint_url(client, segments)?;
    url.query_pairs_mut().extend_pairs(params.iter());

    let resp = client.http().get(url).send().await?;
    let status = resp.status();

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %segments.join("/"), status = status.as_u16(), "eodhd response");

    let text = resp.text().await?;
    if status.as_u16() >= 400 {
        return Err(EodError::Api {
            status: status.as_u16(),
            body: text,
        });
    }

    decode(&text)
}

/// [`get_with`] decoding the body straight into `T`.
pub(crate) async fn get<T>(
    client: &EodClient,
    segments: &[&str],
    params: &QueryParams,
    endpoint: &str,
) -> Result<T, EodError>
where
    T: DeserializeOwned,
{
    get_with(client, segments, params, |text| {
        serde_json::from_str(text).map_err(|e| EodError::Data(format!("{endpoint} json parse: {e}")))
    })
    .await
}

/// `SYMBOL.EXCHANGE`, the instrument form used in every per-instrument path.
pub(crate) fn instrument(symbol: &str, exchange: &str) -> String {
    format!("{symbol}.{exchange}")
}
