#![allow(dead_code)]

use eodhd_rs::EodClient;
use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};
use url::Url;

pub const TOKEN: &str = "test-token";

pub fn fixture(endpoint: &str, symbol: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, symbol, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// Client whose base URL points at the mock server.
pub fn client_for(server: &MockServer) -> EodClient {
    EodClient::builder(TOKEN)
        .base_url(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}

/// Serves `tests/fixtures/{endpoint}_{target}.json` at `/api/{endpoint}/{target}`,
/// requiring the token and `fmt=json`.
pub fn mock_json<'a>(server: &'a MockServer, endpoint: &str, target: &str) -> Mock<'a> {
    let body = fixture(endpoint, target, "json");
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/{endpoint}/{target}"))
            .query_param("api_token", TOKEN)
            .query_param("fmt", "json");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}
