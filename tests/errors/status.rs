use eodhd_rs::{EodClient, EodError};
use httpmock::{Method::GET, MockServer};

use crate::common::client_for;

fn assert_bad_request<T: std::fmt::Debug>(what: &str, res: Result<T, EodError>) {
    let err = res.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("400"), "{what}: {msg}");
    assert!(msg.contains("bad request"), "{what}: {msg}");
    match err {
        EodError::Api { status, body } => {
            assert_eq!(status, 400, "{what}");
            assert_eq!(body, "bad request", "{what}");
        }
        other => panic!("{what}: expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn status_400_maps_to_api_error_for_every_endpoint() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path_includes("/api/");
        then.status(400).body("bad request");
    });

    let c: EodClient = client_for(&server);
    assert_bad_request("div", c.historical_dividends("AAPL", "US", None).await);
    assert_bad_request("splits", c.historical_splits("AAPL", "US", None).await);
    assert_bad_request("shorts", c.historical_short_interest("AAPL", "US", None).await);
    assert_bad_request("intraday", c.intraday_data("AAPL", "US", None).await);
    assert_bad_request("options", c.option_data("AAPL", "US", None).await);
    assert_bad_request("real-time", c.price("AAPL", "US", None).await);
    assert_bad_request("eod", c.price_eod("AAPL", "US", None).await);
    assert_bad_request("exchanges", c.symbols_for_exchange("US", None).await);
    assert_bad_request(
        "technical",
        c.technical_indicator("AAPL", "US", "sma", 50, None).await,
    );

    mock.assert_hits(9);
}

#[tokio::test]
async fn server_error_body_is_kept_even_when_json() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/eod/FAIL.US");
        then.status(503)
            .header("content-type", "application/json")
            .body(r#"[{"date": "2024-01-02"}]"#);
    });

    let err = client_for(&server)
        .price_eod("FAIL", "US", None)
        .await
        .unwrap_err();
    mock.assert();

    assert_eq!(err.status(), Some(503));
    assert!(!err.is_transport());
    match err {
        EodError::Api { body, .. } => assert_eq!(body, r#"[{"date": "2024-01-02"}]"#),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_error_status_below_400_is_decoded() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/splits/AAPL.US");
        then.status(203).body("[]");
    });

    let splits = client_for(&server)
        .historical_splits("AAPL", "US", None)
        .await
        .unwrap();
    mock.assert();
    assert!(splits.is_empty());
}
