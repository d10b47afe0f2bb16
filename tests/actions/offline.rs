use eodhd_rs::{EodError, QueryParams};
use httpmock::{Method::GET, MockServer};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::common::{TOKEN, client_for, mock_json};

#[tokio::test]
async fn offline_dividends_from_fixture() {
    let server = MockServer::start();
    let mock = mock_json(&server, "div", "AAPL.US");

    let client = client_for(&server);
    let divs = client.historical_dividends("AAPL", "US", None).await.unwrap();
    mock.assert();

    assert_eq!(divs.len(), 4);
    let dates: Vec<_> = divs.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, ["2023-11-10", "2023-08-11", "2023-05-12", "2023-02-10"]);

    let oldest = divs.last().unwrap();
    assert_eq!(oldest.value, "0.2300", "numeric value keeps provider formatting");
    assert_eq!(oldest.value_decimal(), Some(Decimal::from_str("0.23").unwrap()));
    assert_eq!(oldest.declaration_date, "2023-02-02");
    assert_eq!(oldest.payment_date, "2023-02-16");
    assert_eq!(oldest.record_date, "2023-02-13");
    assert_eq!(oldest.currency.as_deref(), Some("USD"));
    assert_eq!(oldest.unadjusted_value.as_deref(), Some("0.23"));
}

#[tokio::test]
async fn offline_splits_keep_provider_order() {
    let server = MockServer::start();
    let mock = mock_json(&server, "splits", "AAPL.US");

    let client = client_for(&server);
    let splits = client.historical_splits("AAPL", "US", None).await.unwrap();
    mock.assert();

    let dates: Vec<_> = splits.iter().map(|s| s.date.as_str()).collect();
    assert_eq!(
        dates,
        ["1987-06-16", "2000-06-21", "2005-02-28", "2014-06-09", "2020-08-31"]
    );
    assert_eq!(splits[4].split, "4.000000/1.000000");
}

#[tokio::test]
async fn offline_short_interest_keeps_provider_order() {
    let server = MockServer::start();
    let mock = mock_json(&server, "shorts", "AAPL.US");

    let client = client_for(&server);
    let shorts = client
        .historical_short_interest("AAPL", "US", None)
        .await
        .unwrap();
    mock.assert();

    assert_eq!(shorts.len(), 3);
    assert_eq!(shorts[0].date, "2023-10-13");
    assert_eq!(shorts[0].short, 101_263_571);
    assert_eq!(shorts[1].volume, 58_499_129);
    assert_eq!(shorts[2].volume, 0, "null volume decodes as zero");
}

#[tokio::test]
async fn caller_params_are_forwarded() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/splits/AAPL.US")
            .query_param("api_token", TOKEN)
            .query_param("fmt", "json")
            .query_param("from", "2000-01-01");
        then.status(200).body("[]");
    });

    let client = client_for(&server);
    let params = QueryParams::new().insert("from", "2000-01-01");
    let splits = client
        .historical_splits("AAPL", "US", Some(&params))
        .await
        .unwrap();
    mock.assert();
    assert!(splits.is_empty());
}

#[tokio::test]
async fn mandatory_params_win_over_caller_collisions() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/shorts/AAPL.US")
            .query_param("api_token", TOKEN)
            .query_param("fmt", "json");
        then.status(200).body("[]");
    });

    let client = client_for(&server);
    let params = QueryParams::new()
        .insert("api_token", "someone-else")
        .insert("fmt", "csv");
    client
        .historical_short_interest("AAPL", "US", Some(&params))
        .await
        .unwrap();
    mock.assert();

    // the caller's map itself is untouched
    assert_eq!(params.get("fmt"), Some("csv"));
}

#[tokio::test]
async fn short_interest_shape_mismatch_is_data_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/shorts/AAPL.US");
        then.status(200).body(r#"{"date": "2023-10-13"}"#);
    });

    let client = client_for(&server);
    let err = client
        .historical_short_interest("AAPL", "US", None)
        .await
        .unwrap_err();
    mock.assert();

    match err {
        EodError::Data(msg) => assert!(msg.starts_with("shorts json parse"), "{msg}"),
        other => panic!("expected Data error, got {other:?}"),
    }
}
