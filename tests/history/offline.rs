use chrono::{NaiveDate, TimeZone, Utc};
use eodhd_rs::{IntradayInterval, Order, Period, QueryParams};
use httpmock::{Method::GET, MockServer};

use crate::common::{TOKEN, client_for, mock_json};

#[tokio::test]
async fn offline_eod_keeps_provider_order() {
    let server = MockServer::start();
    let mock = mock_json(&server, "eod", "MCD.US");

    let bars = client_for(&server)
        .price_eod("MCD", "US", None)
        .await
        .unwrap();
    mock.assert();

    let dates: Vec<_> = bars.iter().map(|b| b.date.as_str()).collect();
    assert_eq!(dates, ["2024-01-02", "2024-01-03", "2024-01-04", "2024-01-05"]);
    assert!((bars[0].close - 296.78).abs() < 1e-9);
    assert!((bars[0].adjusted_close - 291.46).abs() < 1e-9);
    assert_eq!(bars[0].volume, 3_162_500);
    assert_eq!(bars[3].volume, 2_609_300, "integral float volume accepted");
}

#[tokio::test]
async fn offline_intraday_keeps_provider_order() {
    let server = MockServer::start();
    let mock = mock_json(&server, "intraday", "AAPL.US");

    let bars = client_for(&server)
        .intraday_data("AAPL", "US", None)
        .await
        .unwrap();
    mock.assert();

    let ts: Vec<_> = bars.iter().map(|b| b.timestamp).collect();
    assert_eq!(ts, [1_690_000_000, 1_690_000_300, 1_690_000_600]);
    assert_eq!(bars[0].datetime, "2023-07-22 04:26:40");
    assert_eq!(
        bars[0].datetime_utc(),
        Some(Utc.with_ymd_and_hms(2023, 7, 22, 4, 26, 40).unwrap())
    );
    assert_eq!(bars[2].volume, 0);
    assert_eq!(bars[2].adjusted_close, 0.0, "absent field is zero");
}

#[tokio::test]
async fn eod_range_params_reach_the_wire() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/eod/MCD.US")
            .query_param("api_token", TOKEN)
            .query_param("fmt", "json")
            .query_param("from", "2024-01-01")
            .query_param("to", "2024-01-31")
            .query_param("period", "w")
            .query_param("order", "d");
        then.status(200).body("[]");
    });

    let params = QueryParams::new()
        .from_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .to_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
        .period(Period::Weekly)
        .order(Order::Descending);
    let bars = client_for(&server)
        .price_eod("MCD", "US", Some(&params))
        .await
        .unwrap();
    mock.assert();
    assert!(bars.is_empty());
}

#[tokio::test]
async fn intraday_interval_and_bounds_reach_the_wire() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/intraday/AAPL.US")
            .query_param("interval", "5m")
            .query_param("from", "1690000000")
            .query_param("to", "1690086400");
        then.status(200).body("[]");
    });

    let params = QueryParams::new()
        .interval(IntradayInterval::Minute5)
        .from_timestamp(1_690_000_000)
        .to_timestamp(1_690_086_400);
    client_for(&server)
        .intraday_data("AAPL", "US", Some(&params))
        .await
        .unwrap();
    mock.assert();
}
