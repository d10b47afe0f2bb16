use eodhd_rs::{EodClient, EodError};
use std::net::TcpListener;
use std::time::Duration;
use url::Url;

/// A local address nothing listens on.
fn refused_base() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap()
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let client = EodClient::builder("test-token")
        .base_url(refused_base())
        .connect_timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.price("AAPL", "US", None).await.unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {err:?}");
    assert!(matches!(err, EodError::Http(_)));
    assert_eq!(err.status(), None);
}

#[test]
fn debug_output_redacts_token() {
    let client = EodClient::new("super-secret").unwrap();
    let dbg = format!("{client:?}");
    assert!(!dbg.contains("super-secret"), "{dbg}");
    assert_eq!(client.api_token(), "super-secret");
    assert_eq!(client.base_url().as_str(), "https://eodhistoricaldata.com/");
}
