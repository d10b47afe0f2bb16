use chrono::{Duration, Utc};
use eodhd_rs::{EodClient, Order, QueryParams};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // The provider's `demo` token works for a handful of tickers such as AAPL.US and MCD.US.
    let token = std::env::var("EODHD_API_TOKEN").unwrap_or_else(|_| "demo".to_string());
    let client = EodClient::builder(token)
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    // 1. Latest delayed quote.
    let aapl = client.ticker("AAPL", "US");
    let quote = aapl.price(None).await?;
    println!(
        "{}: {:.2} ({:+.2}%)",
        quote.code, quote.close, quote.change_percentage
    );

    // 2. Last month of daily bars, newest first.
    let today = Utc::now().date_naive();
    let params = QueryParams::new()
        .from_date(today - Duration::days(30))
        .to_date(today)
        .order(Order::Descending);
    let bars = client.price_eod("MCD", "US", Some(&params)).await?;
    for bar in bars.iter().take(5) {
        println!("MCD {} close {:.2} vol {}", bar.date, bar.close, bar.volume);
    }

    // 3. Corporate actions.
    let dividends = aapl.dividends(None).await?;
    if let Some(latest) = dividends.first() {
        println!("AAPL latest dividend: {} paid {}", latest.value, latest.payment_date);
    }
    let splits = aapl.splits(None).await?;
    println!("AAPL has split {} times", splits.len());

    Ok(())
}
