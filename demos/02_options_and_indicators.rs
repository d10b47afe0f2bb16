use eodhd_rs::{EodClient, EodError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("EODHD_API_TOKEN").unwrap_or_else(|_| "demo".to_string());
    let client = EodClient::new(token)?;

    // Options chain: contracts grouped by expiration.
    match client.option_data("AAPL", "US", None).await {
        Ok(chain) => {
            if let Some(next) = chain.data.first() {
                println!(
                    "{} expiring {}: {} calls, {} puts",
                    chain.code,
                    next.expiration_date,
                    next.options.call.len(),
                    next.options.put.len()
                );
                for c in next.options.call.iter().filter(|c| c.is_in_the_money()).take(3) {
                    println!("  {} strike {} bid {} ask {}", c.contract_name, c.strike, c.bid, c.ask);
                }
            }
        }
        Err(EodError::Api { status, body }) => {
            eprintln!("options not available for this token ({status}): {body}");
        }
        Err(e) => return Err(e.into()),
    }

    // 50-day simple moving average.
    let sma = client.technical_indicator("AAPL", "US", "sma", 50, None).await?;
    if let Some(last) = sma.last() {
        println!("AAPL SMA(50) on {}: {:.2}", last.date, last.sma);
    }

    Ok(())
}
