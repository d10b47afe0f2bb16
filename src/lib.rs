//! eodhd-rs: typed async client for the EOD Historical Data API.
//!
//! Every endpoint is a method on [`EodClient`]: dividends, splits, short
//! interest, intraday and end-of-day bars, options chains, real-time quotes,
//! exchange symbol lists and technical indicators. [`Ticker`] binds one
//! symbol and exchange for convenience.
//!
//! ```no_run
//! # use eodhd_rs::{EodClient, QueryParams, Order};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = EodClient::new("demo")?;
//! let params = QueryParams::new().order(Order::Descending);
//! let bars = client.price_eod("MCD", "US", Some(&params)).await?;
//! println!("latest close: {:?}", bars.first().map(|b| b.close));
//! # Ok(())
//! # }
//! ```

pub mod core;

pub mod actions;
pub mod exchange;
pub mod history;
pub mod options;
pub mod quote;
pub mod technical;
pub mod ticker;

pub use crate::core::{EodClient, EodClientBuilder, EodError, IntradayInterval, Order, Period, QueryParams};

pub use actions::{Dividend, ShortInterest, Split};
pub use exchange::Symbol;
pub use history::{IntradayData, PriceEOD};
pub use options::{OptionContract, OptionData, OptionExpiration, OptionSides};
pub use quote::Price;
pub use technical::TechnicalIndicator;
pub use ticker::Ticker;
