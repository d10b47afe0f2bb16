//! Core components of the `eodhd-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`EodClient`] and its builder.
//! - The primary [`EodError`] type.
//! - [`QueryParams`], the caller-side query parameters.
//! - The shared request/decode routine every endpoint goes through.

/// The main client (`EodClient`), builder, and configuration.
pub mod client;
/// Conversions from provider text/epoch values to decimals and datetimes.
pub mod conversions;
/// The primary error type (`EodError`) for the crate.
pub mod error;
/// Caller-supplied query parameters and the enums that fill them.
pub mod params;

pub(crate) mod net;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::EodClient`
pub use client::{EodClient, EodClientBuilder};
pub use error::EodError;
pub use params::{IntradayInterval, Order, Period, QueryParams};
