//! Upstream market-data adapters.

pub mod alphavantage;

pub use alphavantage::{parse_daily_series, AlphaVantageClient};
