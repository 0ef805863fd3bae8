//! # Stockview Core
//!
//! Domain types, series analytics, and the quote fetch proxy behind the
//! stockview chart viewer.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Alpha Vantage daily time-series client and payload reshaping |
//! | [`analytics`] | Trailing moving averages and day-over-day change |
//! | [`clock`] | Source of "today" for relative date windows |
//! | [`config`] | Proxy configuration and credential lookup |
//! | [`domain`] | Symbol, daily bars, moving-average periods, range selector |
//! | [`error`] | Validation and proxy error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`quote`] | Quote fetch proxy service |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stockview_core::{ProxyConfig, QuoteQuery, QuoteService, RangeSelector, ReqwestHttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let http_client = Arc::new(ReqwestHttpClient::new());
//!     let service = QuoteService::new(&ProxyConfig::default(), http_client);
//!     let response = service.fetch(&QuoteQuery::new("AAPL", RangeSelector::OneYear)).await?;
//!     println!("{} bars, change {:?}", response.series.len(), response.percentage_change);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every proxy failure is a [`QuoteError`] carrying its HTTP status:
//!
//! ```rust
//! use stockview_core::QuoteError;
//!
//! assert_eq!(QuoteError::MissingSymbol.status(), 400);
//! assert_eq!(QuoteError::NoData.status(), 404);
//! assert_eq!(QuoteError::MissingApiKey.status(), 500);
//! ```
//!
//! ## Security
//!
//! - The API key is resolved per request and only ever placed in the upstream URL
//! - Transport errors are reported without the request URL
//! - Symbols are validated before they reach the upstream query string

pub mod adapters;
pub mod analytics;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod quote;

pub use adapters::{parse_daily_series, AlphaVantageClient};
pub use analytics::{augment, percentage_change, simple_moving_average};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CredentialSource, ProxyConfig, DEFAULT_API_KEY_ENV};
pub use domain::{AugmentedBar, AveragePeriod, DailyBar, RangeSelector, Symbol};
pub use error::{QuoteError, ValidationError, SYMBOL_NOT_FOUND_MESSAGE, UNEXPECTED_FAILURE_MESSAGE};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use quote::{QuoteQuery, QuoteResponse, QuoteService};
