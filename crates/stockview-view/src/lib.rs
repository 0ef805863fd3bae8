//! # Stockview View
//!
//! The chart view as a plain state holder: user input and fetch completion
//! drive [`ViewState`] transitions, [`Screen::from_state`] derives what to
//! show, and [`render_svg`] / [`render_text`] draw it.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stockview_core::{RangeSelector, ReqwestHttpClient};
//! use stockview_view::{render_text, QuoteClient, Screen, ViewState, DEFAULT_PROXY_URL};
//!
//! let mut view = ViewState::new();
//! view.set_symbol("aapl");
//! view.set_range(RangeSelector::OneYear);
//!
//! let client = QuoteClient::new(Arc::new(ReqwestHttpClient::new()), DEFAULT_PROXY_URL);
//! if let Some(request) = view.submit() {
//!     let outcome = client.fetch(&request).await;
//!     view.complete(outcome);
//! }
//! println!("{}", render_text(&Screen::from_state(&view)));
//! ```

pub mod chart;
pub mod client;
pub mod error;
pub mod render;
pub mod state;

pub use chart::{ChangeBadge, ChartFrame, ChartLine, ChartPoint, Screen, Tone, NO_DATA_MESSAGE};
pub use client::{QuoteClient, DEFAULT_PROXY_URL};
pub use error::{FetchError, FETCH_FAILED_MESSAGE, UNEXPECTED_ERROR_MESSAGE};
pub use render::{render_svg, render_text};
pub use state::{FetchRequest, Phase, ViewState};
