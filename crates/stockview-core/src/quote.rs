//! Quote fetch proxy: validate the query, pull the daily series upstream,
//! trim it to the requested window, and summarise the latest move.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::adapters::AlphaVantageClient;
use crate::analytics::percentage_change;
use crate::clock::{Clock, SystemClock};
use crate::config::{CredentialSource, ProxyConfig};
use crate::http_client::HttpClient;
use crate::{DailyBar, QuoteError, RangeSelector, Symbol, ValidationError};

/// Inbound proxy query as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteQuery {
    pub symbol: Option<String>,
    pub range: RangeSelector,
}

impl QuoteQuery {
    pub fn new(symbol: impl Into<String>, range: RangeSelector) -> Self {
        Self {
            symbol: Some(symbol.into()),
            range,
        }
    }

    /// Build from raw query parameters; an unknown range falls back to full history.
    pub fn from_params(symbol: Option<&str>, range: Option<&str>) -> Self {
        Self {
            symbol: symbol.map(str::to_owned),
            range: RangeSelector::from_query(range),
        }
    }

    fn validated_symbol(&self) -> Result<Symbol, QuoteError> {
        let raw = self.symbol.as_deref().unwrap_or_default();
        Symbol::parse(raw).map_err(|error| match error {
            ValidationError::EmptySymbol => QuoteError::MissingSymbol,
            other => QuoteError::InvalidSymbol(other),
        })
    }
}

/// Success envelope returned by the proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    #[serde(rename = "stockData")]
    pub series: Vec<DailyBar>,
    #[serde(rename = "percentageChange")]
    pub percentage_change: Option<f64>,
}

impl QuoteResponse {
    pub fn from_series(series: Vec<DailyBar>) -> Self {
        let percentage_change = percentage_change(&series);
        Self {
            series,
            percentage_change,
        }
    }
}

/// Transport-independent quote proxy.
#[derive(Clone)]
pub struct QuoteService {
    upstream: AlphaVantageClient,
    credentials: CredentialSource,
    clock: Arc<dyn Clock>,
}

impl QuoteService {
    pub fn new(config: &ProxyConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            upstream: AlphaVantageClient::new(
                http_client,
                config.upstream_url.clone(),
                config.timeout_ms,
            ),
            credentials: config.credentials.clone(),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Run one proxy request end to end. No retries; every error is final.
    pub async fn fetch(&self, query: &QuoteQuery) -> Result<QuoteResponse, QuoteError> {
        let symbol = query.validated_symbol()?;
        let api_key = self.credentials.resolve().ok_or(QuoteError::MissingApiKey)?;

        let series = self.upstream.fetch_daily_series(&symbol, &api_key).await?;
        let total = series.len();
        let series = query.range.apply(series, self.clock.today());
        log::debug!(
            "{symbol}: kept {} of {total} bars for range {}",
            series.len(),
            query.range
        );

        Ok(QuoteResponse::from_series(series))
    }
}
