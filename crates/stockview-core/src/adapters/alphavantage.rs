use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::date::parse_date;
use crate::http_client::{HttpClient, HttpRequest};
use crate::{DailyBar, QuoteError, Symbol};

/// Public Alpha Vantage query endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

const TIME_SERIES_FIELD: &str = "Time Series (Daily)";
const ERROR_FIELD: &str = "Error Message";
const ADVISORY_FIELDS: [&str; 2] = ["Note", "Information"];
const INVALID_CALL_MARKER: &str = "Invalid API call";

/// Client for the `TIME_SERIES_DAILY` endpoint.
#[derive(Clone)]
pub struct AlphaVantageClient {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl AlphaVantageClient {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        base_url: impl Into<String>,
        timeout_ms: u64,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    pub fn daily_series_url(&self, symbol: &Symbol, api_key: &str) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}function=TIME_SERIES_DAILY&symbol={}&outputsize=full&apikey={}",
            self.base_url,
            urlencoding::encode(symbol.as_str()),
            urlencoding::encode(api_key)
        )
    }

    /// Full daily history for `symbol`, oldest first.
    pub async fn fetch_daily_series(
        &self,
        symbol: &Symbol,
        api_key: &str,
    ) -> Result<Vec<DailyBar>, QuoteError> {
        let request = HttpRequest::get(self.daily_series_url(symbol, api_key))
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|error| {
            QuoteError::Unexpected(format!("alphavantage transport error: {}", error.message()))
        })?;

        if !response.is_success() {
            log::warn!(
                "alphavantage returned status {} for {}",
                response.status,
                symbol
            );
        }

        parse_daily_series(&response.body)
    }
}

/// Reshape a `TIME_SERIES_DAILY` payload into ascending daily bars.
pub fn parse_daily_series(body: &str) -> Result<Vec<DailyBar>, QuoteError> {
    let payload: Value = serde_json::from_str(body).map_err(|e| {
        QuoteError::Unexpected(format!("failed to parse alphavantage payload: {e}"))
    })?;

    if let Some(message) = text_field(&payload, ERROR_FIELD) {
        if message.contains(INVALID_CALL_MARKER) {
            return Err(QuoteError::SymbolNotFound);
        }
        return Err(QuoteError::Upstream(message));
    }

    let Some(series) = payload.get(TIME_SERIES_FIELD) else {
        if let Some(note) = ADVISORY_FIELDS
            .iter()
            .find_map(|field| text_field(&payload, field))
        {
            return Err(QuoteError::Upstream(note));
        }
        return Err(QuoteError::NoData);
    };

    let entries = BTreeMap::<String, AlphaVantageDailyBar>::deserialize(series).map_err(|e| {
        QuoteError::Unexpected(format!("failed to parse alphavantage time series: {e}"))
    })?;

    let mut bars = entries
        .into_iter()
        .map(|(date, raw)| raw.into_bar(&date))
        .collect::<Result<Vec<_>, _>>()?;
    // Keys are ISO dates, but order by the parsed value rather than by text.
    bars.sort_by_key(|bar| bar.date);
    bars.dedup_by_key(|bar| bar.date);
    Ok(bars)
}

fn text_field(payload: &Value, field: &str) -> Option<String> {
    let value = payload.get(field)?;
    let text = match value {
        Value::String(text) => text.clone(),
        Value::Null => return None,
        other => other.to_string(),
    };
    (!text.trim().is_empty()).then_some(text)
}

#[derive(Debug, Clone, Deserialize)]
struct AlphaVantageDailyBar {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
    #[serde(rename = "5. volume")]
    volume: String,
}

impl AlphaVantageDailyBar {
    fn into_bar(self, date: &str) -> Result<DailyBar, QuoteError> {
        let parsed_date = parse_date(date)
            .map_err(|e| QuoteError::Unexpected(format!("alphavantage series key: {e}")))?;

        Ok(DailyBar {
            date: parsed_date,
            open: parse_price(date, "open", &self.open)?,
            high: parse_price(date, "high", &self.high)?,
            low: parse_price(date, "low", &self.low)?,
            close: parse_price(date, "close", &self.close)?,
            volume: parse_volume(date, &self.volume)?,
        })
    }
}

fn parse_price(date: &str, field: &str, raw: &str) -> Result<f64, QuoteError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| QuoteError::Unexpected(format!("invalid {field} '{raw}' on {date}")))
}

fn parse_volume(date: &str, raw: &str) -> Result<u64, QuoteError> {
    let trimmed = raw.trim();
    if let Ok(volume) = trimmed.parse::<u64>() {
        return Ok(volume);
    }
    // Some feeds report volume as "1234.0".
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .map(|value| value.trunc() as u64)
        .ok_or_else(|| QuoteError::Unexpected(format!("invalid volume '{raw}' on {date}")))
}
