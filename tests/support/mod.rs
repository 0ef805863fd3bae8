//! Shared doubles and fixtures for the behavior tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use serde_json::{json, Map, Value};
use stockview_core::{HttpClient, HttpError, HttpRequest, HttpResponse};
use time::{Date, Duration};

/// Upstream double that replays scripted responses in order and records requests.
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn json(body: impl Into<String>) -> Arc<Self> {
        Self::new(vec![Ok(HttpResponse::ok_json(body))])
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Self::new(vec![Err(HttpError::new(message))])
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests().len()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .push(request);
        let response = self
            .responses
            .lock()
            .expect("script should not be poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::new("no scripted response left")));
        Box::pin(async move { response })
    }
}

/// `count` consecutive calendar days ending on `last`, oldest first.
pub fn consecutive_days(last: Date, count: usize) -> Vec<Date> {
    (0..count)
        .rev()
        .map(|offset| last - Duration::days(offset as i64))
        .collect()
}

/// Alpha Vantage `TIME_SERIES_DAILY` body for the given (date, close) pairs,
/// keyed newest first as the provider sends it.
pub fn daily_payload(symbol: &str, closes: &[(Date, f64)]) -> String {
    let mut series = Map::new();
    for (date, close) in closes.iter().rev() {
        series.insert(
            date.to_string(),
            json!({
                "1. open": format!("{:.4}", close - 0.5),
                "2. high": format!("{:.4}", close + 1.0),
                "3. low": format!("{:.4}", close - 1.0),
                "4. close": format!("{close:.4}"),
                "5. volume": "1200000",
            }),
        );
    }

    json!({
        "Meta Data": {
            "1. Information": "Daily Prices (open, high, low, close) and Volumes",
            "2. Symbol": symbol,
        },
        "Time Series (Daily)": Value::Object(series),
    })
    .to_string()
}

/// Closes rising by 0.25 per day from 100.
pub fn rising_closes(days: &[Date]) -> Vec<(Date, f64)> {
    days.iter()
        .enumerate()
        .map(|(index, date)| (*date, 100.0 + index as f64 * 0.25))
        .collect()
}
