use std::sync::Arc;

use serde_json::Value;
use stockview_core::{HttpClient, HttpRequest, QuoteResponse};

use crate::error::{FetchError, FETCH_FAILED_MESSAGE};
use crate::state::FetchRequest;

/// Proxy endpoint used when none is given.
pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:3000/api/stock";

/// Calls the quote proxy on behalf of the chart view. Every call goes to the
/// network; nothing is cached between submits.
#[derive(Clone)]
pub struct QuoteClient {
    http_client: Arc<dyn HttpClient>,
    endpoint: String,
    timeout_ms: u64,
}

impl QuoteClient {
    pub fn new(http_client: Arc<dyn HttpClient>, endpoint: impl Into<String>) -> Self {
        Self {
            http_client,
            endpoint: endpoint.into(),
            timeout_ms: 10_000,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn request_url(&self, request: &FetchRequest) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}symbol={}&range={}",
            self.endpoint,
            urlencoding::encode(&request.symbol),
            request.range.as_str()
        )
    }

    pub async fn fetch(&self, request: &FetchRequest) -> Result<QuoteResponse, FetchError> {
        let http_request = HttpRequest::get(self.request_url(request))
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        let response = self
            .http_client
            .execute(http_request)
            .await
            .map_err(|error| FetchError::Transport(error.message().to_owned()))?;

        if response.is_success() {
            return serde_json::from_str::<QuoteResponse>(&response.body)
                .map_err(|error| FetchError::Malformed(error.to_string()));
        }

        let body = serde_json::from_str::<Value>(&response.body)
            .map_err(|error| FetchError::Malformed(error.to_string()))?;
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .unwrap_or(FETCH_FAILED_MESSAGE);

        Err(FetchError::Rejected {
            status: response.status,
            message: message.to_owned(),
        })
    }
}
