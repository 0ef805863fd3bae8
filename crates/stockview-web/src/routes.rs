use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use stockview_core::QuoteQuery;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

/// Query parameters of `GET /api/stock`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StockParams {
    pub symbol: Option<String>,
    pub range: Option<String>,
}

impl StockParams {
    /// First occurrence of each known key wins; repeats and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "symbol" => &mut params.symbol,
                "range" => &mut params.range,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

pub async fn stock_quote(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params = StockParams::from_pairs(pairs);
    let request_id = Uuid::new_v4();
    let query = QuoteQuery::from_params(params.symbol.as_deref(), params.range.as_deref());

    match state.service().fetch(&query).await {
        Ok(response) => {
            log::info!(
                "request_id={request_id} symbol={:?} range={} status=200 bars={}",
                params.symbol,
                query.range,
                response.series.len()
            );
            Json(response).into_response()
        }
        Err(error) => {
            if error.status() >= 500 {
                log::error!(
                    "request_id={request_id} symbol={:?} status={} code={} error={error}",
                    params.symbol,
                    error.status(),
                    error.code()
                );
            } else {
                log::warn!(
                    "request_id={request_id} symbol={:?} status={} code={} error={error}",
                    params.symbol,
                    error.status(),
                    error.code()
                );
            }
            ApiError(error).into_response()
        }
    }
}
