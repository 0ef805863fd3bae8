//! # Stockview Web
//!
//! HTTP surface of the quote fetch proxy.
//!
//! | Method | Path | Query | Success | Errors |
//! |--------|------|-------|---------|--------|
//! | GET | `{base_path}/api/stock` | `symbol`, `range` | `{"stockData": [...], "percentageChange": n \| null}` | `{"error": "..."}` with 400, 404, 500 |
//!
//! When a static directory is configured, every other path under the base path
//! is served from it, which is how an exported front-end is hosted next to the API.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use stockview_core::{HttpClient, QuoteService, ReqwestHttpClient};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub use config::{ServerConfig, DEFAULT_BIND};
pub use error::{ApiError, ErrorBody, WebError};
pub use routes::StockParams;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    service: Arc<QuoteService>,
}

impl AppState {
    pub fn new(service: QuoteService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// State backed by the production reqwest transport.
    pub fn from_config(config: &ServerConfig) -> Self {
        let http_client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
        Self::new(QuoteService::new(&config.proxy, http_client))
    }

    pub fn service(&self) -> &QuoteService {
        &self.service
    }
}

pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/api/stock", get(routes::stock_quote))
        .with_state(state);

    if let Some(dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    if let Some(base_path) = config.normalized_base_path() {
        app = Router::new().nest(&base_path, app);
    }

    if config.cors {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: ServerConfig, state: AppState) -> Result<(), WebError> {
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|source| WebError::Bind {
            addr: config.bind,
            source,
        })?;

    log::info!(
        "quote proxy listening on http://{}{}",
        listener.local_addr()?,
        config.stock_route()
    );
    if config.proxy.credentials.resolve().is_none() {
        log::warn!("no upstream API key configured; requests will fail with status 500");
    }

    axum::serve(listener, router(state, &config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("quote proxy stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {error}");
        std::future::pending::<()>().await;
    }
}
