use thiserror::Error;

/// Shown when the proxy rejects a request without an `error` field.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch stock data";

/// Shown when the exchange fails or the body cannot be read.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Failure of one view-to-proxy round trip.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("proxy answered {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed proxy response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Text the view displays; no classification beyond the message itself.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Transport(_) | Self::Malformed(_) => String::from(UNEXPECTED_ERROR_MESSAGE),
        }
    }
}
