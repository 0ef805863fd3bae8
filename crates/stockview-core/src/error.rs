use thiserror::Error;

/// Message returned when the upstream provider rejects the symbol as an invalid call.
pub const SYMBOL_NOT_FOUND_MESSAGE: &str =
    "指定された銘柄コードが見つかりません。正しい銘柄コードを入力してください。";

/// Message returned for failures whose detail stays server-side.
pub const UNEXPECTED_FAILURE_MESSAGE: &str = "Failed to fetch stock data";

/// Validation and contract errors exposed by `stockview-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid range '{value}', expected one of 1m, 3m, 6m, 1y, 5y, full")]
    InvalidRange { value: String },
    #[error("invalid moving average period '{value}', expected one of 5, 25, 75, 200")]
    InvalidAveragePeriod { value: String },

    #[error("date must be formatted as YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
}

/// Failure kinds of a single quote fetch, each terminal for its request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("Symbol is required")]
    MissingSymbol,
    #[error("{0}")]
    InvalidSymbol(ValidationError),
    #[error("{}", SYMBOL_NOT_FOUND_MESSAGE)]
    SymbolNotFound,
    #[error("{0}")]
    Upstream(String),
    #[error("No data found for this symbol")]
    NoData,
    #[error("API key not configured")]
    MissingApiKey,
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl QuoteError {
    /// HTTP status code the proxy answers with.
    pub const fn status(&self) -> u16 {
        match self {
            Self::MissingSymbol
            | Self::InvalidSymbol(_)
            | Self::SymbolNotFound
            | Self::Upstream(_) => 400,
            Self::NoData => 404,
            Self::MissingApiKey | Self::Unexpected(_) => 500,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingSymbol => "quote.missing_symbol",
            Self::InvalidSymbol(_) => "quote.invalid_symbol",
            Self::SymbolNotFound => "quote.symbol_not_found",
            Self::Upstream(_) => "quote.upstream_error",
            Self::NoData => "quote.no_data",
            Self::MissingApiKey => "quote.missing_api_key",
            Self::Unexpected(_) => "quote.unexpected",
        }
    }

    /// Text placed in the `error` field of the response body.
    ///
    /// Unexpected failures collapse to a generic message; their detail is only logged.
    pub fn public_message(&self) -> String {
        match self {
            Self::Unexpected(_) => String::from(UNEXPECTED_FAILURE_MESSAGE),
            other => other.to_string(),
        }
    }
}
