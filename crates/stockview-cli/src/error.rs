use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] stockview_core::ValidationError),

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error(transparent)]
    Server(#[from] stockview_web::WebError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Fetch(_) => 3,
            Self::Server(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
