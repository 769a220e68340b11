use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the widget grid crate.
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors surfaced by configuration loading and preview rendering.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("category table parse error: {0}")]
    CategoryTable(#[from] serde_json::Error),
    #[error("invalid color `{0}`, expected #rrggbb")]
    InvalidColor(String),
    #[error("category rule keyword must not be empty")]
    EmptyKeyword,
    #[error("logging failure: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
