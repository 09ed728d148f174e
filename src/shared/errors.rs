use serde::Serialize;
use thiserror::Error;

/// Failure raised while reading or understanding an external source.
///
/// Every variant carries the human-readable message shown to whoever
/// requested the import. A failure is terminal for the current call; no
/// retry information is attached.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum BulkImportError {
    #[error("{0}")]
    PermissionDenied(String),

    #[error("{0}")]
    WrongContentType(String),

    #[error("{0}")]
    MalformedSource(String),

    #[error("{0}")]
    SourceFailure(String),

    #[error("Unknown import source: {0}")]
    UnknownSource(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<reqwest::Error> for BulkImportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BulkImportError::Transport("Request timeout".to_string())
        } else if err.is_connect() {
            BulkImportError::Transport("Failed to connect to the source".to_string())
        } else {
            BulkImportError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for BulkImportError {
    fn from(err: serde_json::Error) -> Self {
        BulkImportError::MalformedSource(format!("Invalid JSON payload: {}", err))
    }
}

impl From<csv::Error> for BulkImportError {
    fn from(err: csv::Error) -> Self {
        BulkImportError::MalformedSource(format!("Invalid CSV row: {}", err))
    }
}

// Result type alias for convenience
pub type ImportResult<T> = Result<T, BulkImportError>;
