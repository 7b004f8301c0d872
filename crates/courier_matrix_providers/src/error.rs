use thiserror::Error;

/// A failed or malformed matrix fetch. Fatal for the optimization run that
/// requested it; there is no retry and no partial result.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("matrix API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("matrix service rejected the request: {0}")]
    Service(String),

    #[error("failed to decode matrix response: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("expected a {expected}x{expected} travel matrix, got {actual} rows")]
    Dimensions { expected: usize, actual: usize },

    #[error("travel matrix cell ({from}, {to}) is missing or not finite")]
    InvalidCell { from: usize, to: usize },
}
