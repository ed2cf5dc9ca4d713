//! Error types for bridge quoting

use thiserror::Error;

/// Result type alias for quote operations
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Why a bridge quote could not be produced
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Transport failure talking to the quote API
    #[error("Quote request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Quote request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Quote API answered with a non-success status
    #[error("Quote API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("Failed to decode quote response: {0}")]
    Decode(String),

    /// Bridge refuses to relay this amount
    #[error("Amount too low to bridge")]
    AmountTooLow,

    /// Response decoded but cannot be used for a deposit
    #[error("Invalid quote: {0}")]
    InvalidQuote(String),

    #[error("Invalid quote API URL: {0}")]
    InvalidUrl(String),

    #[error("Quote request cancelled")]
    Cancelled,
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::Decode(err.to_string())
    }
}
