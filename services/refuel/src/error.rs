//! Error types for refuel payload construction

use refuel_codec::CodecError;
use refuel_config::ChainConfigError;
use thiserror::Error;

/// Result type alias for refuel operations
pub type Result<T> = std::result::Result<T, RefuelError>;

#[derive(Debug, Error)]
pub enum RefuelError {
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(u64),

    /// Request rejected before any encoding
    #[error("Invalid refuel request: {0}")]
    InvalidRequest(String),

    /// A chain is known but lacks an address the payload needs
    #[error(transparent)]
    ChainConfig(#[from] ChainConfigError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Refuel build cancelled")]
    Cancelled,
}
