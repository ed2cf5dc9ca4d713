//! Encoding and decoding errors
//!
//! Encoding failures indicate malformed inputs from the caller (a programming
//! error upstream), not a runtime condition to recover from.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Debug, Error)]
pub enum CodecError {
    /// Tokens did not match the function's parameter types
    #[error("ABI encoding failed for {function}: {source}")]
    Encode {
        function: String,
        #[source]
        source: ethabi::Error,
    },

    #[error("ABI decoding failed for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: ethabi::Error,
    },

    #[error("Calldata for {function} too short: {len} bytes")]
    CalldataTooShort { function: String, len: usize },

    #[error("Selector mismatch for {function}: expected 0x{expected}, got 0x{got}")]
    SelectorMismatch {
        function: String,
        expected: String,
        got: String,
    },

    /// Decoded token had an unexpected ABI type
    #[error("Unexpected ABI value for {field}")]
    UnexpectedToken { field: &'static str },

    #[error("Value for {field} does not fit in {bits} bits: {value}")]
    ValueOutOfRange {
        field: &'static str,
        bits: usize,
        value: String,
    },

    #[error("Recipient list is empty")]
    EmptyRecipients,
}
