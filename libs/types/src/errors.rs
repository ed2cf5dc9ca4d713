//! Validation errors for parsing wire values into typed data

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Permit type name not recognised by the execution network
    #[error("Unknown permit type: {0}")]
    UnknownPermitType(String),

    /// Permit type wire id outside 0..=2
    #[error("Unknown permit type id: {0}")]
    UnknownPermitTypeId(u8),
}
