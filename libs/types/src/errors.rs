//! Error types for message encoding
//!
//! Encoding has one failure mode: a field outside its declared domain.
//! Malformed integer text is rejected earlier, while parsing.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors raised while building a message hash.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// A field value outside `[low, high)`. Always raised before any hashing.
    #[error("{field} out of range: {value} not in [{low}, {high})")]
    RangeViolation {
        field: String,
        value: BigInt,
        low: BigInt,
        high: BigInt,
    },

    #[error("Invalid integer for {field}: {input:?}")]
    InvalidInteger { field: String, input: String },

    /// A parameter document that does not deserialize; `path` is the JSON key path.
    #[error("Malformed parameters at {path}: {reason}")]
    MalformedParams { path: String, reason: String },
}

impl MessageError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            MessageError::RangeViolation { field, .. } => field,
            MessageError::InvalidInteger { field, .. } => field,
            MessageError::MalformedParams { path, .. } => path,
        }
    }
}

/// Result alias used across the message crates.
pub type MessageResult<T> = Result<T, MessageError>;
