//! Core error types for the metrics engine.
//!
//! Every failure in the engine is a validation rejection that the caller can
//! recover from by re-prompting the user. Storage-specific errors are wrapped
//! in string form by the storage layer to keep this type storage-agnostic.

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the metrics engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Precondition violations on aggregate calculator input.
///
/// Each variant carries enough context for the caller to display a
/// human-readable reason, including the offending computed total where one
/// exists.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing or zero value for required field '{0}'")]
    MissingField(String),

    #[error("Holding {index}: missing or zero value for required field '{field}'")]
    InvalidHolding { index: usize, field: String },

    #[error("Total allocation must equal 100%. Current total: {0}%")]
    AllocationSum(Decimal),

    #[error("At least one holding is required")]
    EmptyHoldings,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
