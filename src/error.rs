//! Error types for Wellspring

use thiserror::Error;

/// Errors that can occur during validation or analysis
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Date parse error: {0}")]
    DateParseError(String),

    #[error("Empty input: {0}")]
    EmptyInput(&'static str),

    #[error("Computation error: {0}")]
    ComputationError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}
