//! # Application Errors
//!
//! Errors raised outside the calculation engine: terminal I/O, configuration
//! and output encoding. Engine errors pass through unchanged.

use calc_core::CalcError;
use thiserror::Error;

/// Errors that can occur in the calc binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// A calculation or engine construction failed.
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is missing, malformed or out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON output could not be produced.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
