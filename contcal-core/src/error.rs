//! Error types for contcal.

use thiserror::Error;

/// Errors that can occur in contcal operations.
///
/// The pure calendar core (classification, grid building, interval
/// transitions, query-string decoding) has no fatal paths; these variants
/// cover configuration loading.
#[derive(Error, Debug)]
pub enum ContCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for contcal operations.
pub type ContCalResult<T> = Result<T, ContCalError>;
