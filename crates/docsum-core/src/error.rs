//! Error types for docsum.

use thiserror::Error;

/// Result type alias using docsum's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for docsum operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid startup configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-success HTTP status or network failure from the document service
    #[error("Request error: {0}")]
    Request(String),

    /// Generation/inference failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// Remote payload violated the expected shape (missing id, empty content)
    #[error("Malformed data: {0}")]
    MalformedData(String),

    /// A bounded request exceeded its deadline
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Invalid CLI argument or caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
