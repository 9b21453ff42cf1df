//! Client error types
//!
//! These cover everything that prevents a call from producing an
//! [`ApiOutcome`](konduto_core::ApiOutcome): bad configuration, transport
//! failures and bodies that cannot be mapped onto the resource types.
//! Errors reported by the API itself are not represented here.

use konduto_core::CoreError;
use thiserror::Error;

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure (connection, timeout, TLS...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be deserialized
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Field conversion failed
    #[error("Conversion error: {0}")]
    Core(#[from] CoreError),

    #[error("Invalid order id: {0:?}")]
    InvalidOrderId(String),
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::Config(err.to_string())
    }
}
