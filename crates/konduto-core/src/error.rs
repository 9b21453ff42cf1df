//! Error types for Konduto Core

use crate::types::OrderStatus;
use thiserror::Error;

/// Core error type
///
/// Raised when a value coming from (or going to) the API cannot be
/// converted into its typed representation.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid timestamp '{0}': expected YYYY-MM-DDTHH:MM:SSZ")]
    InvalidTimestamp(String),

    #[error("Invalid decimal: {0}")]
    InvalidDecimal(String),

    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    #[error("Unknown recommendation: {0}")]
    UnknownRecommendation(String),

    /// The status cannot be requested through a status update
    #[error("Order status {0} is not a valid status transition")]
    InvalidStatusTransition(OrderStatus),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
