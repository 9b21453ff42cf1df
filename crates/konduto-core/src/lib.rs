//! Konduto Core - Resource types for the Konduto order API
//!
//! This crate provides the value types shared by the Konduto client:
//! - Order request and response resources
//! - The success/failure outcome of an API call
//! - Field conversion hooks for dates, timestamps and decimals
//! - Error types
//!
//! Nothing here performs I/O.

pub mod error;
pub mod hooks;
pub mod outcome;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use outcome::{ApiError, ApiOutcome};
pub use types::{
    Address, CartItem, Customer, OrderRequest, OrderResponse, OrderStatus, OrderStatusRequest,
    Payment, PaymentStatus, PaymentType, Recommendation,
};
