//! Konduto resources
//!
//! This module contains the order resources exchanged with the API:
//! - Request payloads
//! - The analyzed order record
//! - Status and recommendation enums

pub mod request;
pub mod response;
pub mod status;

pub use request::{
    Address, CartItem, Customer, OrderRequest, OrderStatusRequest, Payment, PaymentStatus,
    PaymentType,
};
pub use response::OrderResponse;
pub use status::{OrderStatus, Recommendation};
