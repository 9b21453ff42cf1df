//! Konduto order API client
//!
//! This crate talks to the Konduto fraud-detection API:
//! - **HTTP client base**: [`HttpClient`] trait and the reqwest-backed
//!   [`ReqwestHttpClient`]
//! - **Order client**: [`OrderClient`] with `create`, `change_status` and
//!   `load`
//! - **Configuration**: [`KondutoConfig`] loaded from `.env`, config file and
//!   `KONDUTO_*` environment variables
//!
//! # Quick Start
//!
//! ```no_run
//! use konduto_client::{ApiOutcome, KondutoConfig, OrderClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = KondutoConfig::load()?;
//!     let client = OrderClient::from_config(&config)?;
//!
//!     match client.load("ORD-2014-0001").await? {
//!         ApiOutcome::Success(order) => println!("{} scored {}", order.id, order.score),
//!         ApiOutcome::Failure(error) => eprintln!("rejected: {}", error),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! API failures come back as [`ApiOutcome::Failure`]; only transport,
//! configuration and parsing problems are returned as [`ClientError`].

pub mod config;
pub mod error;
pub mod http;
pub mod order;

pub use config::KondutoConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, ReqwestHttpClient};
pub use order::OrderClient;

// Re-export the resource types so callers need a single dependency
pub use konduto_core::{
    hooks, ApiError, ApiOutcome, CoreError, OrderRequest, OrderResponse, OrderStatus,
    OrderStatusRequest, Recommendation,
};
