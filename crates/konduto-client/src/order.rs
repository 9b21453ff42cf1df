//! Order client
//!
//! Facade over the three order endpoints:
//!
//! | Operation       | Request                          | Success value   |
//! |-----------------|----------------------------------|-----------------|
//! | `create`        | `POST {base}/v1/orders`          | `OrderResponse` |
//! | `change_status` | `PUT {base}/v1/orders/{id}`      | raw JSON body   |
//! | `load`          | `GET {base}/v1/orders/{id}`      | `OrderResponse` |
//!
//! `change_status` hands back the body untyped, unlike the other two.

use crate::config::KondutoConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::{HttpClient, ReqwestHttpClient};
use konduto_core::{ApiOutcome, CoreError, OrderRequest, OrderResponse, OrderStatusRequest};
use serde_json::Value;

/// Konduto order API client
pub struct OrderClient<C = ReqwestHttpClient> {
    http: C,
    endpoint: String,
}

impl OrderClient<ReqwestHttpClient> {
    /// Create a client talking to the configured domain over reqwest
    pub fn from_config(config: &KondutoConfig) -> ClientResult<Self> {
        let http = ReqwestHttpClient::new(config)?;
        Ok(Self::new(http, config.orders_endpoint()))
    }
}

impl<C: HttpClient> OrderClient<C> {
    /// Create a client over any transport
    ///
    /// `endpoint` is the orders base URL, see
    /// [`KondutoConfig::orders_endpoint`].
    pub fn new(http: C, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit an order for analysis
    ///
    /// The `order` object of the response is mapped field by field; the
    /// status is upper-cased before matching.
    pub async fn create(&self, payload: &OrderRequest) -> ClientResult<ApiOutcome<OrderResponse>> {
        let body = payload.to_json()?;
        tracing::info!("Creating Konduto order {}", payload.id);

        let outcome = self.http.post(&self.endpoint, &body).await?;

        outcome.try_map(|value| -> ClientResult<OrderResponse> {
            let order = value
                .get("order")
                .ok_or_else(|| CoreError::MissingField("order".to_string()))?;
            Ok(OrderResponse::from_summary(order)?)
        })
    }

    /// Move an order to a new status
    ///
    /// Returns the response body as sent by the API.
    pub async fn change_status(
        &self,
        order_id: &str,
        payload: &OrderStatusRequest,
    ) -> ClientResult<ApiOutcome<Value>> {
        let url = self.order_url(order_id)?;
        let body = payload.to_json()?;
        tracing::info!("Changing Konduto order {} to {}", order_id, payload.status());

        self.http.put(&url, &body).await
    }

    /// Fetch a previously analyzed order
    pub async fn load(&self, order_id: &str) -> ClientResult<ApiOutcome<OrderResponse>> {
        let url = self.order_url(order_id)?;
        tracing::info!("Loading Konduto order {}", order_id);

        let outcome = self.http.get(&url).await?;

        outcome.try_map(|value| -> ClientResult<OrderResponse> {
            let record = unwrap_order(value);
            serde_json::from_value(record).map_err(ClientError::from)
        })
    }

    // The id is encoded as given, surrounding whitespace included
    fn order_url(&self, order_id: &str) -> ClientResult<String> {
        if order_id.is_empty() {
            return Err(ClientError::InvalidOrderId(order_id.to_string()));
        }

        Ok(format!("{}/{}", self.endpoint, urlencoding::encode(order_id)))
    }
}

// The live API nests the record under "order"
fn unwrap_order(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.get("order").is_some_and(Value::is_object) => {
            map.remove("order").unwrap_or(Value::Null)
        }
        other => other,
    }
}
