//! HTTP client base
//!
//! [`HttpClient`] is the seam between the order facade and the transport.
//! Every call resolves to an [`ApiOutcome`]: 2xx responses become
//! `Success` with the JSON body, any other status becomes `Failure` with the
//! body the API returned. Only transport problems are reported as `Err`.

use crate::config::KondutoConfig;
use crate::error::ClientResult;
use async_trait::async_trait;
use konduto_core::{ApiError, ApiOutcome};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;

/// Async JSON transport used by [`OrderClient`](crate::OrderClient)
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> ClientResult<ApiOutcome<Value>>;

    async fn post(&self, url: &str, body: &Value) -> ClientResult<ApiOutcome<Value>>;

    async fn put(&self, url: &str, body: &Value) -> ClientResult<ApiOutcome<Value>>;
}

/// reqwest-backed transport authenticating with the private API key
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: Client,
    api_key: String,
}

impl ReqwestHttpClient {
    /// Create a transport from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the underlying
    /// client cannot be built.
    pub fn new(config: &KondutoConfig) -> ClientResult<Self> {
        let api_key = config.require_api_key()?.to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, api_key })
    }

    /// Send a prepared request and classify the response
    async fn send(
        &self,
        method: &str,
        url: &str,
        request: RequestBuilder,
    ) -> ClientResult<ApiOutcome<Value>> {
        tracing::debug!("Konduto {} {}", method, url);

        let response = request
            .basic_auth(&self.api_key, None::<&str>)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        tracing::debug!("Konduto {} {} -> {}", method, url, status);

        if status.is_success() {
            let body = if text.trim().is_empty() {
                Value::Null
            } else {
                serde_json::from_str(&text)?
            };
            return Ok(ApiOutcome::Success(body));
        }

        // Error bodies are passed through, JSON or not
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        tracing::warn!("Konduto {} {} failed with status {}", method, url, status);

        Ok(ApiOutcome::Failure(ApiError::new(status.as_u16(), body)))
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> ClientResult<ApiOutcome<Value>> {
        self.send("GET", url, self.client.get(url)).await
    }

    async fn post(&self, url: &str, body: &Value) -> ClientResult<ApiOutcome<Value>> {
        self.send("POST", url, self.client.post(url).json(body)).await
    }

    async fn put(&self, url: &str, body: &Value) -> ClientResult<ApiOutcome<Value>> {
        self.send("PUT", url, self.client.put(url).json(body)).await
    }
}
