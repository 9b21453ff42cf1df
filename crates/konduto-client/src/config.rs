//! Client configuration
//!
//! The Konduto domain, the private API key and the request timeout.
//! [`KondutoConfig::load`] reads a `.env` file when present, then an optional
//! `config/konduto.{toml,yaml,json}` file, then `KONDUTO_*` environment
//! variables (`KONDUTO_DOMAIN`, `KONDUTO_API_KEY`, `KONDUTO_TIMEOUT_SECS`).

use crate::error::{ClientError, ClientResult};
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::{Deserialize, Serialize};

/// Production API domain
pub const DEFAULT_DOMAIN: &str = "https://api.konduto.com/";

const ORDERS_PATH: &str = "v1/orders";

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Serialize, Deserialize)]
pub struct KondutoConfig {
    /// API domain, e.g. `https://api.konduto.com/`
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Private API key, sent as the Basic auth user name
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for KondutoConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

// Keeps the key out of logs
impl std::fmt::Debug for KondutoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KondutoConfig")
            .field("domain", &self.domain)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl KondutoConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> ClientResult<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/konduto").required(false))
            .add_source(config::Environment::with_prefix("KONDUTO"));

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> ClientResult<Self> {
        match builder.build() {
            Ok(cfg) => cfg.try_deserialize().map_err(|e| {
                ClientError::Config(format!("Failed to deserialize config: {}", e))
            }),
            Err(e) => {
                tracing::info!("No usable Konduto config found ({}), using defaults", e);
                Ok(Self::default())
            }
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Base URL of the orders resource, `{domain}v1/orders`
    ///
    /// A domain given without a trailing slash gets one before the path is
    /// appended. Surrounding slashes are stripped from the result.
    pub fn orders_endpoint(&self) -> String {
        let domain = self.domain.trim();
        let separator = if domain.ends_with('/') { "" } else { "/" };

        format!("{}{}{}", domain, separator, ORDERS_PATH)
            .trim_matches('/')
            .to_string()
    }

    /// API key, or a configuration error when none is set
    pub fn require_api_key(&self) -> ClientResult<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ClientError::Config("Konduto API key is not set".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Environment, File, FileFormat};
    use std::collections::HashMap;

    #[test]
    fn test_config_default() {
        let config = KondutoConfig::default();

        assert_eq!(config.domain, "https://api.konduto.com/");
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_orders_endpoint() {
        let config = KondutoConfig::default();
        assert_eq!(config.orders_endpoint(), "https://api.konduto.com/v1/orders");
    }

    #[test]
    fn test_orders_endpoint_without_trailing_slash() {
        let config = KondutoConfig::default().with_domain("http://127.0.0.1:1234");
        assert_eq!(config.orders_endpoint(), "http://127.0.0.1:1234/v1/orders");
    }

    #[test]
    fn test_builders() {
        let config = KondutoConfig::default()
            .with_domain("https://sandbox.example.com/")
            .with_api_key("T738D516F09CAB3A2C1EE")
            .with_timeout_secs(5);

        assert_eq!(config.domain, "https://sandbox.example.com/");
        assert_eq!(config.require_api_key().unwrap(), "T738D516F09CAB3A2C1EE");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_require_api_key_missing() {
        let config = KondutoConfig::default();
        assert!(matches!(config.require_api_key(), Err(ClientError::Config(_))));

        let blank = KondutoConfig::default().with_api_key("  ");
        assert!(blank.require_api_key().is_err());
    }

    #[test]
    fn test_from_builder_with_partial_file() {
        let builder = config::Config::builder().add_source(File::from_str(
            r#"{ "api_key": "secret", "timeout_secs": 10 }"#,
            FileFormat::Json,
        ));

        let config = KondutoConfig::from_builder(builder).unwrap();
        assert_eq!(config.domain, DEFAULT_DOMAIN);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_from_builder_rejects_bad_types() {
        let builder = config::Config::builder().add_source(File::from_str(
            r#"{ "timeout_secs": "soon" }"#,
            FileFormat::Json,
        ));

        assert!(matches!(
            KondutoConfig::from_builder(builder),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn test_from_builder_environment_overrides_file() {
        let env = HashMap::from([
            ("KONDUTO_DOMAIN".to_string(), "http://localhost:8080/".to_string()),
            ("KONDUTO_API_KEY".to_string(), "T738D516F09CAB3A2C1EE".to_string()),
            ("KONDUTO_TIMEOUT_SECS".to_string(), "7".to_string()),
        ]);

        let builder = config::Config::builder()
            .add_source(File::from_str(
                r#"{ "domain": "https://sandbox.example.com/", "timeout_secs": 10 }"#,
                FileFormat::Json,
            ))
            .add_source(Environment::with_prefix("KONDUTO").source(Some(env)));

        let config = KondutoConfig::from_builder(builder).unwrap();
        assert_eq!(config.domain, "http://localhost:8080/");
        assert_eq!(config.api_key.as_deref(), Some("T738D516F09CAB3A2C1EE"));
        assert_eq!(config.timeout_secs, 7);
        assert_eq!(config.orders_endpoint(), "http://localhost:8080/v1/orders");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = KondutoConfig::default().with_api_key("super-secret");
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("KondutoConfig"));
        assert!(!debug_str.contains("super-secret"));
    }
}
