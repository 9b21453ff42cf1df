//! Inbound order record

use crate::error::{CoreError, Result};
use crate::hooks;
use crate::types::{OrderStatus, Recommendation};
use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Analysis result for an order
///
/// Deserializing goes through the field hooks in [`crate::hooks`]: `score`
/// and amounts become exact decimals, `analysis_date` a calendar date and
/// the `*_at` fields UTC instants. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: String,

    #[serde(with = "hooks::decimal")]
    pub score: BigDecimal,

    pub recommendation: Recommendation,

    pub status: OrderStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visitor: Option<String>,

    #[serde(default, with = "hooks::decimal::option", skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<BigDecimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    #[serde(default, with = "hooks::date::option", skip_serializing_if = "Option::is_none")]
    pub analysis_date: Option<NaiveDate>,

    #[serde(default, with = "hooks::timestamp::option", skip_serializing_if = "Option::is_none")]
    pub analyzed_at: Option<DateTime<Utc>>,

    #[serde(default, with = "hooks::timestamp::option", skip_serializing_if = "Option::is_none")]
    pub purchased_at: Option<DateTime<Utc>>,
}

impl OrderResponse {
    /// Build a response from the `order` summary returned when an order is
    /// created.
    ///
    /// Only `id`, `score`, `recommendation` and `status` are read; the status
    /// is upper-cased before it is matched.
    pub fn from_summary(order: &Value) -> Result<Self> {
        let field = |name: &str| {
            order
                .get(name)
                .filter(|value| !value.is_null())
                .ok_or_else(|| CoreError::MissingField(format!("order.{}", name)))
        };

        let id = match field("id")? {
            Value::String(id) => id.clone(),
            other => other.to_string(),
        };
        let score = hooks::decimal_from_json(field("score")?)?;
        let recommendation = text(field("recommendation")?).parse::<Recommendation>()?;
        let status = text(field("status")?).to_uppercase().parse::<OrderStatus>()?;

        Ok(Self {
            id,
            score,
            recommendation,
            status,
            visitor: None,
            total_amount: None,
            currency: None,
            installments: None,
            ip: None,
            analysis_date: None,
            analyzed_at: None,
            purchased_at: None,
        })
    }
}

// Non-string values are matched by their JSON text
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
