//! Enumerated order fields: status and recommendation
//!
//! Both are matched by value. Lookup is case-insensitive and normalizes to
//! upper case, so `"approved"`, `"Approved"` and `"APPROVED"` all resolve to
//! [`OrderStatus::Approved`]. On the wire both are written in lower case.

use crate::error::CoreError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an order as tracked by Konduto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Approved,
    Declined,
    NotAuthorized,
    Canceled,
    Fraud,
    NotAnalyzed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Approved,
        OrderStatus::Declined,
        OrderStatus::NotAuthorized,
        OrderStatus::Canceled,
        OrderStatus::Fraud,
        OrderStatus::NotAnalyzed,
    ];

    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Approved => "APPROVED",
            OrderStatus::Declined => "DECLINED",
            OrderStatus::NotAuthorized => "NOT_AUTHORIZED",
            OrderStatus::Canceled => "CANCELED",
            OrderStatus::Fraud => "FRAUD",
            OrderStatus::NotAnalyzed => "NOT_ANALYZED",
        }
    }

    /// Lower-case value sent in request bodies
    pub fn wire_value(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Approved => "approved",
            OrderStatus::Declined => "declined",
            OrderStatus::NotAuthorized => "not_authorized",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Fraud => "fraud",
            OrderStatus::NotAnalyzed => "not_analyzed",
        }
    }

    /// Whether an order can be moved into this status by a status update.
    ///
    /// `PENDING` and `NOT_ANALYZED` are assigned by Konduto itself.
    pub fn is_transition_target(&self) -> bool {
        !matches!(self, OrderStatus::Pending | OrderStatus::NotAnalyzed)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_value())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Konduto's recommendation for an analyzed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    Approve,
    Review,
    Decline,
    None,
}

impl Recommendation {
    pub const ALL: [Recommendation; 4] = [
        Recommendation::Approve,
        Recommendation::Review,
        Recommendation::Decline,
        Recommendation::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Approve => "APPROVE",
            Recommendation::Review => "REVIEW",
            Recommendation::Decline => "DECLINE",
            Recommendation::None => "NONE",
        }
    }

    pub fn wire_value(&self) -> &'static str {
        match self {
            Recommendation::Approve => "approve",
            Recommendation::Review => "review",
            Recommendation::Decline => "decline",
            Recommendation::None => "none",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recommendation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Recommendation::ALL
            .into_iter()
            .find(|recommendation| recommendation.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownRecommendation(s.to_string()))
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_value())
    }
}

impl<'de> Deserialize<'de> for Recommendation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
