//! Field conversion hooks
//!
//! Konduto sends dates, timestamps and amounts in fixed textual formats.
//! Each submodule here is a serde `with` module, so a field declares its
//! converter right on the type:
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//! use konduto_core::hooks;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Analysis {
//!     #[serde(with = "hooks::decimal")]
//!     score: BigDecimal,
//!     #[serde(default, with = "hooks::date::option")]
//!     analysis_date: Option<NaiveDate>,
//! }
//! ```
//!
//! | Hook        | Wire format              | Rust type         |
//! |-------------|--------------------------|-------------------|
//! | `date`      | `YYYY-MM-DD`             | `NaiveDate`       |
//! | `timestamp` | `YYYY-MM-DDTHH:MM:SSZ`   | `DateTime<Utc>`   |
//! | `decimal`   | JSON number or string    | `BigDecimal`      |

use crate::error::{CoreError, Result};
use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use std::str::FromStr;

/// Calendar date format used by the API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// UTC timestamp format used by the API
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse a `YYYY-MM-DD` string into a calendar date
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| CoreError::InvalidDate(raw.to_string()))
}

/// Parse a `YYYY-MM-DDTHH:MM:SSZ` string into a UTC instant
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| CoreError::InvalidTimestamp(raw.to_string()))
}

/// Convert a JSON number (or numeric string) into an exact decimal.
///
/// Numbers go through their shortest textual form, so `42.5` becomes
/// exactly `42.5` rather than the nearest binary fraction.
pub fn decimal_from_json(value: &Value) -> Result<BigDecimal> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => return Err(CoreError::InvalidDecimal(other.to_string())),
    };

    BigDecimal::from_str(&text).map_err(|_| CoreError::InvalidDecimal(text))
}

pub mod date {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &NaiveDate,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(de::Error::custom)
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<NaiveDate>,
            serializer: S,
        ) -> std::result::Result<S::Ok, S::Error> {
            match value {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> std::result::Result<Option<NaiveDate>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| parse_date(&raw).map_err(de::Error::custom))
                .transpose()
        }
    }
}

pub mod timestamp {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(de::Error::custom)
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> std::result::Result<S::Ok, S::Error> {
            match value {
                Some(instant) => super::serialize(instant, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> std::result::Result<Option<DateTime<Utc>>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| parse_timestamp(&raw).map_err(de::Error::custom))
                .transpose()
        }
    }
}

/// Amounts are written back as JSON numbers carrying the decimal's exact
/// digits, never through `f64`.
pub mod decimal {
    use super::*;
    use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Number;

    pub fn serialize<S: Serializer>(
        value: &BigDecimal,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let number = Number::from_str(&value.to_string())
            .map_err(|e| ser::Error::custom(format!("Invalid decimal {}: {}", value, e)))?;
        number.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<BigDecimal, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        decimal_from_json(&raw).map_err(de::Error::custom)
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<BigDecimal>,
            serializer: S,
        ) -> std::result::Result<S::Ok, S::Error> {
            match value {
                Some(amount) => super::serialize(amount, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> std::result::Result<Option<BigDecimal>, D::Error> {
            match Value::deserialize(deserializer)? {
                Value::Null => Ok(None),
                raw => decimal_from_json(&raw).map(Some).map_err(de::Error::custom),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};
    use serde_json::json;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2020-01-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(date.year(), 2020);
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert!(matches!(parse_date("01/01/2020"), Err(CoreError::InvalidDate(_))));
        assert!(matches!(parse_date("2020-13-01"), Err(CoreError::InvalidDate(_))));
        assert!(matches!(parse_date(""), Err(CoreError::InvalidDate(_))));
    }

    #[test]
    fn test_parse_timestamp() {
        let instant = parse_timestamp("2020-01-01T10:00:00Z").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2020, 1, 1, 10, 0, 0).unwrap());
        assert_eq!(instant.hour(), 10);
    }

    #[test]
    fn test_parse_timestamp_requires_zulu_suffix() {
        assert!(matches!(
            parse_timestamp("2020-01-01T10:00:00"),
            Err(CoreError::InvalidTimestamp(_))
        ));
        assert!(matches!(
            parse_timestamp("2020-01-01 10:00:00Z"),
            Err(CoreError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_decimal_from_number_is_exact() {
        let amount = decimal_from_json(&json!(42.5)).unwrap();
        assert_eq!(amount, BigDecimal::from_str("42.5").unwrap());

        // 0.1 has no exact binary representation
        let amount = decimal_from_json(&json!(0.1)).unwrap();
        assert_eq!(amount.to_string(), "0.1");
    }

    #[test]
    fn test_decimal_from_string_and_integer() {
        assert_eq!(
            decimal_from_json(&json!("199.90")).unwrap(),
            BigDecimal::from_str("199.9").unwrap()
        );
        assert_eq!(decimal_from_json(&json!(7)).unwrap(), BigDecimal::from(7_i64));
    }

    #[test]
    fn test_decimal_rejects_non_numeric() {
        assert!(matches!(decimal_from_json(&json!("abc")), Err(CoreError::InvalidDecimal(_))));
        assert!(matches!(decimal_from_json(&json!(true)), Err(CoreError::InvalidDecimal(_))));
        assert!(matches!(decimal_from_json(&json!(null)), Err(CoreError::InvalidDecimal(_))));
    }

    #[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq)]
    struct Sample {
        #[serde(with = "date")]
        day: NaiveDate,
        #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
        seen_at: Option<DateTime<Utc>>,
        #[serde(default, with = "decimal::option", skip_serializing_if = "Option::is_none")]
        amount: Option<BigDecimal>,
    }

    #[test]
    fn test_hooks_on_struct_fields() {
        let sample: Sample = serde_json::from_value(json!({
            "day": "2021-06-30",
            "seen_at": "2021-06-30T23:59:59Z",
            "amount": 10.25
        }))
        .unwrap();

        assert_eq!(sample.day, NaiveDate::from_ymd_opt(2021, 6, 30).unwrap());
        assert_eq!(
            sample.seen_at,
            Some(Utc.with_ymd_and_hms(2021, 6, 30, 23, 59, 59).unwrap())
        );
        assert_eq!(sample.amount, Some(BigDecimal::from_str("10.25").unwrap()));

        let written = serde_json::to_value(&sample).unwrap();
        assert_eq!(written["day"], "2021-06-30");
        assert_eq!(written["seen_at"], "2021-06-30T23:59:59Z");
        assert_eq!(written["amount"], json!(10.25));
    }

    #[test]
    fn test_decimal_serializes_exact_digits() {
        let sample = Sample {
            day: NaiveDate::from_ymd_opt(2021, 6, 30).unwrap(),
            seen_at: None,
            amount: Some(BigDecimal::from_str("0.30000000000000000001").unwrap()),
        };

        let text = serde_json::to_string(&sample).unwrap();
        assert!(text.contains(r#""amount":0.30000000000000000001"#));
    }

    #[test]
    fn test_optional_hooks_accept_missing_and_null() {
        let sample: Sample = serde_json::from_value(json!({
            "day": "2021-06-30",
            "amount": null
        }))
        .unwrap();

        assert!(sample.seen_at.is_none());
        assert!(sample.amount.is_none());
    }

    #[test]
    fn test_hook_failure_surfaces_as_serde_error() {
        let result = serde_json::from_value::<Sample>(json!({ "day": "30-06-2021" }));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Invalid date"));
    }
}
