//! Outcome of a Konduto API call
//!
//! A call that reached the API either succeeds with a value or fails with
//! the error body the API sent back. API failures are data, not Rust errors:
//! callers match on [`ApiOutcome`] to find out which one they got.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Structured failure reported by the API
///
/// The body is kept exactly as received. When the API answers with
/// something other than JSON, `body` holds the raw text as a JSON string.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("Konduto API error ({status_code}): {body}")]
pub struct ApiError {
    /// HTTP status code of the response
    pub status_code: u16,

    /// Error payload as sent by the API
    pub body: Value,
}

impl ApiError {
    pub fn new(status_code: u16, body: Value) -> Self {
        Self { status_code, body }
    }

    /// `status` field of the error body, usually `"error"`
    pub fn status(&self) -> Option<&str> {
        self.body.get("status").and_then(Value::as_str)
    }

    /// `message` field of the error body
    ///
    /// Konduto reports validation failures as an object describing where the
    /// payload was rejected, so this is left untyped.
    pub fn message(&self) -> Option<&Value> {
        self.body.get("message")
    }
}

/// Success value or API error
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Success(T),
    Failure(ApiError),
}

impl<T> ApiOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Success value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            ApiOutcome::Success(value) => Some(value),
            ApiOutcome::Failure(_) => None,
        }
    }

    /// API error, if any
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ApiOutcome::Success(_) => None,
            ApiOutcome::Failure(error) => Some(error),
        }
    }

    pub fn map<U, F>(self, f: F) -> ApiOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ApiOutcome::Success(value) => ApiOutcome::Success(f(value)),
            ApiOutcome::Failure(error) => ApiOutcome::Failure(error),
        }
    }

    /// Map the success value with a fallible conversion.
    ///
    /// Failures pass through untouched; a conversion error is returned as
    /// the outer `Err`.
    pub fn try_map<U, E, F>(self, f: F) -> Result<ApiOutcome<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            ApiOutcome::Success(value) => f(value).map(ApiOutcome::Success),
            ApiOutcome::Failure(error) => Ok(ApiOutcome::Failure(error)),
        }
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiOutcome::Success(value) => Ok(value),
            ApiOutcome::Failure(error) => Err(error),
        }
    }
}

impl<T> From<Result<T, ApiError>> for ApiOutcome<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => ApiOutcome::Success(value),
            Err(error) => ApiOutcome::Failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validation_error() -> ApiError {
        ApiError::new(
            400,
            json!({
                "status": "error",
                "message": { "where": "/", "why": { "expected": ["id"], "found": [] } }
            }),
        )
    }

    #[test]
    fn test_api_error_accessors() {
        let error = validation_error();
        assert_eq!(error.status(), Some("error"));
        assert_eq!(error.message().unwrap()["where"], "/");
        assert!(error.to_string().contains("400"));
    }

    #[test]
    fn test_api_error_with_text_body() {
        let error = ApiError::new(502, Value::String("Bad Gateway".to_string()));
        assert!(error.status().is_none());
        assert!(error.message().is_none());
    }

    #[test]
    fn test_outcome_discriminant() {
        let ok: ApiOutcome<i32> = ApiOutcome::Success(1);
        let failed: ApiOutcome<i32> = ApiOutcome::Failure(validation_error());

        assert!(ok.is_success());
        assert_eq!(ok.value(), Some(&1));
        assert!(ok.error().is_none());

        assert!(failed.is_failure());
        assert!(failed.value().is_none());
        assert_eq!(failed.error(), Some(&validation_error()));
    }

    #[test]
    fn test_try_map_keeps_failure_untouched() {
        let failed: ApiOutcome<i32> = ApiOutcome::Failure(validation_error());
        let mapped: Result<ApiOutcome<String>, String> =
            failed.try_map(|_| Err("never called".to_string()));

        assert_eq!(mapped.unwrap(), ApiOutcome::Failure(validation_error()));
    }

    #[test]
    fn test_try_map_propagates_conversion_error() {
        let ok: ApiOutcome<&str> = ApiOutcome::Success("x");
        let mapped: Result<ApiOutcome<i32>, std::num::ParseIntError> =
            ok.try_map(|s| s.parse::<i32>());

        assert!(mapped.is_err());
    }

    #[test]
    fn test_into_result_and_back() {
        let ok: ApiOutcome<i32> = ApiOutcome::Success(7).map(|v| v * 2);
        assert_eq!(ok.clone().into_result().unwrap(), 14);

        let outcome: ApiOutcome<i32> = Err(validation_error()).into();
        assert_eq!(outcome.into_result().unwrap_err().status_code, 400);
    }
}
