//! Standard API response envelope.
//!
//! Every endpoint responds with the same JSON shape consumed by the mobile
//! app: `{"message": ..., "status": true|false, "data": ...}`.

use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// The response envelope returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    /// Human-readable outcome message.
    pub message: String,
    /// `true` on success, `false` on any failure.
    pub status: bool,
    /// Endpoint-specific payload, or `null`.
    pub data: Value,
}

impl ApiResponse {
    /// Build a success envelope with a payload.
    pub fn ok(message: impl Into<String>, data: impl Serialize) -> Json<Self> {
        Json(Self {
            message: message.into(),
            status: true,
            data: serde_json::to_value(data).unwrap_or(Value::Null),
        })
    }

    /// Build a success envelope with no payload.
    pub fn ok_empty(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
            status: true,
            data: Value::Null,
        })
    }

    /// Build a failure envelope.
    pub fn error(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
            status: false,
            data: Value::Null,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope() {
        let Json(resp) = ApiResponse::ok("Done", json!({"n": 1}));
        assert!(resp.status);
        assert_eq!(resp.message, "Done");
        assert_eq!(resp.data, json!({"n": 1}));
    }

    #[test]
    fn test_ok_empty_envelope() {
        let Json(resp) = ApiResponse::ok_empty("Done");
        assert!(resp.status);
        assert_eq!(resp.data, Value::Null);
    }

    #[test]
    fn test_error_envelope() {
        let Json(resp) = ApiResponse::error("Nope");
        assert!(!resp.status);
        assert_eq!(resp.message, "Nope");
        assert_eq!(resp.data, Value::Null);
    }

    #[test]
    fn test_envelope_serialization_shape() {
        let Json(resp) = ApiResponse::ok("Done", json!([1, 2]));
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value, json!({"message": "Done", "status": true, "data": [1, 2]}));
    }
}
