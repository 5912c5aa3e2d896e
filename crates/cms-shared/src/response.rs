//! Standardized API response envelopes.
//!
//! Success: `{ "success": true, "data": ..., "message": ... }`.
//! Failure: `{ "success": false, "error": "..." }`.

use serde::{Deserialize, Serialize};

/// Standard successful API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    /// The payload, if this envelope reports success.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

/// Failure envelope. `error` is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }

    // Common error constructors
    pub fn not_found() -> Self {
        Self::new("Not found")
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_shape() {
        let body = ApiResponse::ok_with_message(json!({"id": "a"}), "Content created successfully");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "success": true,
                "data": {"id": "a"},
                "message": "Content created successfully"
            })
        );
    }

    #[test]
    fn message_is_omitted_when_absent() {
        let value = serde_json::to_value(ApiResponse::ok(1)).unwrap();
        assert!(value.get("message").is_none());
    }

    #[test]
    fn error_envelope_shape() {
        assert_eq!(
            serde_json::to_value(ErrorResponse::internal_error()).unwrap(),
            json!({"success": false, "error": "Internal server error"})
        );
    }

    #[test]
    fn failed_envelope_yields_no_data() {
        let envelope: ApiResponse<u32> =
            serde_json::from_value(json!({"success": false, "data": 7})).unwrap();
        assert_eq!(envelope.into_data(), None);
    }
}
