//! Client error types

use serde_json::Value;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// Backend rejected the request. The raw payload is preserved so callers
    /// can classify it (delete conflicts in particular).
    #[error("Backend error ({status}): {}", best_message(.payload))]
    Backend { status: u16, payload: Value },
}

impl ClientError {
    /// HTTP status of a backend rejection, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw error payload of a backend rejection. Network-level failures are
    /// wrapped as a `{message}` payload so every failure can be classified
    /// the same way.
    pub fn payload(&self) -> Value {
        match self {
            Self::Backend { payload, .. } => payload.clone(),
            other => serde_json::json!({ "message": other.to_string() }),
        }
    }

    /// Human-readable message extracted from the failure
    pub fn message(&self) -> String {
        match self {
            Self::Backend { payload, .. } => best_message(payload),
            other => other.to_string(),
        }
    }
}

/// Best-effort message from a backend payload: `message`, then `error`, then
/// the serialized payload itself.
fn best_message(payload: &Value) -> String {
    payload
        .get("message")
        .or_else(|| payload.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| payload.to_string())
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_backend_message_extraction() {
        let err = ClientError::Backend {
            status: 400,
            payload: json!({"message": "Stock insuficiente"}),
        };
        assert_eq!(err.message(), "Stock insuficiente");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_backend_error_field_fallback() {
        let err = ClientError::Backend {
            status: 500,
            payload: json!({"error": "Internal Server Error"}),
        };
        assert_eq!(err.message(), "Internal Server Error");
    }

    #[test]
    fn test_payload_wraps_non_backend_failures() {
        let err = ClientError::InvalidResponse(serde_json::from_str::<Value>("{").unwrap_err());
        let payload = err.payload();
        assert!(payload.get("message").is_some());
        assert_eq!(err.status(), None);
    }
}
