//! Error type for backend calls and the message-extraction rule.

use thiserror::Error;

/// Fallback shown when the backend gives no usable message.
pub const GENERIC_FAILURE: &str = "Request failed. Please try again.";

/// A failed backend call.
///
/// There is deliberately no finer taxonomy: the UI only distinguishes
/// "backend said something" from "transport broke", and renders the message
/// inline either way.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status. `message` is whatever
    /// the response body's `message` field said, or [`GENERIC_FAILURE`].
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never completed (connection refused, DNS, aborted fetch).
    #[error("{0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Human-readable text for inline display.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Pull the `message` field out of an error response body.
///
/// Bodies that are not JSON, or JSON without a string `message`, fall back to
/// the generic string.
pub fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_message_field() {
        assert_eq!(
            extract_message(r#"{"message": "Sai mật khẩu"}"#),
            "Sai mật khẩu"
        );
    }

    #[test]
    fn test_non_json_body_falls_back() {
        assert_eq!(extract_message("<html>502</html>"), GENERIC_FAILURE);
    }

    #[test]
    fn test_json_without_message_falls_back() {
        assert_eq!(extract_message(r#"{"error": "nope"}"#), GENERIC_FAILURE);
        assert_eq!(extract_message(r#"{"message": 42}"#), GENERIC_FAILURE);
    }

    #[test]
    fn test_api_error_displays_message() {
        let err = ApiError::Api {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.message(), "Invalid credentials");
    }
}
