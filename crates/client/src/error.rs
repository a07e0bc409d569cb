//! Client error types

use sportiva_core::RequestFailure;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend returned an error status
    #[error("Backend error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Backend {
        status: u16,
        message: Option<String>,
    },

    /// Missing, invalid or expired credentials
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create an error from a status code and the raw response body
    ///
    /// PostgREST reports `message`, GoTrue uses `msg` or
    /// `error_description`; whichever is present becomes the message.
    pub fn from_response(status: reqwest::StatusCode, body: &str) -> Self {
        let message = extract_message(body);
        match status.as_u16() {
            401 => Self::AuthenticationFailed(
                message.unwrap_or_else(|| "Session is missing or expired".to_string()),
            ),
            404 => Self::NotFound(message.unwrap_or_else(|| status.to_string())),
            status => Self::Backend { status, message },
        }
    }

    /// Whether the backend rejected the session token
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    /// Human readable message carried by the error, if any
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Backend { message, .. } => message.clone(),
            Self::AuthenticationFailed(message)
            | Self::NotFound(message)
            | Self::Configuration(message) => Some(message.clone()),
            Self::Request(_) | Self::Serialization(_) => None,
        }
    }
}

impl From<ClientError> for RequestFailure {
    fn from(error: ClientError) -> Self {
        RequestFailure::from_message(error.user_message())
    }
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "msg", "error_description", "error"]
        .into_iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_postgrest_message_extracted() {
        let error = ClientError::from_response(
            StatusCode::CONFLICT,
            r#"{"code":"23505","details":null,"hint":null,"message":"duplicate"}"#,
        );
        assert!(matches!(
            &error,
            ClientError::Backend { status: 409, message: Some(m) } if m == "duplicate"
        ));
        assert_eq!(RequestFailure::from(error).display_message(), "duplicate");
    }

    #[test]
    fn test_gotrue_message_extracted() {
        let error = ClientError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        assert_eq!(
            error.user_message().as_deref(),
            Some("Invalid login credentials")
        );
    }

    #[test]
    fn test_plain_body_has_no_message() {
        let error = ClientError::from_response(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(error.user_message().is_none());
        assert_eq!(
            RequestFailure::from(error),
            RequestFailure::Unspecified
        );
    }

    #[test]
    fn test_unauthorized_is_auth_expired() {
        let error = ClientError::from_response(StatusCode::UNAUTHORIZED, "");
        assert!(error.is_auth_expired());
    }
}
