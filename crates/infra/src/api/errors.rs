//! API-specific error types
//!
//! Classifies failures that prevented an envelope from being read.

use euindico_domain::EuIndicoError;
use reqwest::StatusCode;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Credentials missing, refused, or expired (401, 403)
    Authentication,
    /// Server errors (5xx)
    Server,
    /// Client errors (4xx except auth)
    Client,
    /// Network, timeout, and undecodable responses
    Network,
    /// Configuration errors
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The backend refused the stored token on an authenticated request
    #[error("Session expired: {0}")]
    SessionExpired(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) | Self::SessionExpired(_) => ApiErrorCategory::Authentication,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Client(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) | Self::Decode(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Classify a response whose body was not the endpoint's envelope
    pub fn from_status(status: StatusCode, url: &str, body: &str) -> Self {
        let message = if body.is_empty() {
            format!("{url} returned status {status}")
        } else {
            format!("{url} returned status {status}: {body}")
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Self::Auth(message)
        } else if status.is_server_error() {
            Self::Server(message)
        } else if status.is_client_error() {
            Self::Client(message)
        } else {
            Self::Decode(message)
        }
    }
}

impl From<EuIndicoError> for ApiError {
    fn from(err: EuIndicoError) -> Self {
        match err {
            EuIndicoError::Network(message) => Self::Network(message),
            EuIndicoError::Timeout(message) => Self::Timeout(message),
            EuIndicoError::Auth(message) => Self::Auth(message),
            EuIndicoError::SessionExpired => Self::SessionExpired("stored session rejected".into()),
            EuIndicoError::Config(message) => Self::Config(message),
            EuIndicoError::Serialization(message) => Self::Decode(message),
            EuIndicoError::InvalidInput(message) => Self::Client(message),
            EuIndicoError::Storage(message) | EuIndicoError::Internal(message) => {
                Self::Config(message)
            }
        }
    }
}

impl From<ApiError> for EuIndicoError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth(message) => Self::Auth(message),
            ApiError::SessionExpired(_) => Self::SessionExpired,
            ApiError::Server(message) | ApiError::Network(message) => Self::Network(message),
            ApiError::Client(message) => Self::InvalidInput(message),
            ApiError::Timeout(message) => Self::Timeout(message),
            ApiError::Decode(message) => Self::Serialization(message),
            ApiError::Config(message) => Self::Config(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(ApiError::Auth("test".into()).category(), ApiErrorCategory::Authentication);
        assert_eq!(
            ApiError::SessionExpired("test".into()).category(),
            ApiErrorCategory::Authentication
        );
        assert_eq!(ApiError::Server("test".into()).category(), ApiErrorCategory::Server);
        assert_eq!(ApiError::Decode("test".into()).category(), ApiErrorCategory::Network);
    }

    #[test]
    fn test_status_mapping() {
        let url = "http://localhost/api/x";
        assert!(matches!(ApiError::from_status(StatusCode::UNAUTHORIZED, url, ""), ApiError::Auth(_)));
        assert!(matches!(ApiError::from_status(StatusCode::BAD_GATEWAY, url, ""), ApiError::Server(_)));
        assert!(matches!(ApiError::from_status(StatusCode::NOT_FOUND, url, ""), ApiError::Client(_)));
        assert!(matches!(ApiError::from_status(StatusCode::OK, url, "<html>"), ApiError::Decode(_)));
    }

    #[test]
    fn test_session_expiry_survives_conversion() {
        let domain: EuIndicoError = ApiError::SessionExpired("401".into()).into();
        assert!(domain.is_session_expired());

        let server: EuIndicoError = ApiError::Server("boom".into()).into();
        assert!(server.is_transport());
    }
}
