//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Eu Indico
///
/// Application-level rejections (`success: false` envelopes) are not errors;
/// they travel as [`crate::Envelope::Failure`]. This enum covers everything
/// that prevents an envelope from being obtained at all.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum EuIndicoError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    /// The backend refused the stored credentials of an authenticated call.
    #[error("Session expired")]
    SessionExpired,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl EuIndicoError {
    /// Whether this error means the stored session is no longer accepted.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    /// Whether this error came from the transport (network, timeout, decode).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_) | Self::Serialization(_))
    }
}

impl From<serde_json::Error> for EuIndicoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for Eu Indico operations
pub type Result<T> = std::result::Result<T, EuIndicoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_expired_is_not_transport() {
        assert!(EuIndicoError::SessionExpired.is_session_expired());
        assert!(!EuIndicoError::SessionExpired.is_transport());
        assert!(EuIndicoError::Network("down".into()).is_transport());
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(EuIndicoError::Storage("disk full".into())).unwrap();
        assert_eq!(json["type"], "Storage");
        assert_eq!(json["message"], "disk full");
    }
}
