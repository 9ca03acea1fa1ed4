//! Conversions from external infrastructure errors into domain errors.

use euindico_domain::EuIndicoError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub EuIndicoError);

impl From<InfraError> for EuIndicoError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<EuIndicoError> for InfraError {
    fn from(value: EuIndicoError) -> Self {
        Self(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoEuIndicoError {
    fn into_euindico(self) -> EuIndicoError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → EuIndicoError */
/* -------------------------------------------------------------------------- */

impl IntoEuIndicoError for HttpError {
    fn into_euindico(self) -> EuIndicoError {
        if self.is_timeout() {
            return EuIndicoError::Timeout("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return EuIndicoError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return EuIndicoError::Config(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() {
            return EuIndicoError::Serialization(format!("failed to decode response: {self}"));
        }

        EuIndicoError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_euindico())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → EuIndicoError */
/* -------------------------------------------------------------------------- */

impl IntoEuIndicoError for std::io::Error {
    fn into_euindico(self) -> EuIndicoError {
        match self.kind() {
            std::io::ErrorKind::PermissionDenied => {
                EuIndicoError::Storage(format!("permission denied: {self}"))
            }
            _ => EuIndicoError::Storage(self.to_string()),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        Self(value.into_euindico())
    }
}
