//! Request credentials
//!
//! Authenticated requests carry the bearer token and the username header. Both
//! are read from durable storage at send time, so a login or logout elsewhere
//! is picked up by the next request.

use std::sync::Arc;

use async_trait::async_trait;
use euindico_core::KeyValueStore;
use euindico_domain::constants::{STORAGE_KEY_TOKEN, STORAGE_KEY_USERNAME};

use super::errors::ApiError;

/// Credentials to attach to one request; either half may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestCredentials {
    pub token: Option<String>,
    pub username: Option<String>,
}

/// Trait for providing request credentials
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn credentials(&self) -> Result<RequestCredentials, ApiError>;
}

/// Reads the session keys written by the session store
pub struct StoredCredentials {
    storage: Arc<dyn KeyValueStore>,
}

impl StoredCredentials {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl CredentialProvider for StoredCredentials {
    async fn credentials(&self) -> Result<RequestCredentials, ApiError> {
        let read = |key: &str| -> Result<Option<String>, ApiError> {
            Ok(self.storage.get(key)?.filter(|value| !value.is_empty()))
        };

        Ok(RequestCredentials {
            token: read(STORAGE_KEY_TOKEN)?,
            username: read(STORAGE_KEY_USERNAME)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use euindico_core::MemoryStore;

    use super::*;

    #[tokio::test]
    async fn reads_token_and_username() {
        let storage = Arc::new(MemoryStore::with_entries([
            (STORAGE_KEY_TOKEN, "t1"),
            (STORAGE_KEY_USERNAME, "a@b.com"),
        ]));
        let creds = StoredCredentials::new(storage).credentials().await.unwrap();
        assert_eq!(creds.token.as_deref(), Some("t1"));
        assert_eq!(creds.username.as_deref(), Some("a@b.com"));
    }

    #[tokio::test]
    async fn empty_values_count_as_absent() {
        let storage = Arc::new(MemoryStore::with_entries([(STORAGE_KEY_TOKEN, "")]));
        let creds = StoredCredentials::new(storage).credentials().await.unwrap();
        assert_eq!(creds, RequestCredentials::default());
    }
}
