//! Backend API client
//!
//! Implements [`DirectoryApi`] over HTTP. Every call yields the endpoint's
//! envelope; `Err` is kept for transport failures and for a rejected session.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use euindico_core::DirectoryApi;
use euindico_domain::constants::USERNAME_HEADER;
use euindico_domain::{
    Ack, ApiConfig, City, Credentials, Envelope, EuIndicoError, LoginGrant, ProfileUpdate,
    Profession, Professional, Registration, Result, Review, State, UserProfession, UserProfile,
};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, instrument, warn};

use super::auth::CredentialProvider;
use super::envelope::{AckBody, ListBody, LoginBody, ProfileBody, WireEnvelope};
use super::errors::ApiError;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone, Default)]
pub struct ApiClientConfig {
    /// Base URL including the `/api` prefix
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: config.timeout_secs.map(Duration::from_secs),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Whether a request carries the stored credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    /// Login and registration go out bare
    Anonymous,
    Authenticated,
}

/// API client for the Eu Indico backend
pub struct ApiClient {
    http_client: HttpClient,
    credentials: Arc<dyn CredentialProvider>,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be built
    pub fn new(
        config: ApiClientConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> std::result::Result<Self, ApiError> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(agent) = config.user_agent {
            builder = builder.user_agent(agent);
        }
        let http_client = builder
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {e}")))?;

        Ok(Self {
            http_client,
            credentials,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<W: WireEnvelope>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<Envelope<W::Payload>, ApiError> {
        self.call::<W, ()>(Method::GET, path, query, None, Access::Authenticated).await
    }

    async fn send_json<W: WireEnvelope, B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        access: Access,
    ) -> std::result::Result<Envelope<W::Payload>, ApiError> {
        self.call::<W, B>(method, path, &[], Some(body), access).await
    }

    #[instrument(skip_all, fields(path = %path, method = %method))]
    async fn call<W: WireEnvelope, B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
        access: Access,
    ) -> std::result::Result<Envelope<W::Payload>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http_client.request(method, &url);

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if access == Access::Authenticated {
            let credentials = self.credentials.credentials().await?;
            if let Some(token) = credentials.token {
                request = request.header(AUTHORIZATION, format!("Bearer {token}"));
            }
            if let Some(username) = credentials.username {
                request = request.header(USERNAME_HEADER, username);
            }
        }

        let response = self.http_client.send(request).await?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;

        if status == StatusCode::UNAUTHORIZED && access == Access::Authenticated {
            warn!(status = %status, "backend rejected stored credentials");
            return Err(ApiError::SessionExpired(format!("{url} returned status {status}")));
        }

        match serde_json::from_str::<W>(&text) {
            Ok(wire) => {
                let envelope = wire.into_envelope();
                debug!(status = %status, success = envelope.is_success(), "envelope received");
                Ok(envelope)
            }
            Err(err) => {
                let error = if status.is_success() {
                    ApiError::Decode(format!("{url}: {err}"))
                } else {
                    ApiError::from_status(status, &url, &text)
                };
                warn!(
                    status = %status,
                    category = ?error.category(),
                    error = %err,
                    "response is not an envelope"
                );
                Err(error)
            }
        }
    }
}

#[async_trait]
impl DirectoryApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<Envelope<LoginGrant>> {
        Ok(self
            .send_json::<LoginBody, _>(Method::POST, "/auth/login", credentials, Access::Anonymous)
            .await?)
    }

    async fn logout(&self) -> Result<Envelope<Ack>> {
        Ok(self
            .send_json::<AckBody, _>(Method::POST, "/auth/logout", &json!({}), Access::Authenticated)
            .await?)
    }

    async fn register(&self, registration: &Registration) -> Result<Envelope<Ack>> {
        Ok(self
            .send_json::<AckBody, _>(
                Method::POST,
                "/user/register",
                registration,
                Access::Anonymous,
            )
            .await?)
    }

    async fn profile(&self) -> Result<Envelope<UserProfile>> {
        Ok(self.get::<ProfileBody>("/user/profile", &[]).await?)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Envelope<Ack>> {
        Ok(self
            .send_json::<AckBody, _>(Method::PUT, "/user/profile", update, Access::Authenticated)
            .await?)
    }

    async fn user_professions(&self) -> Result<Envelope<Vec<UserProfession>>> {
        Ok(self.get::<ListBody<UserProfession>>("/user/professions", &[]).await?)
    }

    async fn add_user_profession(&self, profession_id: i64) -> Result<Envelope<Ack>> {
        Ok(self
            .send_json::<AckBody, _>(
                Method::POST,
                "/user/professions",
                &json!({ "id": profession_id }),
                Access::Authenticated,
            )
            .await?)
    }

    async fn states(&self) -> Result<Envelope<Vec<State>>> {
        Ok(self.get::<ListBody<State>>("/locations/states", &[]).await?)
    }

    async fn cities(&self, uf: &str) -> Result<Envelope<Vec<City>>> {
        if uf.is_empty() || !uf.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(EuIndicoError::InvalidInput(format!("invalid state code: {uf:?}")));
        }
        Ok(self.get::<ListBody<City>>(&format!("/locations/cities/{uf}"), &[]).await?)
    }

    async fn professions(&self) -> Result<Envelope<Vec<Profession>>> {
        Ok(self.get::<ListBody<Profession>>("/professions", &[]).await?)
    }

    async fn create_profession(&self, name: &str) -> Result<Envelope<Ack>> {
        Ok(self
            .send_json::<AckBody, _>(
                Method::POST,
                "/professions",
                &json!({ "nome": name }),
                Access::Authenticated,
            )
            .await?)
    }

    async fn search_professionals(
        &self,
        profession_id: i64,
        city_id: Option<i64>,
    ) -> Result<Envelope<Vec<Professional>>> {
        let mut query = vec![("idProfissao", profession_id.to_string())];
        if let Some(city_id) = city_id {
            query.push(("idMunicipio", city_id.to_string()));
        }
        Ok(self.get::<ListBody<Professional>>("/search/professionals", &query).await?)
    }

    async fn create_review(&self, review: &Review) -> Result<Envelope<Ack>> {
        Ok(self
            .send_json::<AckBody, _>(Method::POST, "/reviews", review, Access::Authenticated)
            .await?)
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    credentials: Option<Arc<dyn CredentialProvider>>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the credential provider
    pub fn credentials(mut self, credentials: Arc<dyn CredentialProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if required fields are missing or client creation fails
    pub fn build(self) -> std::result::Result<ApiClient, ApiError> {
        let config = self
            .config
            .ok_or_else(|| ApiError::Config("API configuration not set".to_string()))?;
        let credentials = self
            .credentials
            .ok_or_else(|| ApiError::Config("Credential provider not set".to_string()))?;

        ApiClient::new(config, credentials)
    }
}
