//! Application context - dependency injection container

use std::sync::Arc;

use euindico_common::SubmissionRegistry;
use euindico_core::pages::{
    HomePage, LoginPage, MyProfessionsPage, ProfessionsPage, ProfilePage, RegisterPage, SearchPage,
};
use euindico_core::{DirectoryApi, KeyValueStore, PageContext, Router, SessionStore};
use euindico_domain::{Config, EuIndicoError, Result};
use euindico_infra::{ApiClient, ApiClientConfig, FileStore, StoredCredentials};
use tracing::info;

/// Type alias for the backend port trait object
type DynDirectoryApi = dyn DirectoryApi + 'static;

/// Type alias for the durable storage port trait object
type DynKeyValueStore = dyn KeyValueStore + 'static;

/// Application context - holds all services and dependencies
///
/// Pages are built fresh per mount through the factory methods; the session,
/// router and submission registry are shared for the lifetime of the app.
pub struct AppContext {
    pub config: Config,
    pub storage: Arc<DynKeyValueStore>,
    pub api: Arc<DynDirectoryApi>,
    pub session: Arc<SessionStore>,
    router: Router,
    submissions: SubmissionRegistry,
}

impl AppContext {
    /// Wire the file-backed storage and HTTP client described by `config`,
    /// then restore any persisted session.
    ///
    /// # Errors
    /// Returns `EuIndicoError::Storage` if the storage directory cannot be
    /// created, or `EuIndicoError::Config` if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let storage: Arc<DynKeyValueStore> = Arc::new(FileStore::open(&config.storage.path)?);
        let credentials = Arc::new(StoredCredentials::new(Arc::clone(&storage)));
        let client = ApiClient::new(ApiClientConfig::from(&config.api), credentials)
            .map_err(|err| EuIndicoError::Config(format!("failed to build API client: {err}")))?;

        info!(
            base_url = %client.base_url(),
            storage = %config.storage.path,
            "initialising application context"
        );

        Ok(Self::with_parts(config, storage, Arc::new(client)))
    }

    /// Assemble a context from already-built parts
    pub fn with_parts(
        config: Config,
        storage: Arc<DynKeyValueStore>,
        api: Arc<DynDirectoryApi>,
    ) -> Self {
        let session = Arc::new(SessionStore::restore(Arc::clone(&storage), Arc::clone(&api)));
        info!(authenticated = session.is_authenticated(), "session restored");

        Self {
            router: Router::new(Arc::clone(&session)),
            config,
            storage,
            api,
            session,
            submissions: SubmissionRegistry::new(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn submissions(&self) -> &SubmissionRegistry {
        &self.submissions
    }

    /// A fresh page context with its own mount scope
    pub fn page_context(&self) -> PageContext {
        PageContext::new(Arc::clone(&self.api), Arc::clone(&self.session), self.submissions.clone())
    }

    pub fn home(&self) -> HomePage {
        HomePage::new(Arc::clone(&self.session))
    }

    pub fn login_page(&self) -> LoginPage {
        LoginPage::new(self.page_context())
    }

    pub fn register_page(&self) -> RegisterPage {
        RegisterPage::new(self.page_context())
    }

    pub fn profile_page(&self) -> ProfilePage {
        ProfilePage::new(self.page_context())
    }

    pub fn professions_page(&self) -> ProfessionsPage {
        ProfessionsPage::new(self.page_context())
    }

    pub fn my_professions_page(&self) -> MyProfessionsPage {
        MyProfessionsPage::new(self.page_context())
    }

    pub fn search_page(&self) -> SearchPage {
        SearchPage::new(self.page_context())
    }
}
