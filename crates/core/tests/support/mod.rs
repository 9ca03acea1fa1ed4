//! Shared test helpers for `euindico-core` integration tests.
//!
//! A scriptable backend fake plus storage doubles, so tests can focus on
//! behaviour instead of boilerplate.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use euindico_core::{DirectoryApi, KeyValueStore, MemoryStore, PageContext, SessionStore};
use euindico_common::SubmissionRegistry;
use euindico_domain::constants::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER, STORAGE_KEY_USERNAME};
use euindico_domain::{
    Ack, City, Credentials, Envelope, EuIndicoError, LoginGrant, ProfileUpdate, Profession,
    Professional, Registration, Result, Review, SessionUser, State, UserProfession, UserProfile,
};
use parking_lot::Mutex;
use tokio::sync::Semaphore;

/// Scripted backend. Every endpoint answers with whatever its slot holds
/// (success with empty data by default) and records the call.
pub struct FakeDirectoryApi {
    calls: Mutex<Vec<&'static str>>,
    answered: Mutex<Vec<&'static str>>,
    gate: Mutex<Option<Arc<Semaphore>>>,
    pub login: Mutex<Result<Envelope<LoginGrant>>>,
    pub logout: Mutex<Result<Envelope<Ack>>>,
    pub register: Mutex<Result<Envelope<Ack>>>,
    pub profile: Mutex<Result<Envelope<UserProfile>>>,
    pub update_profile: Mutex<Result<Envelope<Ack>>>,
    pub user_professions: Mutex<Result<Envelope<Vec<UserProfession>>>>,
    pub add_user_profession: Mutex<Result<Envelope<Ack>>>,
    pub states: Mutex<Result<Envelope<Vec<State>>>>,
    pub cities: Mutex<Result<Envelope<Vec<City>>>>,
    pub professions: Mutex<Result<Envelope<Vec<Profession>>>>,
    pub create_profession: Mutex<Result<Envelope<Ack>>>,
    pub search: Mutex<Result<Envelope<Vec<Professional>>>>,
    pub create_review: Mutex<Result<Envelope<Ack>>>,
    pub last_search: Mutex<Option<(i64, Option<i64>)>>,
    pub last_review: Mutex<Option<Review>>,
    pub last_update: Mutex<Option<ProfileUpdate>>,
}

impl Default for FakeDirectoryApi {
    fn default() -> Self {
        let ack = || Mutex::new(Ok(Envelope::Success(Ack::default())));
        Self {
            calls: Mutex::default(),
            answered: Mutex::default(),
            gate: Mutex::default(),
            login: Mutex::new(Ok(Envelope::bare_failure())),
            logout: ack(),
            register: ack(),
            profile: Mutex::new(Ok(Envelope::Success(UserProfile::default()))),
            update_profile: ack(),
            user_professions: Mutex::new(Ok(Envelope::Success(Vec::new()))),
            add_user_profession: ack(),
            states: Mutex::new(Ok(Envelope::Success(Vec::new()))),
            cities: Mutex::new(Ok(Envelope::Success(Vec::new()))),
            professions: Mutex::new(Ok(Envelope::Success(Vec::new()))),
            create_profession: ack(),
            search: Mutex::new(Ok(Envelope::Success(Vec::new()))),
            create_review: ack(),
            last_search: Mutex::default(),
            last_review: Mutex::default(),
            last_update: Mutex::default(),
        }
    }
}

impl FakeDirectoryApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Calls made so far, as `"METHOD /path"`
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, call: &str) -> usize {
        self.calls.lock().iter().filter(|c| **c == call).count()
    }

    /// Calls that got past the gate and produced a reply
    pub fn answered_count(&self, call: &str) -> usize {
        self.answered.lock().iter().filter(|c| **c == call).count()
    }

    /// Make every call block until [`FakeDirectoryApi::release`]
    pub fn hold(&self) {
        *self.gate.lock() = Some(Arc::new(Semaphore::new(0)));
    }

    /// Let `n` held calls through
    pub fn release(&self, n: usize) {
        if let Some(gate) = self.gate.lock().as_ref() {
            gate.add_permits(n);
        }
    }

    pub fn grant_login(&self, token: &str, user: SessionUser) {
        *self.login.lock() =
            Ok(Envelope::Success(LoginGrant { token: token.to_string(), user }));
    }

    async fn respond<T: Clone>(
        &self,
        call: &'static str,
        slot: &Mutex<Result<Envelope<T>>>,
    ) -> Result<Envelope<T>> {
        self.calls.lock().push(call);
        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            gate.acquire().await.expect("gate closed").forget();
        }
        self.answered.lock().push(call);
        slot.lock().clone()
    }
}

#[async_trait]
impl DirectoryApi for FakeDirectoryApi {
    async fn login(&self, _credentials: &Credentials) -> Result<Envelope<LoginGrant>> {
        self.respond("POST /auth/login", &self.login).await
    }

    async fn logout(&self) -> Result<Envelope<Ack>> {
        self.respond("POST /auth/logout", &self.logout).await
    }

    async fn register(&self, _registration: &Registration) -> Result<Envelope<Ack>> {
        self.respond("POST /user/register", &self.register).await
    }

    async fn profile(&self) -> Result<Envelope<UserProfile>> {
        self.respond("GET /user/profile", &self.profile).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Envelope<Ack>> {
        *self.last_update.lock() = Some(update.clone());
        self.respond("PUT /user/profile", &self.update_profile).await
    }

    async fn user_professions(&self) -> Result<Envelope<Vec<UserProfession>>> {
        self.respond("GET /user/professions", &self.user_professions).await
    }

    async fn add_user_profession(&self, _profession_id: i64) -> Result<Envelope<Ack>> {
        self.respond("POST /user/professions", &self.add_user_profession).await
    }

    async fn states(&self) -> Result<Envelope<Vec<State>>> {
        self.respond("GET /locations/states", &self.states).await
    }

    async fn cities(&self, _uf: &str) -> Result<Envelope<Vec<City>>> {
        self.respond("GET /locations/cities", &self.cities).await
    }

    async fn professions(&self) -> Result<Envelope<Vec<Profession>>> {
        self.respond("GET /professions", &self.professions).await
    }

    async fn create_profession(&self, _name: &str) -> Result<Envelope<Ack>> {
        self.respond("POST /professions", &self.create_profession).await
    }

    async fn search_professionals(
        &self,
        profession_id: i64,
        city_id: Option<i64>,
    ) -> Result<Envelope<Vec<Professional>>> {
        *self.last_search.lock() = Some((profession_id, city_id));
        self.respond("GET /search/professionals", &self.search).await
    }

    async fn create_review(&self, review: &Review) -> Result<Envelope<Ack>> {
        *self.last_review.lock() = Some(review.clone());
        self.respond("POST /reviews", &self.create_review).await
    }
}

/// Storage that reads fine but refuses every write
#[derive(Default)]
pub struct ReadOnlyStore {
    inner: MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set_many(&self, _entries: &[(&str, &str)]) -> Result<()> {
        Err(EuIndicoError::Storage("read-only".into()))
    }

    fn remove_many(&self, _keys: &[&str]) -> Result<()> {
        Err(EuIndicoError::Storage("read-only".into()))
    }
}

pub fn user(name: &str, is_admin: bool) -> SessionUser {
    SessionUser { username: format!("{}@b.com", name.to_lowercase()), name: name.into(), is_admin }
}

/// Storage already holding a persisted session for `user`
pub fn persisted(token: &str, user: &SessionUser) -> Arc<MemoryStore> {
    let user_json = serde_json::to_string(user).expect("serialize user");
    Arc::new(MemoryStore::with_entries([
        (STORAGE_KEY_TOKEN, token),
        (STORAGE_KEY_USER, user_json.as_str()),
        (STORAGE_KEY_USERNAME, user.username.as_str()),
    ]))
}

/// Everything a page test needs, wired together
pub struct Harness {
    pub api: Arc<FakeDirectoryApi>,
    pub storage: Arc<MemoryStore>,
    pub session: Arc<SessionStore>,
    pub submissions: SubmissionRegistry,
}

impl Harness {
    pub fn anonymous() -> Self {
        Self::with_storage(Arc::new(MemoryStore::new()))
    }

    pub fn signed_in(is_admin: bool) -> Self {
        Self::with_storage(persisted("t1", &user("A", is_admin)))
    }

    pub fn with_storage(storage: Arc<MemoryStore>) -> Self {
        let api = FakeDirectoryApi::new();
        let session = Arc::new(SessionStore::restore(storage.clone(), api.clone()));
        Self { api, storage, session, submissions: SubmissionRegistry::new() }
    }

    /// Fresh mount context
    pub fn page(&self) -> PageContext {
        PageContext::new(self.api.clone(), self.session.clone(), self.submissions.clone())
    }
}
