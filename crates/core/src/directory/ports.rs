//! Port interface for the Eu Indico backend
//!
//! One method per REST endpoint. `Ok` always carries the endpoint's envelope,
//! so application failures (`success: false`) stay distinct from `Err`, which
//! is reserved for transport and session failures.

use async_trait::async_trait;
use euindico_domain::{
    Ack, City, Credentials, Envelope, LoginGrant, ProfileUpdate, Profession, Professional,
    Registration, Result, Review, State, UserProfession, UserProfile,
};

/// Backend operations used by the session store and the pages
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> Result<Envelope<LoginGrant>>;

    /// `POST /auth/logout`
    async fn logout(&self) -> Result<Envelope<Ack>>;

    /// `POST /user/register`
    async fn register(&self, registration: &Registration) -> Result<Envelope<Ack>>;

    /// `GET /user/profile`
    async fn profile(&self) -> Result<Envelope<UserProfile>>;

    /// `PUT /user/profile`
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Envelope<Ack>>;

    /// `GET /user/professions`
    async fn user_professions(&self) -> Result<Envelope<Vec<UserProfession>>>;

    /// `POST /user/professions`
    async fn add_user_profession(&self, profession_id: i64) -> Result<Envelope<Ack>>;

    /// `GET /locations/states`
    async fn states(&self) -> Result<Envelope<Vec<State>>>;

    /// `GET /locations/cities/{uf}`
    async fn cities(&self, uf: &str) -> Result<Envelope<Vec<City>>>;

    /// `GET /professions`
    async fn professions(&self) -> Result<Envelope<Vec<Profession>>>;

    /// `POST /professions`
    async fn create_profession(&self, name: &str) -> Result<Envelope<Ack>>;

    /// `GET /search/professionals`; the city filter is optional
    async fn search_professionals(
        &self,
        profession_id: i64,
        city_id: Option<i64>,
    ) -> Result<Envelope<Vec<Professional>>>;

    /// `POST /reviews`
    async fn create_review(&self, review: &Review) -> Result<Envelope<Ack>>;
}
