//! Backend API client
//!
//! Provides the HTTP implementation of the directory port, the per-endpoint
//! envelope decoding, and request credential handling.

pub mod auth;
pub mod client;
pub mod envelope;
pub mod errors;

pub use auth::{CredentialProvider, RequestCredentials, StoredCredentials};
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use errors::{ApiError, ApiErrorCategory};
