//! # Eu Indico Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest-based backend API client
//! - Durable session storage (JSON file)
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `euindico-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod storage;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientConfig, ApiError, StoredCredentials};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use storage::{FileStore, MemoryStore};
