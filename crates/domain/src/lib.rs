//! # Eu Indico Domain
//!
//! Business domain types and models for the Eu Indico directory client.
//!
//! This crate contains:
//! - Domain data types (session user, profile, professions, reviews)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Routes, storage keys and user-facing messages
//!
//! ## Architecture
//! - No dependencies on other Eu Indico crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
