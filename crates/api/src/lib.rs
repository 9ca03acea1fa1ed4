//! # Eu Indico application layer
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - Commands (session and route-guarded page operations)
//! - Logging bootstrap and the `euindico` entry point
//!
//! ## Architecture
//! - Depends on `common`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod commands;
pub mod context;
pub mod utils;

pub use context::AppContext;
