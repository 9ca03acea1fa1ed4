//! # Eu Indico Core
//!
//! Client logic with no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces for the backend and durable storage
//! - The session store and the route guard in front of every page
//! - Page controllers for each screen
//!
//! ## Architecture Principles
//! - Only depends on `euindico-domain` and `euindico-common`
//! - No HTTP or filesystem code
//! - All external dependencies via traits

pub mod directory;
pub mod pages;
pub mod routing;
pub mod session;

pub use directory::DirectoryApi;
pub use pages::{ActionOutcome, PageContext, Phase};
pub use routing::{guard, Access, MenuItem, Navigation, Route, Router};
pub use session::{AuthenticatedSession, KeyValueStore, MemoryStore, Session, SessionStore};
