//! Session ownership: the authenticated user, its token, and their storage

pub mod memory;
pub mod ports;
pub mod store;

pub use memory::MemoryStore;
pub use ports::KeyValueStore;
pub use store::{AuthenticatedSession, Session, SessionStore};
