//! Durable storage adapters for the session keys

pub mod file;

pub use euindico_core::MemoryStore;
pub use file::FileStore;
