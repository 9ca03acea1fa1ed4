//! Command layer
//!
//! Each command drives one page or session operation and logs a single
//! structured execution event. Errors are returned as the user-facing message
//! the page would show.

pub mod auth;
pub mod navigation;

pub use auth::{login, logout, whoami, Whoami};
pub use navigation::{open, professions, search, PageRefusal};
