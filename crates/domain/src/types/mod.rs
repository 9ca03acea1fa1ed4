//! Domain types and models
//!
//! Field names on the wire follow the backend (Portuguese); the Rust names
//! describe what the field holds.

pub mod envelope;
pub mod location;
pub mod profession;
pub mod search;
pub mod user;

pub use envelope::{Ack, Envelope};
pub use location::{City, State};
pub use profession::{Profession, ProfessionStatus, StatusTone, UserProfession};
pub use search::{Professional, Review};
pub use user::{Credentials, LoginGrant, ProfileUpdate, Registration, SessionUser, UserProfile};
