//! Page lifecycle primitives
//!
//! - [`PageScope`]: liveness of a mounted page. Deferred results are applied
//!   only while the scope is active; unmounting cancels outstanding calls.
//! - [`SubmissionRegistry`]: at most one in-flight submission per
//!   `(page, action)`; a second submission is rejected until the first ends.

pub mod inflight;
pub mod scope;

pub use inflight::{ActionKey, SubmissionRegistry, SubmissionTicket};
pub use scope::PageScope;
