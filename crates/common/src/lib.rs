//! Modular common utilities shared across Eu Indico crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: declarative form validation
//! - `runtime`: async page lifecycle (scopes, in-flight submissions)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod validation;

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod lifecycle;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "runtime")]
pub use lifecycle::{ActionKey, PageScope, SubmissionRegistry, SubmissionTicket};
#[cfg(feature = "foundation")]
pub use validation::{
    EmailValidator, FieldError, FieldRules, FieldValidator, FieldValue, FormSchema, FormValues,
    RangeValidator, Rule, StringValidator, ValidationError, ValidationResult,
};
