//! Application-level outcome of a backend call
//!
//! Every endpoint wraps its answer in `{ success, <payload> | message }`, with
//! the payload field varying per endpoint (`data`, `user`, `token`...). Each
//! endpoint decodes its own wire shape and converts it into this union, so
//! callers only ever branch on the success flag.

use serde::{Deserialize, Serialize};

/// Decoded response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Envelope<T> {
    /// `success: true` with the endpoint's payload
    Success(T),
    /// `success: false`, optionally with a human-readable message
    Failure { message: Option<String> },
}

impl<T> Envelope<T> {
    /// Failure carrying the backend's message
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure { message: Some(message.into()) }
    }

    /// Failure without a message
    pub fn bare_failure() -> Self {
        Self::Failure { message: None }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Payload on success, discarding any failure message
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// Backend message, or `fallback` when the backend sent none
    pub fn message_or(&self, fallback: &str) -> Option<String> {
        match self {
            Self::Success(_) => None,
            Self::Failure { message } => {
                Some(message.clone().unwrap_or_else(|| fallback.to_string()))
            }
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        match self {
            Self::Success(value) => Envelope::Success(f(value)),
            Self::Failure { message } => Envelope::Failure { message },
        }
    }
}

/// Payload of endpoints that only acknowledge (`{ success, message? }`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Ack {
    pub message: Option<String>,
}
