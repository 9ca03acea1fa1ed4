// In-flight submission registry
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

/// Identifies one submit action of one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionKey {
    pub page: &'static str,
    pub action: &'static str,
}

impl ActionKey {
    pub const fn new(page: &'static str, action: &'static str) -> Self {
        Self { page, action }
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.page, self.action)
    }
}

/// Set of submissions currently outstanding
#[derive(Debug, Clone, Default)]
pub struct SubmissionRegistry {
    active: Arc<Mutex<HashSet<ActionKey>>>,
}

impl SubmissionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key`; `None` while another submission holds it
    pub fn try_begin(&self, key: ActionKey) -> Option<SubmissionTicket> {
        let inserted = self.active.lock().insert(key);
        if inserted {
            Some(SubmissionTicket { key, active: Arc::clone(&self.active) })
        } else {
            debug!(action = %key, "submission rejected, one already in flight");
            None
        }
    }

    pub fn is_in_flight(&self, key: ActionKey) -> bool {
        self.active.lock().contains(&key)
    }

    pub fn in_flight_count(&self) -> usize {
        self.active.lock().len()
    }
}

/// Held for the duration of a submission; releases the key on drop
#[must_use = "the submission is released as soon as the ticket is dropped"]
#[derive(Debug)]
pub struct SubmissionTicket {
    key: ActionKey,
    active: Arc<Mutex<HashSet<ActionKey>>>,
}

impl SubmissionTicket {
    pub fn key(&self) -> ActionKey {
        self.key
    }
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        self.active.lock().remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAVE: ActionKey = ActionKey::new("profile", "save");
    const ADD: ActionKey = ActionKey::new("my_professions", "add");

    #[test]
    fn second_submission_is_rejected_until_release() {
        let registry = SubmissionRegistry::new();

        let ticket = registry.try_begin(SAVE);
        assert!(ticket.is_some());
        assert!(registry.try_begin(SAVE).is_none());
        assert!(registry.is_in_flight(SAVE));

        drop(ticket);
        assert!(!registry.is_in_flight(SAVE));
        assert!(registry.try_begin(SAVE).is_some());
    }

    #[test]
    fn keys_are_independent() {
        let registry = SubmissionRegistry::new();
        let _save = registry.try_begin(SAVE);
        let _add = registry.try_begin(ADD);

        assert_eq!(registry.in_flight_count(), 2);
        assert_eq!(SAVE.to_string(), "profile::save");
    }
}
