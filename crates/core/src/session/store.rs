//! Session store
//!
//! Owns the in-memory session and mirrors it into durable storage. The
//! session is either fully authenticated (user and token) or anonymous;
//! there is no state in which only one of the two is known.

use std::future::Future;
use std::sync::Arc;

use euindico_domain::constants::{
    SESSION_STORAGE_KEYS, STORAGE_KEY_TOKEN, STORAGE_KEY_USER, STORAGE_KEY_USERNAME,
};
use euindico_domain::{Credentials, Envelope, SessionUser};
use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use super::ports::KeyValueStore;
use crate::directory::DirectoryApi;

/// A user together with the bearer token that proves it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    pub user: SessionUser,
    pub token: String,
}

/// Point-in-time view of the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    auth: Option<AuthenticatedSession>,
}

impl Session {
    /// No user signed in
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: SessionUser, token: impl Into<String>) -> Self {
        Self { auth: Some(AuthenticatedSession { user, token: token.into() }) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    /// Authenticated and flagged as admin
    pub fn is_admin(&self) -> bool {
        self.auth.as_ref().is_some_and(|auth| auth.user.is_admin)
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.auth.as_ref().map(|auth| &auth.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.auth.as_ref().map(|auth| auth.token.as_str())
    }

    pub fn auth(&self) -> Option<&AuthenticatedSession> {
        self.auth.as_ref()
    }
}

/// Explicitly owned session state, shared by reference
///
/// Created once with [`SessionStore::restore`] and handed to every consumer;
/// there is no global instance.
pub struct SessionStore {
    state: RwLock<Session>,
    storage: Arc<dyn KeyValueStore>,
    api: Arc<dyn DirectoryApi>,
}

impl SessionStore {
    /// Rebuild the session from durable storage
    ///
    /// Synchronous and offline: the restored token is not validated here, an
    /// invalid one surfaces later as a session-expired error. A missing token,
    /// a missing user, or a user record that does not parse all yield an
    /// anonymous session.
    pub fn restore(storage: Arc<dyn KeyValueStore>, api: Arc<dyn DirectoryApi>) -> Self {
        let session = read_persisted(storage.as_ref());
        if let Some(user) = session.user() {
            info!(username = %user.username, "session restored from storage");
        } else {
            debug!("no persisted session, starting anonymous");
        }

        Self { state: RwLock::new(session), storage, api }
    }

    /// Copy of the current session
    pub fn snapshot(&self) -> Session {
        self.state.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.state.read().is_admin()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.state.read().user().cloned()
    }

    /// Sign in; never fails outward
    ///
    /// On success the three storage keys are written in one step and then the
    /// in-memory session is replaced. Any failure leaves both untouched.
    pub async fn login(&self, identifier: &str, secret: &str) -> bool {
        let credentials = Credentials::new(identifier, secret);
        let grant = match self.api.login(&credentials).await {
            Ok(Envelope::Success(grant)) => grant,
            Ok(Envelope::Failure { message }) => {
                debug!(message = ?message, "login rejected by backend");
                return false;
            }
            Err(err) => {
                warn!(error = %err, "login request failed");
                return false;
            }
        };

        if grant.token.is_empty() {
            warn!("login succeeded without a token, treating as failure");
            return false;
        }

        let user_json = match serde_json::to_string(&grant.user) {
            Ok(json) => json,
            Err(err) => {
                error!(error = %err, "failed to serialize session user");
                return false;
            }
        };

        let entries = [
            (STORAGE_KEY_TOKEN, grant.token.as_str()),
            (STORAGE_KEY_USER, user_json.as_str()),
            (STORAGE_KEY_USERNAME, grant.user.username.as_str()),
        ];
        if let Err(err) = self.storage.set_many(&entries) {
            error!(error = %err, "failed to persist session");
            return false;
        }

        info!(username = %grant.user.username, admin = grant.user.is_admin, "logged in");
        *self.state.write() = Session::authenticated(grant.user, grant.token);
        true
    }

    /// Sign out
    ///
    /// Memory and storage are cleared before this returns. The returned future
    /// notifies the backend; it owns everything it needs, so callers may await
    /// it, spawn it, or drop it. A failed notification is only logged.
    #[must_use = "the backend is only notified if the returned future is polled"]
    pub fn logout(&self) -> impl Future<Output = ()> + Send + 'static {
        self.clear("logout");

        let api = Arc::clone(&self.api);
        async move {
            match api.logout().await {
                Ok(Envelope::Success(_)) => debug!("backend acknowledged logout"),
                Ok(Envelope::Failure { message }) => {
                    warn!(message = ?message, "backend rejected logout notification");
                }
                Err(err) => warn!(error = %err, "logout notification failed"),
            }
        }
    }

    /// Drop a session the backend no longer accepts; the backend is not told
    pub fn expire(&self) {
        self.clear("session expired");
    }

    fn clear(&self, reason: &'static str) {
        let previous = std::mem::take(&mut *self.state.write());
        if let Err(err) = self.storage.remove_many(&SESSION_STORAGE_KEYS) {
            error!(error = %err, reason, "failed to clear persisted session");
        }
        if let Some(user) = previous.user() {
            info!(username = %user.username, reason, "session cleared");
        }
    }
}

fn read_persisted(storage: &dyn KeyValueStore) -> Session {
    let read = |key: &str| match storage.get(key) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(err) => {
            error!(error = %err, key, "failed to read persisted session");
            None
        }
    };

    let (Some(token), Some(user_json)) = (read(STORAGE_KEY_TOKEN), read(STORAGE_KEY_USER)) else {
        return Session::anonymous();
    };

    match serde_json::from_str::<SessionUser>(&user_json) {
        Ok(user) => Session::authenticated(user, token),
        Err(err) => {
            warn!(error = %err, "persisted user record is unreadable");
            Session::anonymous()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool) -> SessionUser {
        SessionUser { username: "a@b.com".into(), name: "A".into(), is_admin }
    }

    #[test]
    fn anonymous_session_has_neither_user_nor_token() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(session.token().is_none());
        assert!(!session.is_admin());
    }

    #[test]
    fn authenticated_session_exposes_both_halves() {
        let session = Session::authenticated(user(true), "t1");
        assert!(session.is_authenticated());
        assert!(session.is_admin());
        assert_eq!(session.token(), Some("t1"));
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("A"));
    }
}
