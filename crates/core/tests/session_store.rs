//! Session store behaviour against storage and a scripted backend

mod support;

use std::sync::Arc;

use euindico_core::{KeyValueStore, MemoryStore, SessionStore};
use euindico_domain::constants::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER, STORAGE_KEY_USERNAME};
use euindico_domain::{Envelope, EuIndicoError, SessionUser};
use support::{persisted, user, FakeDirectoryApi, ReadOnlyStore};

fn stored(storage: &MemoryStore, key: &str) -> Option<String> {
    storage.get(key).unwrap()
}

#[test]
fn restore_with_token_and_user_is_authenticated() {
    let storage = persisted("t1", &user("A", false));
    let store = SessionStore::restore(storage, FakeDirectoryApi::new());

    let session = store.snapshot();
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("t1"));
    assert_eq!(session.user().map(|u| u.name.as_str()), Some("A"));
}

#[test]
fn restore_with_only_one_half_is_anonymous() {
    let api = FakeDirectoryApi::new();

    let token_only = Arc::new(MemoryStore::with_entries([(STORAGE_KEY_TOKEN, "t1")]));
    assert!(!SessionStore::restore(token_only, api.clone()).is_authenticated());

    let user_json = serde_json::to_string(&user("A", false)).unwrap();
    let user_only = Arc::new(MemoryStore::with_entries([(STORAGE_KEY_USER, user_json.as_str())]));
    assert!(!SessionStore::restore(user_only, api.clone()).is_authenticated());

    // restore never talks to the backend
    assert!(api.calls().is_empty());
}

#[test]
fn restore_ignores_unreadable_user_record() {
    let storage = Arc::new(MemoryStore::with_entries([
        (STORAGE_KEY_TOKEN, "t1"),
        (STORAGE_KEY_USER, "{not json"),
    ]));
    let store = SessionStore::restore(storage, FakeDirectoryApi::new());
    assert!(!store.is_authenticated());
    assert!(store.user().is_none());
}

#[tokio::test]
async fn successful_login_populates_session_and_all_keys() {
    let storage = Arc::new(MemoryStore::new());
    let api = FakeDirectoryApi::new();
    api.grant_login(
        "t1",
        SessionUser { username: "a@b.com".into(), name: "A".into(), is_admin: false },
    );
    let store = SessionStore::restore(storage.clone(), api.clone());

    assert!(store.login("a@b.com", "secret").await);

    assert!(store.is_authenticated());
    assert!(!store.is_admin());
    assert_eq!(stored(&storage, STORAGE_KEY_TOKEN).as_deref(), Some("t1"));
    assert_eq!(stored(&storage, STORAGE_KEY_USERNAME).as_deref(), Some("a@b.com"));
    let persisted_user: SessionUser =
        serde_json::from_str(&stored(&storage, STORAGE_KEY_USER).unwrap()).unwrap();
    assert_eq!(persisted_user.name, "A");
}

#[tokio::test]
async fn rejected_login_leaves_prior_session_untouched() {
    let previous = user("Prior", true);
    let storage = persisted("old-token", &previous);
    let api = FakeDirectoryApi::new();
    *api.login.lock() = Ok(Envelope::failure("Credenciais inválidas"));
    let store = SessionStore::restore(storage.clone(), api);

    assert!(!store.login("x@y.com", "wrong").await);

    assert_eq!(store.user(), Some(previous));
    assert_eq!(store.snapshot().token(), Some("old-token"));
    assert_eq!(stored(&storage, STORAGE_KEY_TOKEN).as_deref(), Some("old-token"));
}

#[tokio::test]
async fn transport_failure_on_login_returns_false() {
    let storage = Arc::new(MemoryStore::new());
    let api = FakeDirectoryApi::new();
    *api.login.lock() = Err(EuIndicoError::Network("connection refused".into()));
    let store = SessionStore::restore(storage.clone(), api);

    assert!(!store.login("a@b.com", "secret").await);
    assert!(!store.is_authenticated());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn login_without_token_counts_as_failure() {
    let api = FakeDirectoryApi::new();
    api.grant_login("", user("A", false));
    let store = SessionStore::restore(Arc::new(MemoryStore::new()), api);

    assert!(!store.login("a@b.com", "secret").await);
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn storage_failure_on_login_keeps_session_anonymous() {
    let api = FakeDirectoryApi::new();
    api.grant_login("t1", user("A", false));
    let store = SessionStore::restore(Arc::new(ReadOnlyStore::default()), api);

    assert!(!store.login("a@b.com", "secret").await);
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn logout_clears_before_notification_runs() {
    let storage = persisted("t1", &user("A", false));
    let api = FakeDirectoryApi::new();
    let store = SessionStore::restore(storage.clone(), api.clone());

    let notify = store.logout();

    // cleared synchronously, before the notification is polled
    assert!(!store.is_authenticated());
    assert!(storage.is_empty());
    assert!(api.calls().is_empty());

    notify.await;
    assert_eq!(api.calls(), vec!["POST /auth/logout"]);
}

#[tokio::test]
async fn failed_logout_notification_does_not_restore_session() {
    let storage = persisted("t1", &user("A", false));
    let api = FakeDirectoryApi::new();
    *api.logout.lock() = Err(EuIndicoError::Network("offline".into()));
    let store = SessionStore::restore(storage.clone(), api);

    store.logout().await;

    assert!(!store.is_authenticated());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn logout_notification_can_be_spawned() {
    let api = FakeDirectoryApi::new();
    let store = SessionStore::restore(persisted("t1", &user("A", false)), api.clone());

    tokio::spawn(store.logout()).await.unwrap();

    assert_eq!(api.call_count("POST /auth/logout"), 1);
}

#[test]
fn expire_clears_without_notifying_backend() {
    let storage = persisted("t1", &user("A", false));
    let api = FakeDirectoryApi::new();
    let store = SessionStore::restore(storage.clone(), api.clone());

    store.expire();

    assert!(!store.is_authenticated());
    assert!(storage.is_empty());
    assert!(api.calls().is_empty());
}
