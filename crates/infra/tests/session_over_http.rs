//! Session store, file storage, and API client working together against a
//! mock backend

use std::sync::Arc;

use euindico_core::{DirectoryApi, KeyValueStore, SessionStore};
use euindico_domain::constants::{STORAGE_KEY_TOKEN, STORAGE_KEY_USERNAME};
use euindico_infra::{ApiClient, ApiClientConfig, FileStore, StoredCredentials};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Stack {
    _dir: TempDir,
    storage: Arc<FileStore>,
    api: Arc<ApiClient>,
    session: SessionStore,
}

fn stack(server: &MockServer) -> Stack {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(FileStore::open(dir.path().join("session.json")).unwrap());
    let api = Arc::new(
        ApiClient::new(
            ApiClientConfig { base_url: server.uri(), ..Default::default() },
            Arc::new(StoredCredentials::new(storage.clone())),
        )
        .unwrap(),
    );
    let session = SessionStore::restore(storage.clone(), api.clone());
    Stack { _dir: dir, storage, api, session }
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "token": "t1",
            "user": { "username": "a@b.com", "name": "A", "isAdmin": false }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_persists_credentials_used_by_later_requests() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/user/professions"))
        .and(header("authorization", "Bearer t1"))
        .and(header("x-username", "a@b.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{ "id": 4, "nome": "Pintor", "situacao": "A", "avaliacao": "5" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stack = stack(&server);
    assert!(stack.session.login("a@b.com", "secret").await);
    assert_eq!(stack.storage.get(STORAGE_KEY_TOKEN).unwrap().as_deref(), Some("t1"));
    assert_eq!(stack.storage.get(STORAGE_KEY_USERNAME).unwrap().as_deref(), Some("a@b.com"));

    let mine = stack.api.user_professions().await.unwrap().success().unwrap();
    assert_eq!(mine[0].name, "Pintor");
}

#[tokio::test]
async fn restored_session_survives_restart() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let first = stack(&server);
    assert!(first.session.login("a@b.com", "secret").await);

    let restored = SessionStore::restore(first.storage.clone(), first.api.clone());
    assert!(restored.is_authenticated());
    assert_eq!(restored.user().map(|u| u.name), Some("A".to_string()));
}

#[tokio::test]
async fn logout_clears_file_even_when_backend_is_down() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let stack = stack(&server);
    assert!(stack.session.login("a@b.com", "secret").await);

    stack.session.logout().await;

    assert!(!stack.session.is_authenticated());
    assert_eq!(stack.storage.get(STORAGE_KEY_TOKEN).unwrap(), None);
}
