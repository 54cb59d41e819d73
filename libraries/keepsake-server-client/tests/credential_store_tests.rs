//! File credential store and auth session persistence

use keepsake_server_client::{
    AuthSession, CredentialStore, Credentials, FileCredentialStore, ServerClientError,
};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> FileCredentialStore {
    FileCredentialStore::new(dir.path().join("nested").join("credentials.json"))
}

#[test]
fn missing_file_reads_as_logged_out() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    assert!(store.load().unwrap().is_none());
    // Clearing a missing file is fine
    store.clear().unwrap();
}

#[test]
fn login_survives_restart() {
    let dir = TempDir::new().unwrap();

    let mut session = AuthSession::init(store_in(&dir)).unwrap();
    session.login("tok-9", "superadmin").unwrap();
    assert!(session.store().path().exists());
    drop(session);

    let restored = AuthSession::init(store_in(&dir)).unwrap();
    assert_eq!(restored.current(), Some("superadmin"));
    assert_eq!(restored.bearer(), Some("tok-9"));
}

#[test]
fn logout_removes_file() {
    let dir = TempDir::new().unwrap();
    let mut session = AuthSession::init(store_in(&dir)).unwrap();
    session.login("tok", "admin").unwrap();

    session.logout().unwrap();
    assert!(!session.store().path().exists());
    assert!(AuthSession::init(store_in(&dir))
        .unwrap()
        .current()
        .is_none());
}

#[test]
fn token_without_role_is_not_a_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("credentials.json");
    std::fs::write(&path, r#"{"token": "orphan"}"#).unwrap();

    let session = AuthSession::init(FileCredentialStore::new(&path)).unwrap();
    assert!(!session.is_authenticated());
}

#[test]
fn corrupt_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("credentials.json");
    std::fs::write(&path, "not json").unwrap();

    let err = FileCredentialStore::new(&path).load().unwrap_err();
    assert!(matches!(err, ServerClientError::CredentialStore(_)));
}

#[test]
fn save_overwrites_previous_credentials() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store
        .save(&Credentials {
            token: "a".into(),
            role: "admin".into(),
        })
        .unwrap();
    store
        .save(&Credentials {
            token: "b".into(),
            role: "cliente".into(),
        })
        .unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.token, "b");
    assert_eq!(loaded.role, "cliente");
}
