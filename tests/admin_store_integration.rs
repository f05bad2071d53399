//! Admin flow against the file-backed store

use std::io::Cursor;
use std::sync::Arc;

use awaazein::commands;
use awaazein_app::{AdminSession, FileStore, SecureCredentialStore, StoreEvent};
use awaazein_core::Error;
use tempfile::tempdir;

fn open(path: &std::path::Path) -> Arc<SecureCredentialStore> {
    Arc::new(SecureCredentialStore::new(FileStore::new(path)))
}

#[test]
fn test_cli_provision_and_update_seen_by_running_app() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("store.json");

    // The TUI holds one store instance, the CLI opens its own
    let app_store = open(&path);
    assert!(matches!(
        app_store.require_livestream_id(),
        Err(Error::NotConfigured)
    ));

    let cli_store = open(&path);
    commands::provision(&cli_store, &mut Cursor::new("Admin@2025\n")).unwrap();
    commands::set_livestream(
        cli_store,
        "https://youtu.be/LiveNow?t=30",
        &mut Cursor::new("Admin@2025\n"),
    )
    .unwrap();

    assert_eq!(app_store.require_livestream_id().unwrap(), "LiveNow");
}

#[test]
fn test_secret_and_link_survive_restart() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("store.json");

    {
        let store = open(&path);
        store.set_admin_secret("pw").unwrap();
        let mut session = AdminSession::new(store.clone());
        assert!(session.authenticate("pw"));
        session
            .update_livestream("https://www.youtube.com/embed/persisted")
            .unwrap();
    }

    let store = open(&path);
    assert_eq!(
        store.get_livestream_id().unwrap(),
        Some("persisted".to_string())
    );

    // Sessions do not survive a restart
    let session = AdminSession::new(store.clone());
    assert!(!session.is_authenticated());

    let mut session = session;
    assert!(session.authenticate("pw"));
    assert!(!session.authenticate("PW"));
}

#[test]
fn test_raw_file_never_contains_password() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("store.json");
    open(&path).set_admin_secret("plaintext-secret").unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("plaintext-secret"));
    assert!(raw.contains("admin_credentials_hash"));
}

#[tokio::test]
async fn test_update_broadcasts_to_subscriber() {
    let temp = tempdir().unwrap();
    let store = open(&temp.path().join("store.json"));
    store.set_admin_secret("pw").unwrap();
    let mut events = store.subscribe();

    let mut session = AdminSession::new(store.clone());
    assert!(session.authenticate("pw"));
    session.update_livestream("youtu.be/xyz").unwrap();

    assert_eq!(events.recv().await.unwrap(), StoreEvent::LivestreamLinkUpdated);
}
