//! Integration tests for the credential store
//!
//! Exercises both store implementations through the `CredentialStore`
//! trait object, the way the transport consumes them.

use std::sync::Arc;

use vitrin_common::credentials::{CredentialStore, CredentialUpdate, Credentials,
                                 FileCredentialStore, MemoryCredentialStore};
use vitrin_common::testing::RecordingCredentialStore;

/// Validates the round-trip property against every implementation:
/// `set({access_token: "a"})` then `get()` yields "a"; `clear()` then
/// `get()` yields all fields absent.
#[tokio::test]
async fn roundtrip_property_holds_for_all_stores() {
    let dir = tempfile::tempdir().expect("tempdir");

    let stores: Vec<Arc<dyn CredentialStore>> = vec![
        Arc::new(MemoryCredentialStore::new()),
        Arc::new(
            FileCredentialStore::open(dir.path().join("creds.json"))
                .await
                .expect("file store"),
        ),
        Arc::new(RecordingCredentialStore::new()),
    ];

    for store in stores {
        store.set(CredentialUpdate::access_token("a")).await.expect("set");
        let credentials = store.get().await.expect("get");
        assert_eq!(credentials.access_token.as_deref(), Some("a"));

        store.clear().await.expect("clear");
        assert_eq!(store.get().await.expect("get"), Credentials::default());
    }
}

/// Concurrent partial writes through the trait object must not lose fields.
#[tokio::test]
async fn concurrent_updates_are_serialized() {
    let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                let update = if i % 2 == 0 {
                    CredentialUpdate::access_token(format!("T{i}"))
                } else {
                    CredentialUpdate {
                        refresh_token: Some(format!("R{i}")),
                        ..CredentialUpdate::default()
                    }
                };
                store.set(update).await
            })
        })
        .collect();

    for handle in handles {
        handle.await.expect("join").expect("set");
    }

    let credentials = store.get().await.expect("get");
    // Which write wins is unspecified; that both fields survived is not.
    assert!(credentials.access_token.is_some());
    assert!(credentials.refresh_token.is_some());
}

/// A seeded recording store reports exactly the traffic the caller drove.
#[tokio::test]
async fn recording_store_observes_refresh_shaped_traffic() {
    let store = RecordingCredentialStore::with_credentials(Credentials {
        access_token: Some("T1".into()),
        refresh_token: Some("R1".into()),
        user_id: Some("1".into()),
    });

    // Simulate what the transport does on a successful refresh.
    let before = store.get().await.expect("get");
    assert_eq!(before.usable_refresh_token(), Some("R1"));
    store.set(CredentialUpdate::access_token("T2")).await.expect("set");

    assert_eq!(store.set_count(), 1);
    assert_eq!(store.clear_count(), 0);
    let after = store.get().await.expect("get");
    assert_eq!(after.access_token.as_deref(), Some("T2"));
    assert_eq!(after.refresh_token.as_deref(), Some("R1"));
}
