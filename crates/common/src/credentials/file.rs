//! JSON-file-backed credential store
//!
//! The on-disk format is a single JSON object with the three credential
//! fields. Commits go through a temp file in the same directory followed by
//! a rename, so a crash mid-write leaves either the old file or the new
//! one, never a torn mix.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::traits::{CredentialStore, CredentialStoreError};
use super::types::{CredentialUpdate, Credentials};

/// Credential store persisted to a JSON file
///
/// A mutex serializes every mutation; the in-memory copy is the source of
/// truth between commits, so `get` never touches the disk after load.
pub struct FileCredentialStore {
    path: PathBuf,
    state: Mutex<Credentials>,
}

impl FileCredentialStore {
    /// Open a store at `path`, loading existing credentials if the file is
    /// present.
    ///
    /// A missing file is the normal first-run state, not an error. An
    /// unreadable or corrupt file is logged and treated as unset rather
    /// than blocking startup on a stale artifact.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, CredentialStoreError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let state = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<Credentials>(&bytes) {
                Ok(credentials) => credentials,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "credential file unreadable, starting unset");
                    Credentials::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Credentials::default(),
            Err(err) => return Err(err.into()),
        };

        debug!(path = %path.display(), loaded = !state.is_empty(), "credential store opened");

        Ok(Self { path, state: Mutex::new(state) })
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn commit(&self, credentials: &Credentials) -> Result<(), CredentialStoreError> {
        let bytes = serde_json::to_vec_pretty(credentials)?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self) -> Result<Credentials, CredentialStoreError> {
        Ok(self.state.lock().await.clone())
    }

    async fn set(&self, update: CredentialUpdate) -> Result<(), CredentialStoreError> {
        let mut state = self.state.lock().await;
        state.apply(update);
        self.commit(&state).await
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        let mut state = self.state.lock().await;
        *state = Credentials::default();
        self.commit(&state).await?;
        debug!(path = %self.path.display(), "credentials cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("credentials.json")
    }

    #[tokio::test]
    async fn test_roundtrip_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        {
            let store = FileCredentialStore::open(&path).await.unwrap();
            store.set(CredentialUpdate::from_login("T1", "R1", "7")).await.unwrap();
        }

        // A fresh instance must see what the first one committed.
        let store = FileCredentialStore::open(&path).await.unwrap();
        let credentials = store.get().await.unwrap();
        assert_eq!(credentials.access_token.as_deref(), Some("T1"));
        assert_eq!(credentials.refresh_token.as_deref(), Some("R1"));
        assert_eq!(credentials.user_id.as_deref(), Some("7"));
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_unset() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::open(store_path(&dir)).await.unwrap();

        assert!(store.get().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        tokio::fs::write(&path, b"not json at all").await.unwrap();

        let store = FileCredentialStore::open(&path).await.unwrap();
        assert!(store.get().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let store = FileCredentialStore::open(&path).await.unwrap();
        store.set(CredentialUpdate::from_login("T1", "R1", "7")).await.unwrap();
        store.clear().await.unwrap();

        let reopened = FileCredentialStore::open(&path).await.unwrap();
        assert!(reopened.get().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_sets_lose_no_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store =
            std::sync::Arc::new(FileCredentialStore::open(store_path(&dir)).await.unwrap());

        let a = {
            let store = store.clone();
            tokio::spawn(async move { store.set(CredentialUpdate::access_token("T2")).await })
        };
        let b = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .set(CredentialUpdate {
                        refresh_token: Some("R2".into()),
                        ..CredentialUpdate::default()
                    })
                    .await
            })
        };
        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        let credentials = store.get().await.unwrap();
        assert_eq!(credentials.access_token.as_deref(), Some("T2"));
        assert_eq!(credentials.refresh_token.as_deref(), Some("R2"));
    }
}
