//! Mock implementations of common traits

// Test mocks keep their error surface simple; failures are injected, not
// propagated from real storage.
#![allow(clippy::missing_errors_doc)]

use std::sync::Mutex;

use async_trait::async_trait;

use crate::credentials::{CredentialStore, CredentialStoreError, CredentialUpdate, Credentials,
                         MemoryCredentialStore};

/// One observed credential store operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Get,
    Set(Credentials),
    Clear,
}

/// Credential store that records every operation for assertions
///
/// Wraps a [`MemoryCredentialStore`] so behavior matches the real thing;
/// the log captures the post-state of each `set`.
#[derive(Default)]
pub struct RecordingCredentialStore {
    inner: MemoryCredentialStore,
    // Guard never crosses an await, so a std Mutex suffices.
    log: Mutex<Vec<StoreOp>>,
}

impl RecordingCredentialStore {
    /// Create an empty recording store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording store pre-seeded with credentials
    #[must_use]
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            inner: MemoryCredentialStore::with_credentials(credentials),
            log: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the operations seen so far
    ///
    /// # Panics
    /// Panics if the log mutex was poisoned by a previous test panic.
    #[must_use]
    pub fn operations(&self) -> Vec<StoreOp> {
        self.log.lock().unwrap().clone()
    }

    /// Number of `set` operations observed
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.operations().iter().filter(|op| matches!(op, StoreOp::Set(_))).count()
    }

    /// Number of `clear` operations observed
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.operations().iter().filter(|op| matches!(op, StoreOp::Clear)).count()
    }

    fn record(&self, op: StoreOp) {
        if let Ok(mut log) = self.log.lock() {
            log.push(op);
        }
    }
}

#[async_trait]
impl CredentialStore for RecordingCredentialStore {
    async fn get(&self) -> Result<Credentials, CredentialStoreError> {
        self.record(StoreOp::Get);
        self.inner.get().await
    }

    async fn set(&self, update: CredentialUpdate) -> Result<(), CredentialStoreError> {
        self.inner.set(update).await?;
        let state = self.inner.get().await?;
        self.record(StoreOp::Set(state));
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        self.record(StoreOp::Clear);
        self.inner.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_operations_in_order() {
        let store = RecordingCredentialStore::new();

        store.set(CredentialUpdate::access_token("T1")).await.unwrap();
        let _ = store.get().await.unwrap();
        store.clear().await.unwrap();

        let ops = store.operations();
        assert_eq!(ops.len(), 3);
        assert!(matches!(ops[0], StoreOp::Set(_)));
        assert_eq!(ops[1], StoreOp::Get);
        assert_eq!(ops[2], StoreOp::Clear);
        assert_eq!(store.set_count(), 1);
        assert_eq!(store.clear_count(), 1);
    }
}
