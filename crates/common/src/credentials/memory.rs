//! In-memory credential store

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::traits::{CredentialStore, CredentialStoreError};
use super::types::{CredentialUpdate, Credentials};

/// Process-local store; nothing survives a restart
///
/// The default choice for tests and for embedding the SDK where the host
/// application handles persistence itself.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    inner: RwLock<Credentials>,
}

impl MemoryCredentialStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with credentials
    #[must_use]
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self { inner: RwLock::new(credentials) }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self) -> Result<Credentials, CredentialStoreError> {
        Ok(self.inner.read().await.clone())
    }

    async fn set(&self, update: CredentialUpdate) -> Result<(), CredentialStoreError> {
        self.inner.write().await.apply(update);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        *self.inner.write().await = Credentials::default();
        debug!("credentials cleared");
        Ok(())
    }
}
