//! The credential store seam
//!
//! The trait abstracts credential persistence so the transport, the
//! repositories, and tests can share one injected store and substitute
//! doubles at the boundary.

use async_trait::async_trait;
use thiserror::Error;

use super::types::{CredentialUpdate, Credentials};

/// Storage faults. A store that simply has nothing saved is not a fault;
/// `get` answers that with all-absent fields.
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("credential storage I/O error: {0}")]
    Io(String),

    #[error("credential serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for CredentialStoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CredentialStoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Process-wide credential storage
///
/// Implementations must serialize mutation internally: concurrent `set`
/// calls may interleave in any order, but no write may be lost and readers
/// must never observe a half-applied update.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read the current snapshot. Fails soft: an unset store yields
    /// [`Credentials::default`], not an error.
    async fn get(&self) -> Result<Credentials, CredentialStoreError>;

    /// Merge a partial update and commit it on every exit path.
    async fn set(&self, update: CredentialUpdate) -> Result<(), CredentialStoreError>;

    /// Drop all fields atomically (logout, failed refresh).
    async fn clear(&self) -> Result<(), CredentialStoreError>;
}
