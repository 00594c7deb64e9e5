//! Credential storage
//!
//! Persists the access token, refresh token, and user id across process
//! restarts. No token validation or expiry tracking happens here; expiry is
//! only ever discovered through a failed authenticated call.
//!
//! # Module Organization
//!
//! - **[`types`]**: `Credentials` snapshot and `CredentialUpdate` partial
//!   write
//! - **[`traits`]**: the `CredentialStore` seam shared by transport and
//!   tests
//! - **[`memory`]**: process-local store, the default for tests
//! - **[`file`]**: JSON-file-backed store with atomic commits

pub mod file;
pub mod memory;
pub mod traits;
pub mod types;

pub use file::FileCredentialStore;
pub use memory::MemoryCredentialStore;
pub use traits::{CredentialStore, CredentialStoreError};
pub use types::{CredentialUpdate, Credentials};
