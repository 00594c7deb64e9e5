//! # Vitrin Common
//!
//! Shared infrastructure for the Vitrin client SDK. Today that is the
//! credential store: the single piece of cross-request shared state in the
//! system, holding the access token, refresh token, and user id.
//!
//! All mutation goes through the [`credentials::CredentialStore`] trait so
//! the transport, the repositories, and tests can share one injected
//! instance.

pub mod credentials;
pub mod testing;

pub use credentials::{CredentialStore, CredentialStoreError, CredentialUpdate, Credentials,
                      FileCredentialStore, MemoryCredentialStore};
