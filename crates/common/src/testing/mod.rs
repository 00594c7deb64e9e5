//! Test doubles for common traits
//!
//! Used by this workspace's own tests and available to SDK consumers that
//! want to assert on credential traffic.

pub mod mocks;

pub use mocks::{RecordingCredentialStore, StoreOp};
