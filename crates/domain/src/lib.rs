//! # Vitrin Domain
//!
//! Wire-level domain types for the Vitrin shopping platform API.
//!
//! This crate contains:
//! - Entity records mirroring server JSON (Product, Order, Cart, ...)
//! - Write-only request DTOs
//! - Response envelopes with advisory `message`/`error` fields
//! - Domain error types and Result definitions
//!
//! ## Architecture
//! - No dependencies on other Vitrin crates
//! - Only external dependencies allowed
//! - Pure data structures; no transport or storage logic

pub mod errors;
pub mod requests;
pub mod responses;
pub mod types;

// Re-export commonly used items
pub use errors::{ErrorCategory, Result, VitrinError};
pub use requests::*;
pub use responses::*;
pub use types::*;
