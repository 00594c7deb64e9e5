//! Error types used throughout the client SDK

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Vitrin operations
///
/// Variants map one-to-one onto the outcomes a caller must distinguish:
/// connection problems, authentication loss, server-side rejection, and
/// absent resources. Each carries displayable text.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum VitrinError {
    /// No response was obtained (DNS, connect, reset, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// A 401 that survived the refresh flow, or the refresh itself failed.
    /// Local credentials have been cleared when this is returned.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Non-2xx with a structured error body (duplicate email, stock limit,
    /// admin-only, ...). The text is server-provided and shown verbatim.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested resource does not exist (404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// 5xx from the server.
    #[error("Server error: {0}")]
    Server(String),

    /// Response body could not be decoded into the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse classification used by callers that route errors to UI surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transient connection problem; show "connection error", never retried
    /// silently.
    Network,
    /// Route the user to re-authentication.
    Authentication,
    /// Show the server-provided text.
    Validation,
    /// Show an empty/absent result with a message, not a crash.
    NotFound,
    /// Server-side fault.
    Server,
    /// Programming or configuration fault.
    Internal,
}

impl VitrinError {
    /// Get the error category for this error
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Network(_) => ErrorCategory::Network,
            Self::Auth(_) => ErrorCategory::Authentication,
            Self::Validation(_) => ErrorCategory::Validation,
            Self::NotFound(_) => ErrorCategory::NotFound,
            Self::Server(_) => ErrorCategory::Server,
            Self::Decode(_) | Self::Config(_) | Self::Internal(_) => ErrorCategory::Internal,
        }
    }

    /// Whether the caller should discard local credentials and route the
    /// user to a login flow.
    #[must_use]
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

/// Result type alias for Vitrin operations
pub type Result<T> = std::result::Result<T, VitrinError>;
