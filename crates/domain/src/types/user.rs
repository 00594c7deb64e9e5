//! User account types

use serde::{Deserialize, Serialize};

/// A user account as returned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub fullname: String,
    pub email: String,
    pub phone: Option<String>,
    /// Server-side role string ("customer", "seller", "admin")
    pub role: String,
    pub created_at: String,
    #[serde(default)]
    pub is_deleted: bool,
}

/// Trimmed account record embedded in other resources
///
/// Seller-application listings inline the applicant with only these four
/// fields; no role or timestamp comes over the wire there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub fullname: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}
