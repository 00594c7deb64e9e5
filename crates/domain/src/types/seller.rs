//! Seller application types

use serde::{Deserialize, Serialize};

use super::user::UserSummary;

/// A pending or resolved application to become a seller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerRequest {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub tax_number: Option<String>,
    /// "pending", "approved" or "rejected"
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Applicant summary inlined on admin listings
    #[serde(default)]
    pub user: Option<UserSummary>,
}
