//! Shipping address types

use serde::{Deserialize, Serialize};

/// A saved shipping address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub city: String,
    pub district: String,
    pub detail: String,
    #[serde(default)]
    pub is_deleted: bool,
}
