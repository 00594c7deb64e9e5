//! Favorite (wishlist) types

use serde::{Deserialize, Serialize};

use super::product::Product;

/// A favorited product
///
/// The listing dump carries only `id`, `created_at` and the embedded
/// product; the owning user is implicit in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Favorite {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    pub created_at: String,
    pub product: Product,
}

impl Favorite {
    /// Id of the favorited product; removal on the wire is keyed by this,
    /// not by the favorite's own id.
    #[must_use]
    pub fn product_id(&self) -> i64 {
        self.product.id
    }
}
