//! Shopping cart types

use serde::{Deserialize, Serialize};

use super::product::Product;

/// The user's cart with its items and a server-computed total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Sum of item subtotals, computed server-side
    #[serde(default, alias = "total_price")]
    pub total: f64,
}

/// One line in the cart
///
/// `product` is a denormalized snapshot taken when the server rendered the
/// cart, not a live reference to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    #[serde(default)]
    pub cart_id: i64,
    #[serde(default)]
    pub product_id: i64,
    pub quantity: i64,
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub subtotal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_decodes() {
        // The server answers a missing cart with a bare items/total object.
        let json = r#"{"items": [], "total": 0}"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert!(cart.items.is_empty());
        assert_eq!(cart.total, 0.0);
    }

    #[test]
    fn test_cart_total_price_alias() {
        let json = r#"{"id": 4, "user_id": 9, "items": [], "total_price": 99.5}"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.total, 99.5);
    }
}
