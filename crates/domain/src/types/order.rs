//! Order types

use serde::{Deserialize, Serialize};

use super::product::Product;

/// A placed order with its shipping snapshot
///
/// Shipping fields are copied from the chosen address at checkout time, so
/// later address edits never rewrite order history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub total_price: f64,
    /// Server-side status string ("pending", "shipped", "cancelled", ...)
    pub status: String,
    pub created_at: String,
    pub shipping_title: String,
    pub shipping_city: String,
    pub shipping_district: String,
    pub shipping_detail: String,
    #[serde(default)]
    pub items: Option<Vec<OrderItem>>,
}

/// One line of an order, priced at purchase time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    #[serde(default)]
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub subtotal: f64,
}
