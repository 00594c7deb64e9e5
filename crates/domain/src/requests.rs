//! Write-only request DTOs
//!
//! Shapes sent to the server and never round-tripped back. All business
//! validation (stock limits, uniqueness, ownership) happens server-side;
//! these types only pin down the wire shape. Update DTOs serialize only
//! the fields being changed.

use serde::Serialize;

/// `POST /api/auth/register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub fullname: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// `POST /api/auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `PUT /api/users/{id}` — partial update
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// `POST /api/products`
#[derive(Debug, Clone, Serialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub category_id: i64,
}

/// `PUT /api/products/{id}` — partial update
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

/// `POST /api/categories` and `PUT /api/categories/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

/// `POST /api/cart/items`
#[derive(Debug, Clone, Serialize)]
pub struct AddToCartRequest {
    pub product_id: i64,
    pub quantity: i64,
}

/// `PUT /api/cart/items/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateCartItemRequest {
    pub quantity: i64,
}

/// `POST /api/orders`
///
/// With `items` absent the server orders the entire current cart.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    pub address_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItemRequest>>,
}

/// One explicit line of [`CreateOrderRequest`]
#[derive(Debug, Clone, Serialize)]
pub struct OrderItemRequest {
    pub product_id: i64,
    pub quantity: i64,
}

/// `PUT /api/orders/{id}/status` (admin)
#[derive(Debug, Clone, Serialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

/// `POST /api/favorites/`
#[derive(Debug, Clone, Serialize)]
pub struct AddFavoriteRequest {
    pub product_id: i64,
}

/// `POST /api/addresses`
#[derive(Debug, Clone, Serialize)]
pub struct CreateAddressRequest {
    pub title: String,
    pub city: String,
    pub district: String,
    pub detail: String,
}

/// `PUT /api/addresses/{id}` — partial update
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAddressRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// `POST /api/seller_requests/apply`
#[derive(Debug, Clone, Serialize)]
pub struct SellerApplyRequest {
    pub company_name: String,
    pub tax_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_skips_unset_fields() {
        let request = UpdateProductRequest { price: Some(19.9), ..Default::default() };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"price":19.9}"#);
    }

    #[test]
    fn test_register_without_phone() {
        let request = RegisterRequest {
            fullname: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
            phone: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("phone"));
    }

    #[test]
    fn test_create_order_for_whole_cart() {
        let request = CreateOrderRequest { address_id: 3, items: None };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"address_id":3}"#);
    }
}
