//! Response envelopes
//!
//! The server wraps mutations in `{message?, error?, <payload>?}` objects.
//! Both text fields are advisory; the HTTP status code is the authoritative
//! success discriminant, so every field here is optional and decoding never
//! fails on a missing one.

use serde::{Deserialize, Serialize};

use crate::types::{Address, Cart, CartItem, Category, Favorite, Order, ProductImage,
                   SellerRequest, User};

/// `POST /api/auth/login`, `/register` and `/refresh`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Bare `{message?, error?}` acknowledgement (deletes, clears, cancels)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Product create/update envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductActionResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub product: Option<crate::types::Product>,
}

/// Multipart image upload envelope; ids inside are server-assigned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<ProductImage>>,
}

/// Category create/update envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryActionResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
}

/// Cart item add/update envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemActionResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub cart_item: Option<CartItem>,
    #[serde(default)]
    pub cart: Option<Cart>,
}

/// Order create/status envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderActionResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub order: Option<Order>,
}

/// Favorite add/remove envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub favorite: Option<Favorite>,
}

/// Address create/update envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressActionResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
}

/// User update envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdateResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Seller application envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerRequestResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub request: Option<SellerRequest>,
}
