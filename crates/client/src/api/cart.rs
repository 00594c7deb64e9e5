//! Cart endpoints
//!
//! The cart is per-user and implicit in the session; no cart id appears in
//! any path. Item mutations answer with both the touched item and the
//! recomputed cart so callers can re-render totals without a second fetch.

use std::sync::Arc;

use vitrin_domain::{AddToCartRequest, Cart, CartItemActionResponse, MessageResponse, Result,
                    UpdateCartItemRequest};

use crate::transport::{AuthTransport, RequestSpec};

/// Client for `/api/cart`
pub struct CartClient {
    transport: Arc<AuthTransport>,
}

impl CartClient {
    /// Create the client over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { transport }
    }

    /// `GET /api/cart`
    ///
    /// A user with no cart yet receives an empty cart, not a 404.
    ///
    /// # Errors
    /// `Auth` when no valid session exists.
    pub async fn get(&self) -> Result<Cart> {
        self.transport.execute(RequestSpec::get("/api/cart")).await
    }

    /// `POST /api/cart/items`
    ///
    /// Adding a product already in the cart increments its quantity.
    ///
    /// # Errors
    /// `Validation` when the quantity exceeds stock.
    pub async fn add_item(&self, request: &AddToCartRequest) -> Result<CartItemActionResponse> {
        self.transport.execute(RequestSpec::post("/api/cart/items").json(request)?).await
    }

    /// `PUT /api/cart/items/{id}`
    ///
    /// # Errors
    /// `Validation` when the quantity exceeds stock.
    pub async fn update_item(
        &self,
        cart_item_id: i64,
        request: &UpdateCartItemRequest,
    ) -> Result<CartItemActionResponse> {
        self.transport
            .execute(RequestSpec::put(format!("/api/cart/items/{}", cart_item_id)).json(request)?)
            .await
    }

    /// `DELETE /api/cart/items/{id}`
    ///
    /// # Errors
    /// `NotFound` for items not in the caller's cart.
    pub async fn remove_item(&self, cart_item_id: i64) -> Result<MessageResponse> {
        self.transport
            .execute(RequestSpec::delete(format!("/api/cart/items/{}", cart_item_id)))
            .await
    }

    /// `DELETE /api/cart`
    ///
    /// # Errors
    /// `Auth` when no valid session exists.
    pub async fn clear(&self) -> Result<MessageResponse> {
        self.transport.execute(RequestSpec::delete("/api/cart")).await
    }
}
