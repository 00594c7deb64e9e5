//! Order endpoints

use std::sync::Arc;

use vitrin_domain::{CreateOrderRequest, MessageResponse, Order, OrderActionResponse, Result,
                    UpdateOrderStatusRequest};

use crate::transport::{AuthTransport, RequestSpec};

/// Client for `/api/orders`
pub struct OrdersClient {
    transport: Arc<AuthTransport>,
}

impl OrdersClient {
    /// Create the client over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { transport }
    }

    /// `GET /api/orders` (the caller's own orders)
    ///
    /// # Errors
    /// `Auth` when no valid session exists.
    pub async fn get_all(&self) -> Result<Vec<Order>> {
        self.transport.execute(RequestSpec::get("/api/orders")).await
    }

    /// `GET /api/orders/{id}`
    ///
    /// # Errors
    /// `NotFound` for orders that are not the caller's.
    pub async fn get_by_id(&self, order_id: i64) -> Result<Order> {
        self.transport.execute(RequestSpec::get(format!("/api/orders/{}", order_id))).await
    }

    /// `POST /api/orders`
    ///
    /// Without an explicit item list the server converts the current cart;
    /// the shipping snapshot is copied from the referenced address.
    ///
    /// # Errors
    /// `Validation` for an empty cart or unknown address.
    pub async fn create(&self, request: &CreateOrderRequest) -> Result<OrderActionResponse> {
        self.transport.execute(RequestSpec::post("/api/orders").json(request)?).await
    }

    /// `PUT /api/orders/{id}/status` (admin-only on the server side)
    ///
    /// # Errors
    /// `Validation` when the caller lacks the role or the transition is
    /// illegal.
    pub async fn update_status(
        &self,
        order_id: i64,
        request: &UpdateOrderStatusRequest,
    ) -> Result<OrderActionResponse> {
        self.transport
            .execute(RequestSpec::put(format!("/api/orders/{}/status", order_id)).json(request)?)
            .await
    }

    /// `POST /api/orders/{id}/cancel`
    ///
    /// # Errors
    /// `Validation` once the order has shipped.
    pub async fn cancel(&self, order_id: i64) -> Result<MessageResponse> {
        self.transport
            .execute(RequestSpec::post(format!("/api/orders/{}/cancel", order_id)))
            .await
    }
}
