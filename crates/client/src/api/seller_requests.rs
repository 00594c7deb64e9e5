//! Seller application endpoints
//!
//! A customer applies with company details; an admin approves or rejects.
//! Approval flips the applicant's role server-side, which only becomes
//! visible locally after the next login or profile fetch.

use std::sync::Arc;

use vitrin_domain::{Result, SellerApplyRequest, SellerRequest, SellerRequestResponse};

use crate::transport::{AuthTransport, RequestSpec};

/// Client for `/api/seller_requests`
pub struct SellerRequestsClient {
    transport: Arc<AuthTransport>,
}

impl SellerRequestsClient {
    /// Create the client over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { transport }
    }

    /// `POST /api/seller_requests/apply`
    ///
    /// # Errors
    /// `Validation` when an application is already pending.
    pub async fn apply(&self, request: &SellerApplyRequest) -> Result<SellerRequestResponse> {
        self.transport
            .execute(RequestSpec::post("/api/seller_requests/apply").json(request)?)
            .await
    }

    /// `GET /api/seller_requests/pending` (admin-only on the server side)
    ///
    /// # Errors
    /// `Validation` when the caller lacks the role.
    pub async fn get_pending(&self) -> Result<Vec<SellerRequest>> {
        self.transport.execute(RequestSpec::get("/api/seller_requests/pending")).await
    }

    /// `POST /api/seller_requests/{id}/approve`
    ///
    /// # Errors
    /// `Validation` when the caller lacks the role.
    pub async fn approve(&self, request_id: i64) -> Result<SellerRequestResponse> {
        self.transport
            .execute(RequestSpec::post(format!("/api/seller_requests/{}/approve", request_id)))
            .await
    }

    /// `POST /api/seller_requests/{id}/reject`
    ///
    /// # Errors
    /// `Validation` when the caller lacks the role.
    pub async fn reject(&self, request_id: i64) -> Result<SellerRequestResponse> {
        self.transport
            .execute(RequestSpec::post(format!("/api/seller_requests/{}/reject", request_id)))
            .await
    }
}
