//! Address book endpoints

use std::sync::Arc;

use vitrin_domain::{Address, AddressActionResponse, CreateAddressRequest, MessageResponse,
                    Result, UpdateAddressRequest};

use crate::transport::{AuthTransport, RequestSpec};

/// Client for `/api/addresses`
pub struct AddressesClient {
    transport: Arc<AuthTransport>,
}

impl AddressesClient {
    /// Create the client over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { transport }
    }

    /// `GET /api/addresses` (the caller's own, soft-deleted excluded)
    ///
    /// # Errors
    /// `Auth` when no valid session exists.
    pub async fn get_all(&self) -> Result<Vec<Address>> {
        self.transport.execute(RequestSpec::get("/api/addresses")).await
    }

    /// `GET /api/addresses/{id}`
    ///
    /// # Errors
    /// `NotFound` for addresses that are not the caller's.
    pub async fn get_by_id(&self, address_id: i64) -> Result<Address> {
        self.transport.execute(RequestSpec::get(format!("/api/addresses/{}", address_id))).await
    }

    /// `POST /api/addresses`
    ///
    /// # Errors
    /// `Validation` for rejected fields.
    pub async fn create(&self, request: &CreateAddressRequest) -> Result<AddressActionResponse> {
        self.transport.execute(RequestSpec::post("/api/addresses").json(request)?).await
    }

    /// `PUT /api/addresses/{id}`
    ///
    /// # Errors
    /// `NotFound` for addresses that are not the caller's.
    pub async fn update(
        &self,
        address_id: i64,
        request: &UpdateAddressRequest,
    ) -> Result<AddressActionResponse> {
        self.transport
            .execute(RequestSpec::put(format!("/api/addresses/{}", address_id)).json(request)?)
            .await
    }

    /// `DELETE /api/addresses/{id}` (soft delete; past orders keep their
    /// shipping snapshot)
    ///
    /// # Errors
    /// `NotFound` for addresses that are not the caller's.
    pub async fn delete(&self, address_id: i64) -> Result<MessageResponse> {
        self.transport
            .execute(RequestSpec::delete(format!("/api/addresses/{}", address_id)))
            .await
    }
}
