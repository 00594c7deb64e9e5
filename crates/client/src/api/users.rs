//! User account endpoints

use std::sync::Arc;

use vitrin_domain::{MessageResponse, Result, UpdateUserRequest, User, UserUpdateResponse};

use crate::transport::{AuthTransport, RequestSpec};

/// Client for `/api/users`
pub struct UsersClient {
    transport: Arc<AuthTransport>,
}

impl UsersClient {
    /// Create the client over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { transport }
    }

    /// `GET /api/users` (admin-only on the server side)
    ///
    /// # Errors
    /// `Validation` when the caller lacks the role.
    pub async fn get_all(&self) -> Result<Vec<User>> {
        self.transport.execute(RequestSpec::get("/api/users")).await
    }

    /// `GET /api/users/me`
    ///
    /// # Errors
    /// `Auth` when no valid session exists.
    pub async fn get_me(&self) -> Result<User> {
        self.transport.execute(RequestSpec::get("/api/users/me")).await
    }

    /// `GET /api/users/{id}`
    ///
    /// # Errors
    /// `NotFound` for unknown ids.
    pub async fn get_by_id(&self, user_id: i64) -> Result<User> {
        self.transport.execute(RequestSpec::get(format!("/api/users/{}", user_id))).await
    }

    /// `PUT /api/users/{id}`
    ///
    /// # Errors
    /// `Validation` for rejected fields.
    pub async fn update(
        &self,
        user_id: i64,
        request: &UpdateUserRequest,
    ) -> Result<UserUpdateResponse> {
        self.transport
            .execute(RequestSpec::put(format!("/api/users/{}", user_id)).json(request)?)
            .await
    }

    /// `DELETE /api/users/{id}` (soft delete on the server)
    ///
    /// # Errors
    /// `NotFound` for unknown ids.
    pub async fn delete(&self, user_id: i64) -> Result<MessageResponse> {
        self.transport.execute(RequestSpec::delete(format!("/api/users/{}", user_id))).await
    }
}
