//! Category tree endpoints

use std::sync::Arc;

use vitrin_domain::{Category, CategoryActionResponse, CategoryRequest, MessageResponse, Result};

use crate::transport::{AuthTransport, RequestSpec};

/// Client for `/api/categories`
pub struct CategoriesClient {
    transport: Arc<AuthTransport>,
}

impl CategoriesClient {
    /// Create the client over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { transport }
    }

    /// `GET /api/categories`
    ///
    /// # Errors
    /// `Network` when unreachable.
    pub async fn get_all(&self) -> Result<Vec<Category>> {
        self.transport.execute(RequestSpec::get("/api/categories")).await
    }

    /// `GET /api/categories/roots` (top-level categories with children
    /// embedded)
    ///
    /// # Errors
    /// `Network` when unreachable.
    pub async fn get_roots(&self) -> Result<Vec<Category>> {
        self.transport.execute(RequestSpec::get("/api/categories/roots")).await
    }

    /// `GET /api/categories/{id}`
    ///
    /// # Errors
    /// `NotFound` for unknown ids.
    pub async fn get_by_id(&self, category_id: i64) -> Result<Category> {
        self.transport
            .execute(RequestSpec::get(format!("/api/categories/{}", category_id)))
            .await
    }

    /// `GET /api/categories/parent/{parent_id}`
    ///
    /// # Errors
    /// `NotFound` for unknown parents.
    pub async fn get_children(&self, parent_id: i64) -> Result<Vec<Category>> {
        self.transport
            .execute(RequestSpec::get(format!("/api/categories/parent/{}", parent_id)))
            .await
    }

    /// `POST /api/categories` (admin-only on the server side)
    ///
    /// # Errors
    /// `Validation` when the caller lacks the role.
    pub async fn create(&self, request: &CategoryRequest) -> Result<CategoryActionResponse> {
        self.transport.execute(RequestSpec::post("/api/categories").json(request)?).await
    }

    /// `PUT /api/categories/{id}`
    ///
    /// # Errors
    /// `Validation` when the caller lacks the role.
    pub async fn update(
        &self,
        category_id: i64,
        request: &CategoryRequest,
    ) -> Result<CategoryActionResponse> {
        self.transport
            .execute(RequestSpec::put(format!("/api/categories/{}", category_id)).json(request)?)
            .await
    }

    /// `DELETE /api/categories/{id}`
    ///
    /// # Errors
    /// `NotFound` for unknown ids.
    pub async fn delete(&self, category_id: i64) -> Result<MessageResponse> {
        self.transport
            .execute(RequestSpec::delete(format!("/api/categories/{}", category_id)))
            .await
    }
}
