//! Product catalog endpoints
//!
//! The only multipart surface in the API: image upload sends one form part
//! per file under the `images` field, and the server answers with the ids
//! it assigned. Image deletion is by that server-assigned id.

use std::sync::Arc;

use vitrin_core::ports::ImageUpload;
use vitrin_domain::{CreateProductRequest, MessageResponse, Product, ProductActionResponse,
                    ProductImageResponse, Result, UpdateProductRequest};

use crate::transport::{AuthTransport, FilePart, RequestSpec};

/// Client for `/api/products`
pub struct ProductsClient {
    transport: Arc<AuthTransport>,
}

impl ProductsClient {
    /// Create the client over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { transport }
    }

    /// `GET /api/products/search?q=`
    ///
    /// Returns the complete matching set; the wire has no pagination.
    ///
    /// # Errors
    /// `Network` when unreachable.
    pub async fn search(&self, query: &str) -> Result<Vec<Product>> {
        self.transport
            .execute(RequestSpec::get("/api/products/search").query("q", query))
            .await
    }

    /// `GET /api/products`
    ///
    /// # Errors
    /// `Network` when unreachable.
    pub async fn get_all(&self) -> Result<Vec<Product>> {
        self.transport.execute(RequestSpec::get("/api/products")).await
    }

    /// `GET /api/products/{id}`
    ///
    /// # Errors
    /// `NotFound` for unknown or soft-deleted products.
    pub async fn get_by_id(&self, product_id: i64) -> Result<Product> {
        self.transport.execute(RequestSpec::get(format!("/api/products/{}", product_id))).await
    }

    /// `POST /api/products`
    ///
    /// # Errors
    /// `Validation` for rejected fields or missing seller role.
    pub async fn create(&self, request: &CreateProductRequest) -> Result<ProductActionResponse> {
        self.transport.execute(RequestSpec::post("/api/products").json(request)?).await
    }

    /// `PUT /api/products/{id}`
    ///
    /// # Errors
    /// `Validation` when the caller does not own the product.
    pub async fn update(
        &self,
        product_id: i64,
        request: &UpdateProductRequest,
    ) -> Result<ProductActionResponse> {
        self.transport
            .execute(RequestSpec::put(format!("/api/products/{}", product_id)).json(request)?)
            .await
    }

    /// `DELETE /api/products/{id}`
    ///
    /// # Errors
    /// `NotFound` for unknown ids.
    pub async fn delete(&self, product_id: i64) -> Result<MessageResponse> {
        self.transport
            .execute(RequestSpec::delete(format!("/api/products/{}", product_id)))
            .await
    }

    /// `POST /api/products/{id}/images` (multipart)
    ///
    /// # Errors
    /// `Validation` for unsupported file types.
    pub async fn add_images(
        &self,
        product_id: i64,
        files: Vec<ImageUpload>,
    ) -> Result<ProductImageResponse> {
        let parts = files
            .into_iter()
            .map(|file| FilePart {
                name: "images".to_string(),
                file_name: file.file_name,
                content_type: file.content_type,
                bytes: file.bytes,
            })
            .collect();
        self.transport
            .execute(
                RequestSpec::post(format!("/api/products/{}/images", product_id))
                    .multipart(parts),
            )
            .await
    }

    /// `DELETE /api/products/images/{image_id}`
    ///
    /// # Errors
    /// `NotFound` for unknown image ids.
    pub async fn delete_image(&self, image_id: i64) -> Result<MessageResponse> {
        self.transport
            .execute(RequestSpec::delete(format!("/api/products/images/{}", image_id)))
            .await
    }

    /// `GET /api/products/seller/{seller_id}`
    ///
    /// # Errors
    /// `Network` when unreachable.
    pub async fn get_by_seller(&self, seller_id: i64) -> Result<Vec<Product>> {
        self.transport
            .execute(RequestSpec::get(format!("/api/products/seller/{}", seller_id)))
            .await
    }

    /// `GET /api/products/category/{category_id}`
    ///
    /// # Errors
    /// `Network` when unreachable.
    pub async fn get_by_category(&self, category_id: i64) -> Result<Vec<Product>> {
        self.transport
            .execute(RequestSpec::get(format!("/api/products/category/{}", category_id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use vitrin_common::MemoryCredentialStore;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::ClientConfig;

    fn client_for(server: &MockServer) -> ProductsClient {
        let config = ClientConfig::default().with_base_url(&server.uri()).unwrap();
        let store = Arc::new(MemoryCredentialStore::with_credentials(
            vitrin_common::Credentials {
                access_token: Some("T1".into()),
                refresh_token: None,
                user_id: None,
            },
        ));
        ProductsClient::new(Arc::new(AuthTransport::new(&config, store).unwrap()))
    }

    #[tokio::test]
    async fn test_search_sends_query_parameter() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/products/search"))
            .and(query_param("q", "shoe"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "id": 1, "seller_id": 2, "category_id": 3, "name": "Running shoe",
                "price": 59.9, "stock": 4, "rating": 4.5
            }])))
            .mount(&server)
            .await;

        let products = client_for(&server).search("shoe").await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Running shoe");
    }

    #[tokio::test]
    async fn test_image_upload_is_multipart() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/products/5/images"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "message": "2 images uploaded",
                "images": [{"id": 10, "url": "/static/10.jpg"},
                           {"id": 11, "url": "/static/11.jpg"}]
            })))
            .mount(&server)
            .await;

        let files = vec![
            ImageUpload {
                file_name: "front.jpg".into(),
                content_type: "image/jpeg".into(),
                bytes: vec![0xFF, 0xD8],
            },
            ImageUpload {
                file_name: "back.jpg".into(),
                content_type: "image/jpeg".into(),
                bytes: vec![0xFF, 0xD8],
            },
        ];

        let response = client_for(&server).add_images(5, files).await.unwrap();
        assert_eq!(response.images.unwrap().len(), 2);

        let requests = server.received_requests().await.unwrap();
        let content_type = requests[0].headers.get("content-type").unwrap();
        assert!(content_type.to_str().unwrap().starts_with("multipart/form-data"));
    }
}
