//! Favorites endpoints
//!
//! Collection paths carry a trailing slash; the server treats
//! `/api/favorites` and `/api/favorites/` as different routes. Removal is
//! keyed by product id, not favorite id, matching how a product screen
//! toggles the state without knowing the favorite row.

use std::sync::Arc;

use vitrin_domain::{AddFavoriteRequest, Favorite, FavoriteResponse, Result};

use crate::transport::{AuthTransport, RequestSpec};

/// Client for `/api/favorites`
pub struct FavoritesClient {
    transport: Arc<AuthTransport>,
}

impl FavoritesClient {
    /// Create the client over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { transport }
    }

    /// `GET /api/favorites/`
    ///
    /// # Errors
    /// `Auth` when no valid session exists.
    pub async fn get_all(&self) -> Result<Vec<Favorite>> {
        self.transport.execute(RequestSpec::get("/api/favorites/")).await
    }

    /// `POST /api/favorites/`
    ///
    /// # Errors
    /// `Validation` when the product is already favorited.
    pub async fn add(&self, request: &AddFavoriteRequest) -> Result<FavoriteResponse> {
        self.transport.execute(RequestSpec::post("/api/favorites/").json(request)?).await
    }

    /// `DELETE /api/favorites/{product_id}`
    ///
    /// # Errors
    /// `NotFound` when the product is not favorited.
    pub async fn remove(&self, product_id: i64) -> Result<FavoriteResponse> {
        self.transport
            .execute(RequestSpec::delete(format!("/api/favorites/{}", product_id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use vitrin_common::MemoryCredentialStore;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::ClientConfig;

    fn client_for(server: &MockServer) -> FavoritesClient {
        let config = ClientConfig::default().with_base_url(&server.uri()).unwrap();
        let store = Arc::new(MemoryCredentialStore::with_credentials(
            vitrin_common::Credentials {
                access_token: Some("T1".into()),
                refresh_token: None,
                user_id: None,
            },
        ));
        FavoritesClient::new(Arc::new(AuthTransport::new(&config, store).unwrap()))
    }

    #[tokio::test]
    async fn test_collection_path_keeps_trailing_slash() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/favorites/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let favorites = client_for(&server).get_all().await.unwrap();
        assert!(favorites.is_empty());
    }

    #[tokio::test]
    async fn test_listing_decodes_server_dump_shape() {
        let server = MockServer::start().await;

        // The embedded product has no seller_id and the favorite no
        // user_id, exactly as the server dumps them.
        Mock::given(method("GET"))
            .and(path("/api/favorites/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "id": 3,
                "created_at": "2024-02-10T14:00:00",
                "product": {
                    "id": 7,
                    "name": "Sneaker",
                    "description": null,
                    "price": 49.9,
                    "stock": 12,
                    "category_id": 2,
                    "category_name": "Shoes",
                    "images": [{"id": 1, "url": "/uploads/1.jpg"}]
                }
            }])))
            .mount(&server)
            .await;

        let favorites = client_for(&server).get_all().await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].product_id(), 7);
    }
}
