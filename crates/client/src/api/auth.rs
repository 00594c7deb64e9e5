//! Authentication endpoints
//!
//! Login and registration are the two places the credential store is
//! seeded: a successful response carrying both tokens is persisted before
//! it is returned to the caller. Logout is purely local; the server keeps
//! no session state to invalidate.

use std::sync::Arc;

use tracing::{debug, info};
use vitrin_common::CredentialUpdate;
use vitrin_domain::{AuthResponse, LoginRequest, RegisterRequest, Result, VitrinError};

use crate::transport::{AuthTransport, RequestSpec};

/// Client for `/api/auth`
pub struct AuthClient {
    transport: Arc<AuthTransport>,
}

impl AuthClient {
    /// Create the client over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { transport }
    }

    /// `POST /api/auth/register`
    ///
    /// # Errors
    /// `Validation` for rejected input (duplicate email), `Network` when
    /// unreachable.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        let response: AuthResponse = self
            .transport
            .execute(RequestSpec::post("/api/auth/register").json(request)?)
            .await?;
        self.persist(&response).await?;
        info!("registration succeeded");
        Ok(response)
    }

    /// `POST /api/auth/login`
    ///
    /// # Errors
    /// `Auth` for bad credentials, `Network` when unreachable.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        let response: AuthResponse =
            self.transport.execute(RequestSpec::post("/api/auth/login").json(request)?).await?;
        self.persist(&response).await?;
        info!("login succeeded");
        Ok(response)
    }

    /// Explicitly refresh the access token via `POST /api/auth/refresh`
    ///
    /// # Errors
    /// `Auth` when no usable refresh token is stored or the server rejects
    /// it; credentials are cleared on rejection.
    pub async fn refresh(&self) -> Result<String> {
        self.transport.refresh_now().await
    }

    /// Drop all stored credentials
    ///
    /// # Errors
    /// `Internal` only for storage faults.
    pub async fn logout(&self) -> Result<()> {
        self.transport
            .credentials()
            .clear()
            .await
            .map_err(|e| VitrinError::Internal(format!("credential store failure: {}", e)))?;
        info!("logged out, credentials cleared");
        Ok(())
    }

    async fn persist(&self, response: &AuthResponse) -> Result<()> {
        let (Some(access), Some(refresh)) = (&response.access_token, &response.refresh_token)
        else {
            debug!("auth response carried no token pair, nothing persisted");
            return Ok(());
        };

        let update = CredentialUpdate {
            access_token: Some(access.clone()),
            refresh_token: Some(refresh.clone()),
            user_id: response.user.as_ref().map(|user| user.id.to_string()),
        };
        self.transport
            .credentials()
            .set(update)
            .await
            .map_err(|e| VitrinError::Internal(format!("credential store failure: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use vitrin_common::{CredentialStore, MemoryCredentialStore};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::ClientConfig;

    fn client_for(server: &MockServer, store: Arc<MemoryCredentialStore>) -> AuthClient {
        let config = ClientConfig::default().with_base_url(&server.uri()).unwrap();
        AuthClient::new(Arc::new(AuthTransport::new(&config, store).unwrap()))
    }

    #[tokio::test]
    async fn test_login_persists_token_set() {
        let server = MockServer::start().await;

        let request = LoginRequest { email: "ada@example.com".into(), password: "pw".into() };
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(&request))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "T1",
                "refresh_token": "R1",
                "user": {"id": 42, "fullname": "Ada", "email": "ada@example.com",
                         "role": "customer", "created_at": "2024-01-01T10:00:00"}
            })))
            .mount(&server)
            .await;

        let store = Arc::new(MemoryCredentialStore::new());
        let client = client_for(&server, store.clone());

        let response = client.login(&request).await.unwrap();
        assert_eq!(response.access_token.as_deref(), Some("T1"));

        let saved = store.get().await.unwrap();
        assert_eq!(saved.access_token.as_deref(), Some("T1"));
        assert_eq!(saved.refresh_token.as_deref(), Some("R1"));
        assert_eq!(saved.user_id.as_deref(), Some("42"));
    }

    #[tokio::test]
    async fn test_failed_login_leaves_store_empty() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(
                serde_json::json!({"error": "Invalid credentials"}),
            ))
            .mount(&server)
            .await;

        let store = Arc::new(MemoryCredentialStore::new());
        let client = client_for(&server, store.clone());

        let request = LoginRequest { email: "ada@example.com".into(), password: "bad".into() };
        let result = client.login(&request).await;
        assert!(matches!(result.unwrap_err(), VitrinError::Auth(_)));
        assert!(store.get().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_credentials() {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryCredentialStore::with_credentials(
            vitrin_common::Credentials {
                access_token: Some("T1".into()),
                refresh_token: Some("R1".into()),
                user_id: Some("42".into()),
            },
        ));
        let client = client_for(&server, store.clone());

        client.logout().await.unwrap();

        assert!(store.get().await.unwrap().is_empty());
        // Purely local; the server saw nothing.
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
