//! Auth-aware HTTP transport
//!
//! Every resource client funnels through [`AuthTransport::execute`], which
//! owns the cross-cutting request policy:
//!
//! - attaches `Bearer <access_token>` to every path outside the public
//!   allow-list
//! - maps response status codes onto [`VitrinError`] kinds
//! - on a 401, refreshes the access token and retries the original request
//!   exactly once, with the refresh call single-flighted across concurrent
//!   requests
//!
//! Requests are described by a [`RequestSpec`] rather than built directly,
//! because a retry must rebuild the request byte-for-byte and reqwest
//! multipart bodies cannot be cloned.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};
use vitrin_common::{CredentialStore, CredentialStoreError, CredentialUpdate};
use vitrin_domain::{AuthResponse, Result, VitrinError};

use crate::config::ClientConfig;

/// Paths that never carry a stored Authorization header, matched by exact
/// path, never by prefix or substring.
const PUBLIC_PATHS: [&str; 3] = ["/api/auth/login", "/api/auth/register", "/api/auth/refresh"];

const REFRESH_PATH: &str = "/api/auth/refresh";

/// One file part of a multipart upload, held as owned bytes so the request
/// can be rebuilt on retry.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Form field name
    pub name: String,
    /// File name reported to the server
    pub file_name: String,
    /// MIME type of the bytes
    pub content_type: String,
    /// File content
    pub bytes: Vec<u8>,
}

/// Request payload
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// No body
    None,
    /// JSON body, kept as a value so serialization happens once
    Json(serde_json::Value),
    /// Multipart form, one part per file
    Multipart(Vec<FilePart>),
}

/// A rebuildable description of one HTTP request
#[derive(Debug, Clone)]
pub struct RequestSpec {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: RequestBody,
}

impl RequestSpec {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: RequestBody::None }
    }

    /// Describe a GET request
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Describe a POST request
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Describe a PUT request
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Describe a DELETE request
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query pair
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body
    ///
    /// # Errors
    /// Returns `VitrinError::Internal` if the body fails to serialize.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| VitrinError::Internal(format!("Failed to serialize body: {}", e)))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    /// Attach a multipart body
    #[must_use]
    pub fn multipart(mut self, parts: Vec<FilePart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    /// Request path, always starting with `/api`
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// HTTP transport with transparent token refresh
///
/// Shared by every resource client; holds the one `reqwest::Client` and the
/// injected credential store.
pub struct AuthTransport {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialStore>,
    // Single-flight gate for the refresh critical section.
    refresh_gate: tokio::sync::Mutex<()>,
}

impl AuthTransport {
    /// Build a transport from configuration and a credential store
    ///
    /// # Errors
    /// Returns `VitrinError::Config` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &ClientConfig, credentials: Arc<dyn CredentialStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| VitrinError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
            refresh_gate: tokio::sync::Mutex::new(()),
        })
    }

    /// The credential store this transport reads tokens from
    #[must_use]
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// Execute a request and decode its JSON response
    ///
    /// Public paths are dispatched without a bearer token and never enter
    /// the refresh flow. A 401 anywhere else triggers one refresh and one
    /// retry; the retry's outcome is final.
    ///
    /// # Errors
    /// See [`VitrinError`]; network failures are never retried.
    pub async fn execute<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T> {
        let public = is_public_path(spec.path());
        let bearer = if public { None } else { self.stored_access_token().await? };

        let response = self.dispatch(&spec, bearer.as_deref()).await?;

        if response.status() != StatusCode::UNAUTHORIZED || public {
            return Self::decode(response, spec.path()).await;
        }

        let original = Self::failure(response).await;
        debug!(path = %spec.path(), "401 on protected path, entering refresh flow");

        match self.refreshed_access_token(bearer.as_deref()).await? {
            Some(token) => {
                let retry = self.dispatch(&spec, Some(&token)).await?;
                Self::decode(retry, spec.path()).await
            }
            None => Err(original),
        }
    }

    /// Refresh the access token immediately, outside any 401 handling
    ///
    /// Unlike the transparent flow this always spends the stored refresh
    /// token, even when an access token is still present.
    ///
    /// # Errors
    /// Returns `VitrinError::Auth` when no usable refresh token is stored
    /// or the server rejected the refresh; credentials are cleared in the
    /// rejection case.
    pub async fn refresh_now(&self) -> Result<String> {
        let used = self.stored_access_token().await?;
        match self.refreshed_access_token(used.as_deref()).await? {
            Some(token) => Ok(token),
            None => Err(VitrinError::Auth("token refresh failed".to_string())),
        }
    }

    async fn dispatch(
        &self,
        spec: &RequestSpec,
        bearer: Option<&str>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, spec.path);

        let mut request = self
            .http
            .request(spec.method.clone(), &url)
            .header(header::ACCEPT, "application/json");

        if !spec.query.is_empty() {
            request = request.query(&spec.query);
        }
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        request = match &spec.body {
            RequestBody::None => request,
            RequestBody::Json(value) => request.json(value),
            RequestBody::Multipart(parts) => {
                let mut form = Form::new();
                for part in parts {
                    let piece = Part::bytes(part.bytes.clone())
                        .file_name(part.file_name.clone())
                        .mime_str(&part.content_type)
                        .map_err(|e| {
                            VitrinError::Internal(format!(
                                "Invalid content type {}: {}",
                                part.content_type, e
                            ))
                        })?;
                    form = form.part(part.name.clone(), piece);
                }
                request.multipart(form)
            }
        };

        request.send().await.map_err(map_transport_error)
    }

    /// Refresh the access token, single-flighted across concurrent callers
    ///
    /// `used` is the token the failing request carried. Returns the token
    /// to retry with, or `None` when the caller must surface its original
    /// 401 (no usable refresh token, or the refresh was rejected and the
    /// credentials cleared).
    async fn refreshed_access_token(&self, used: Option<&str>) -> Result<Option<String>> {
        let _gate = self.refresh_gate.lock().await;

        let current = self.credentials.get().await.map_err(store_error)?;

        // Another caller may have refreshed while we waited on the gate.
        if let Some(token) = current.access_token.as_deref() {
            if !token.trim().is_empty() && used != Some(token) {
                debug!("reusing access token refreshed by a concurrent request");
                return Ok(Some(token.to_string()));
            }
        }

        let Some(refresh_token) = current.usable_refresh_token() else {
            debug!("no usable refresh token stored, surfacing the original 401");
            return Ok(None);
        };

        let response =
            self.dispatch(&RequestSpec::post(REFRESH_PATH), Some(refresh_token)).await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "token refresh rejected, clearing credentials");
            self.credentials.clear().await.map_err(store_error)?;
            return Ok(None);
        }

        let text = response.text().await.map_err(map_transport_error)?;
        let issued = serde_json::from_str::<AuthResponse>(&text)
            .ok()
            .and_then(|body| {
                let token = body.access_token.filter(|t| !t.trim().is_empty())?;
                Some((token, body.refresh_token))
            });

        let Some((token, rotated_refresh)) = issued else {
            warn!("refresh response carried no access token, clearing credentials");
            self.credentials.clear().await.map_err(store_error)?;
            return Ok(None);
        };

        let mut update = CredentialUpdate::access_token(&token);
        // The server may rotate the refresh token; keep the stored one
        // otherwise.
        update.refresh_token = rotated_refresh.filter(|t| !t.trim().is_empty());
        self.credentials.set(update).await.map_err(store_error)?;

        info!("access token refreshed");
        Ok(Some(token))
    }

    async fn stored_access_token(&self) -> Result<Option<String>> {
        let credentials = self.credentials.get().await.map_err(store_error)?;
        Ok(credentials.access_token.filter(|t| !t.trim().is_empty()))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response, path: &str) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::failure(response).await);
        }

        // 204/205 have no body by RFC; the envelopes are all-optional, so
        // an empty object stands in for the absent payload.
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(serde_json::Value::Null)
                .or_else(|_| serde_json::from_value(serde_json::json!({})))
                .map_err(|e| {
                    VitrinError::Decode(format!("{} returned no content: {}", path, e))
                });
        }

        let text = response.text().await.map_err(map_transport_error)?;

        // The status code is authoritative; a stray error field on a 2xx is
        // logged and otherwise ignored.
        if let Some(error) = server_error_text(&text) {
            warn!(path = %path, error = %error, "success response carried an error field");
        }

        serde_json::from_str(&text).map_err(|e| {
            VitrinError::Decode(format!("Failed to parse response from {}: {}", path, e))
        })
    }

    async fn failure(response: reqwest::Response) -> VitrinError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = server_error_text(&body).unwrap_or_else(|| {
            if body.is_empty() {
                format!("server returned status {}", status)
            } else {
                body
            }
        });

        match status.as_u16() {
            401 => VitrinError::Auth(detail),
            404 => VitrinError::NotFound(detail),
            400..=499 => VitrinError::Validation(detail),
            _ => VitrinError::Server(detail),
        }
    }
}

fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Extract the server-provided `error` text from a JSON body
fn server_error_text(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .map(str::to_string)
}

fn map_transport_error(err: reqwest::Error) -> VitrinError {
    if err.is_timeout() {
        VitrinError::Network("request timed out".to_string())
    } else if err.is_connect() {
        VitrinError::Network(format!("connection failed: {}", err))
    } else {
        VitrinError::Network(err.to_string())
    }
}

fn store_error(err: CredentialStoreError) -> VitrinError {
    VitrinError::Internal(format!("credential store failure: {}", err))
}
