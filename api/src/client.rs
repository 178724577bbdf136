//! Backend API client implementation

use crate::error::ApiError;
use crate::vault::{ACCESS_TOKEN_KEY, TokenVault};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Auth endpoints that must not carry a bearer token.
const UNAUTHENTICATED_PATHS: [&str; 5] = [
    "/users/auth/sign-up",
    "/users/auth/sign-in",
    "/users/auth/verify-signup-otp",
    "/users/auth/verify-signin-otp",
    "/users/auth/refresh-token",
];

/// Client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend origin, without the `/api/v1` suffix
    /// (e.g. `https://backend.example.com`).
    pub base_url: String,

    /// Per-request timeout. A hung request fails instead of leaving the
    /// session in a loading state indefinitely.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,
}

impl ApiConfig {
    /// Create a configuration for the given backend origin.
    #[must_use]
    pub const fn new(base_url: String) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingBaseUrl`] if `WELLSPRING_API_URL` is not set.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url =
            std::env::var("WELLSPRING_API_URL").map_err(|_| ApiError::MissingBaseUrl)?;
        Ok(Self::new(base_url))
    }
}

/// Booking backend API client
///
/// One configured HTTP client with a base URL and JSON content type. Every
/// request except the enumerated auth endpoints reads the access token from
/// the vault and attaches it as a bearer header.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    api_url: String,
    vault: Arc<dyn TokenVault>,
}

impl ApiClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Construction`] if the underlying HTTP client
    /// cannot be built.
    pub fn new(config: ApiConfig, vault: Arc<dyn TokenVault>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Construction(e.to_string()))?;

        Ok(Self {
            client,
            api_url: format!("{}/api/v1", config.base_url.trim_end_matches('/')),
            vault,
        })
    }

    /// Create a client configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingBaseUrl`] if `WELLSPRING_API_URL` is not
    /// set, or [`ApiError::Construction`] if the HTTP client cannot be built.
    pub fn from_env(vault: Arc<dyn TokenVault>) -> Result<Self, ApiError> {
        Self::new(ApiConfig::from_env()?, vault)
    }

    /// Whether a path is one of the enumerated unauthenticated auth endpoints.
    fn is_unauthenticated(path: &str) -> bool {
        UNAUTHENTICATED_PATHS.iter().any(|p| path.starts_with(p))
    }

    /// Perform a request and decode the JSON response.
    ///
    /// 2xx → decoded body; 401 → `Unauthorized`; any other status →
    /// `Api { status, body }`; transport failure → `Request`.
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut builder = self
            .client
            .request(method.clone(), format!("{}{path}", self.api_url))
            .header("content-type", "application/json");

        if !Self::is_unauthenticated(path) {
            if let Some(token) = self.vault.get(ACCESS_TOKEN_KEY).await? {
                builder = builder.bearer_auth(token);
            }
        }

        if let Some(body) = body {
            builder = builder.json(body);
        }

        tracing::debug!(%method, path, "Sending API request");

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {
                response
                    .json::<T>()
                    .await
                    .map_err(|e| ApiError::Decode(e.to_string()))
            },
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_default();
                tracing::warn!(status = status.as_u16(), path, "API request rejected");
                Err(ApiError::Api {
                    status: status.as_u16(),
                    body,
                })
            },
        }
    }

    pub(crate) async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.request::<(), T>(Method::GET, path, None).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PATCH, path, Some(body)).await
    }

    pub(crate) async fn patch_empty<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.request::<(), T>(Method::PATCH, path, None).await
    }

    pub(crate) async fn delete_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.request::<(), T>(Method::DELETE, path, None).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::MemoryTokenVault;

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new(
            ApiConfig::new("https://backend.example.com".to_string()),
            Arc::new(MemoryTokenVault::new()),
        );
        assert!(matches!(client, Ok(ref c) if c.api_url == "https://backend.example.com/api/v1"));
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let client = ApiClient::new(
            ApiConfig::new("https://backend.example.com/".to_string()),
            Arc::new(MemoryTokenVault::new()),
        );
        assert!(matches!(client, Ok(ref c) if c.api_url == "https://backend.example.com/api/v1"));
    }

    #[test]
    fn test_auth_endpoints_are_exempt() {
        assert!(ApiClient::is_unauthenticated("/users/auth/sign-in"));
        assert!(ApiClient::is_unauthenticated("/users/auth/verify-signup-otp"));
        assert!(ApiClient::is_unauthenticated("/users/auth/refresh-token"));
        assert!(!ApiClient::is_unauthenticated("/users/profile/me"));
        assert!(!ApiClient::is_unauthenticated("/payment/create-order"));
    }
}
