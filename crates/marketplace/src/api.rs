//! REST API client for the marketplace HTTP endpoints.
//!
//! Wraps login and product search using [`reqwest`].

use std::time::Duration;

use async_trait::async_trait;

use crate::config::MarketplaceConfig;
use crate::messages::{LoginRequest, LoginResponse, SearchRequest, SearchResponse};

/// Errors from the marketplace REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum MarketplaceError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The marketplace returned a non-2xx status code.
    #[error("Marketplace API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Marketplace operations the search cascade depends on.
#[async_trait]
pub trait MarketplaceClient: Send + Sync {
    /// Log in with the configured static credentials.
    async fn login(&self) -> Result<LoginResponse, MarketplaceError>;

    /// Run one product search with a bearer token.
    async fn search(
        &self,
        token: &str,
        request: &SearchRequest,
    ) -> Result<SearchResponse, MarketplaceError>;
}

/// HTTP client for the marketplace API.
pub struct MarketplaceApi {
    client: reqwest::Client,
    config: MarketplaceConfig,
}

impl MarketplaceApi {
    /// Create a new API client with its own connection pool.
    pub fn new(config: MarketplaceConfig) -> Result<Self, MarketplaceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &MarketplaceConfig {
        &self.config
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`MarketplaceError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, MarketplaceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(MarketplaceError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, MarketplaceError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl MarketplaceClient for MarketplaceApi {
    /// Sends `POST /v1/auth/login` with the configured email and password.
    async fn login(&self) -> Result<LoginResponse, MarketplaceError> {
        let body = LoginRequest {
            email: &self.config.email,
            password: &self.config.password,
        };

        let response = self
            .client
            .post(format!("{}/v1/auth/login", self.config.base_url))
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Sends `POST /v1/products/search` with the bearer token.
    async fn search(
        &self,
        token: &str,
        request: &SearchRequest,
    ) -> Result<SearchResponse, MarketplaceError> {
        let response = self
            .client
            .post(format!("{}/v1/products/search", self.config.base_url))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }
}
