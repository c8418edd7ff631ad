//! Thin request/response wrapper around the remote snippet service.
//!
//! One request per call, no retry, no pagination: the service is assumed to
//! return a complete result set or a terminal error. Error classification
//! happens here so callers only see [`ApiError`].

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::credentials::Credentials;
use crate::errors::ApiError;

/// Base URL of the hosted service's REST API.
const DEFAULT_BASE_URL: &str = "https://api.github.com/";

/// Remote service client wrapping reqwest with auth and error handling.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    credentials: Credentials,
    /// Optional base URL override for testing (e.g., `"http://127.0.0.1:PORT/"`).
    base_url_override: Option<String>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("credentials", &self.credentials)
            .field("base_url_override", &self.base_url_override)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a new client presenting the given credentials.
    pub fn new(http: reqwest::Client, credentials: Credentials) -> Self {
        Self {
            http,
            credentials,
            base_url_override: None,
        }
    }

    /// Set a base URL override for testing.
    ///
    /// The URL should include the trailing slash, e.g.,
    /// `"http://127.0.0.1:8080/"`.
    #[must_use]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url_override = Some(url);
        self
    }

    /// Execute a request and deserialize the JSON response body.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success status.
    pub async fn rest<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<T, ApiError> {
        let resp = self.send(method, path, body).await?;
        let resp = Self::check_response(resp).await?;
        Ok(resp.json().await?)
    }

    /// Execute a request, discarding any response body.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success status.
    pub async fn rest_unit(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let resp = self.send(method, path, None).await?;
        Self::check_response(resp).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let url = self.resolve_url(path);
        let mut req = self.http.request(method, &url).basic_auth(
            self.credentials.username(),
            Some(self.credentials.token()),
        );
        if let Some(body) = body {
            req = req.json(body);
        }
        req.send().await
    }

    /// Check a response status and convert failures into [`ApiError::Http`].
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let text = resp.text().await.unwrap_or_default();
        Err(ApiError::from_response(status.as_u16(), &text))
    }

    fn resolve_url(&self, path: &str) -> String {
        let base = self
            .base_url_override
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL);
        format!("{base}{}", path.trim_start_matches('/'))
    }
}
