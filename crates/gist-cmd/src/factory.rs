//! Factory for shared command dependencies.
//!
//! Provides the I/O streams and API client to every operation. In test mode
//! the HTTP client, base URL, credentials, and standard input can all be
//! injected so operations run in isolation.

use std::sync::Mutex;

use gist_api::client::Client;
use gist_api::credentials::Credentials;
use gist_api::http::{self, HttpClientOptions};
use gist_core::cmdutil::StdinReadError;
use gist_core::iostreams::{IOStreams, TestOutput};

/// Shared factory providing dependencies to all operations.
pub struct Factory {
    /// Application version.
    pub app_version: String,
    /// I/O streams.
    pub io: IOStreams,

    // Test overrides
    http_override: Option<reqwest::Client>,
    base_url_override: Option<String>,
    credentials_override: Option<Credentials>,
    stdin_override: Mutex<Option<String>>,
}

impl std::fmt::Debug for Factory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Factory")
            .field("app_version", &self.app_version)
            .finish_non_exhaustive()
    }
}

impl Factory {
    /// Create a production factory with the given version.
    pub fn new(app_version: String) -> Self {
        Self {
            app_version,
            io: IOStreams::system(),
            http_override: None,
            base_url_override: None,
            credentials_override: None,
            stdin_override: Mutex::new(None),
        }
    }

    /// Create a test factory with captured I/O.
    ///
    /// Returns the factory and a [`TestOutput`] for reading captured
    /// stdout/stderr.
    pub fn test() -> (Self, TestOutput) {
        let (io, output) = IOStreams::test_with_output();
        let factory = Self {
            app_version: "test".to_string(),
            io,
            http_override: None,
            base_url_override: None,
            credentials_override: None,
            stdin_override: Mutex::new(None),
        };
        (factory, output)
    }

    /// Set a custom reqwest HTTP client (e.g., backed by wiremock).
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_override = Some(client);
        self
    }

    /// Set a base URL override (wiremock server URI with trailing slash).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url_override = Some(url.into());
        self
    }

    /// Set test credentials, bypassing the environment.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials_override = Some(credentials);
        self
    }

    /// Set the content returned by [`read_stdin`](Self::read_stdin).
    pub fn set_stdin(&self, content: impl Into<String>) {
        *self
            .stdin_override
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(content.into());
    }

    /// Build an API client.
    ///
    /// Credentials come from the environment unless a test override is set;
    /// either variable missing fails here, before any network access.
    ///
    /// # Errors
    ///
    /// Returns `CredentialsError` when credential material is absent, or an
    /// error if the HTTP client cannot be built.
    pub fn api_client(&self) -> anyhow::Result<Client> {
        let credentials = match self.credentials_override {
            Some(ref creds) => creds.clone(),
            None => Credentials::from_env()?,
        };

        let http = if let Some(ref client) = self.http_override {
            client.clone()
        } else {
            http::build_client(&HttpClientOptions {
                app_version: self.app_version.clone(),
            })?
        };

        let mut client = Client::new(http, credentials);
        if let Some(ref url) = self.base_url_override {
            client = client.with_base_url(url.clone());
        }
        Ok(client)
    }

    /// Read standard input to end.
    ///
    /// # Errors
    ///
    /// Returns [`StdinReadError`] when stdin cannot be read.
    pub fn read_stdin(&self) -> anyhow::Result<String> {
        if let Some(content) = self
            .stdin_override
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .take()
        {
            return Ok(content);
        }

        let mut content = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut content)
            .map_err(StdinReadError)?;
        Ok(content)
    }
}
