//! HTTP client construction.
//!
//! Provides the default headers every request carries: a User-Agent naming
//! the CLI and version, and the service's JSON media type.

use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::debug;

/// Options for constructing an HTTP client.
#[derive(Debug)]
pub struct HttpClientOptions {
    /// Application version for User-Agent.
    pub app_version: String,
}

/// Build a reqwest client with default configuration.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed.
pub fn build_client(opts: &HttpClientOptions) -> anyhow::Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_str(&format!("gist CLI {}", opts.app_version))?,
    );
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );

    debug!(version = %opts.app_version, "building HTTP client");

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()?;

    Ok(client)
}
