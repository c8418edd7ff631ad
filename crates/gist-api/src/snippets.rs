//! The five snippet operations against the remote service.
//!
//! Each operation takes already-validated arguments and maps one HTTP call
//! to a typed result. Callers own sequencing; nothing here retries or
//! caches.

use std::collections::BTreeMap;

use reqwest::Method;
use tracing::debug;

use crate::client::Client;
use crate::errors::ApiError;
use crate::models::{CreateSnippet, NewFile, SnippetDetail, SnippetOverview, UpdateSnippet};

/// List the authenticated user's snippets, in service order.
///
/// # Errors
///
/// Returns an error on network failure or a non-success status.
pub async fn list_mine(client: &Client) -> Result<Vec<SnippetOverview>, ApiError> {
    client.rest(Method::GET, "gists", None).await
}

/// List the snippets the authenticated user has starred.
///
/// # Errors
///
/// Returns an error on network failure or a non-success status.
pub async fn list_starred(client: &Client) -> Result<Vec<SnippetOverview>, ApiError> {
    client.rest(Method::GET, "gists/starred", None).await
}

/// Fetch one snippet with file contents.
///
/// # Errors
///
/// Returns `ApiError::Http { status: 404, .. }` when the service reports no
/// such id, `401` when credentials are rejected.
pub async fn get(client: &Client, id: &str) -> Result<SnippetDetail, ApiError> {
    debug!(id, "fetching snippet");
    client
        .rest(Method::GET, &format!("gists/{id}"), None)
        .await
}

/// Create a single-file public snippet.
///
/// # Errors
///
/// Returns an error on network failure or a non-success status.
pub async fn create(
    client: &Client,
    file_name: &str,
    description: &str,
    content: &str,
) -> Result<SnippetDetail, ApiError> {
    let mut files = BTreeMap::new();
    files.insert(
        file_name.to_string(),
        NewFile {
            content: content.to_string(),
        },
    );
    let payload = CreateSnippet {
        description: description.to_string(),
        public: true,
        files,
    };
    let body = serde_json::to_value(&payload)?;
    client.rest(Method::POST, "gists", Some(&body)).await
}

/// Replace one file's content in an existing snippet.
///
/// `description: None` leaves the existing description untouched: the field
/// is omitted from the payload rather than sent as an empty string.
///
/// # Errors
///
/// Returns an error on network failure or a non-success status.
pub async fn update(
    client: &Client,
    id: &str,
    file_name: &str,
    description: Option<&str>,
    content: &str,
) -> Result<SnippetDetail, ApiError> {
    let mut files = BTreeMap::new();
    files.insert(
        file_name.to_string(),
        NewFile {
            content: content.to_string(),
        },
    );
    let payload = UpdateSnippet {
        description: description.map(str::to_string),
        files,
    };
    let body = serde_json::to_value(&payload)?;
    client
        .rest(Method::PATCH, &format!("gists/{id}"), Some(&body))
        .await
}

/// Delete a snippet.
///
/// # Errors
///
/// Returns an error on network failure or a non-success status.
pub async fn delete(client: &Client, id: &str) -> Result<(), ApiError> {
    debug!(id, "deleting snippet");
    client.rest_unit(Method::DELETE, &format!("gists/{id}")).await
}
