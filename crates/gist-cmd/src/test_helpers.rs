//! Shared test utilities for operation testing.
//!
//! Provides a harness wiring a test factory to a wiremock server, plus
//! fixture builders for list and detail responses.

use gist_api::credentials::Credentials;
use gist_core::iostreams::TestOutput;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::factory::Factory;

/// A fully-configured test harness with factory, output capture, and mock server.
#[derive(Debug)]
pub struct TestHarness {
    /// The factory configured for testing.
    pub factory: Factory,
    /// Captured stdout/stderr output.
    pub output: TestOutput,
    /// Wiremock mock server for API requests.
    pub server: MockServer,
}

impl TestHarness {
    /// Create a new test harness routing all API requests to a mock server.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let (factory, output) = Factory::test();
        let factory = factory
            .with_http_client(reqwest::Client::new())
            .with_base_url(format!("{}/", server.uri()))
            .with_credentials(Credentials::new("testuser", "testtoken"));

        Self {
            factory,
            output,
            server,
        }
    }

    /// Get captured stdout as a string.
    pub fn stdout(&self) -> String {
        self.output.stdout()
    }

    /// Get captured stderr as a string.
    pub fn stderr(&self) -> String {
        self.output.stderr()
    }
}

// --- Wiremock helpers ---

/// Mount a GET response mock for a specific path.
pub async fn mock_rest_get(server: &MockServer, url_path: &str, response_body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
        .mount(server)
        .await;
}

/// Mount a GET response mock that returns a specific error status.
pub async fn mock_rest_get_status(
    server: &MockServer,
    url_path: &str,
    status: u16,
    response_body: serde_json::Value,
) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status).set_body_json(response_body))
        .mount(server)
        .await;
}

/// Mount a POST response mock for a specific path.
pub async fn mock_rest_post(
    server: &MockServer,
    url_path: &str,
    status: u16,
    response_body: serde_json::Value,
) {
    Mock::given(method("POST"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status).set_body_json(response_body))
        .mount(server)
        .await;
}

/// Mount a PATCH response mock for a specific path.
pub async fn mock_rest_patch(
    server: &MockServer,
    url_path: &str,
    status: u16,
    response_body: serde_json::Value,
) {
    Mock::given(method("PATCH"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status).set_body_json(response_body))
        .mount(server)
        .await;
}

/// Mount a DELETE response mock for a specific path.
pub async fn mock_rest_delete(server: &MockServer, url_path: &str, status: u16) {
    Mock::given(method("DELETE"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

// --- Fixtures ---

/// Build an overview record as the list endpoints return it.
pub fn overview_fixture(
    id: &str,
    owner: &str,
    file_names: &[&str],
    description: &str,
) -> serde_json::Value {
    let files: serde_json::Map<String, serde_json::Value> = file_names
        .iter()
        .map(|name| {
            (
                (*name).to_string(),
                serde_json::json!({"language": null, "type": "text/plain", "size": 10}),
            )
        })
        .collect();

    serde_json::json!({
        "id": id,
        "description": description,
        "public": true,
        "files": files,
        "comments": 0,
        "html_url": format!("https://gist.github.com/{id}"),
        "created_at": "2024-01-14T09:00:00Z",
        "updated_at": "2024-01-15T10:00:00Z",
        "owner": {"login": owner}
    })
}

/// Build a detail record with the given `(name, content)` files.
pub fn detail_fixture(id: &str, description: &str, files: &[(&str, &str)]) -> serde_json::Value {
    let files: serde_json::Map<String, serde_json::Value> = files
        .iter()
        .map(|(name, content)| {
            (
                (*name).to_string(),
                serde_json::json!({
                    "content": content,
                    "language": "Text",
                    "type": "text/plain",
                    "size": content.len(),
                    "truncated": false
                }),
            )
        })
        .collect();

    serde_json::json!({
        "id": id,
        "description": description,
        "public": true,
        "files": files,
        "comments": 1,
        "html_url": format!("https://gist.github.com/{id}"),
        "created_at": "2024-01-14T09:00:00Z",
        "updated_at": "2024-01-15T10:00:00Z",
        "forks": [],
        "owner": {"login": "testuser"}
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_should_create_test_harness() {
        let h = TestHarness::new().await;
        assert!(h.stdout().is_empty());
        assert!(h.stderr().is_empty());
    }

    #[tokio::test]
    async fn test_should_capture_output_through_factory() {
        let h = TestHarness::new().await;
        h.factory.io.println_out("hello from test");
        assert_eq!(h.stdout(), "hello from test\n");
    }

    #[test]
    fn test_should_build_overview_fixture() {
        let fixture = overview_fixture("abc", "octocat", &["a.txt", "b.txt"], "demo");
        assert_eq!(fixture["id"], "abc");
        assert_eq!(fixture["files"].as_object().unwrap().len(), 2);
    }
}
