//! Update operation: replace one file's content from standard input.
//!
//! The target file comes from the `/FILE` suffix when given; otherwise a
//! single-file gist updates its only file, and a multi-file gist is an
//! ambiguous target rejected as a usage error. A missing description means
//! "leave the existing one unchanged" all the way down to the wire payload.

use anyhow::{Context, Result};

use gist_api::snippets;
use gist_core::cmdutil::UsageError;
use gist_core::{ios_eprintln, ios_println};

use crate::factory::Factory;
use crate::resolve::{self, Reference};

/// Run the update operation.
///
/// # Errors
///
/// Returns an error if the target is ambiguous, stdin cannot be read, or
/// the gist cannot be updated.
pub async fn run(factory: &Factory, target: &Reference, description: Option<&str>) -> Result<()> {
    let client = factory.api_client()?;

    let resolved = resolve::resolve(&client, target)
        .await
        .context("failed to resolve gist reference")?;

    let file_name = match resolved.file_name.clone() {
        Some(name) => name,
        None => single_file_name(&client, &resolved.id).await?,
    };

    let content = factory.read_stdin()?;

    let detail = snippets::update(&client, &resolved.id, &file_name, description, &content)
        .await
        .context("failed to update gist")?;

    let ios = &factory.io;
    let cs = ios.color_scheme();
    ios_eprintln!(ios, "{} Updated gist {}", cs.success_icon(), detail.id);
    ios_println!(ios, "{}", detail.html_url);

    Ok(())
}

/// Pick the file to update when no `/FILE` suffix was given.
///
/// Only an unambiguous single-file gist passes; the check runs before any
/// stdin read so an ambiguous target fails without consuming input.
async fn single_file_name(client: &gist_api::Client, id: &str) -> Result<String> {
    let detail = snippets::get(client, id)
        .await
        .context("failed to fetch gist")?;

    let mut names = detail.files.keys().cloned();
    match (names.next(), names.next()) {
        (Some(name), None) => Ok(name),
        (None, _) => Err(UsageError(format!("gist {id} has no files to update")).into()),
        _ => Err(UsageError(format!(
            "gist {id} has multiple files; pass {id}/FILE to pick the one to update"
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_helpers::{TestHarness, detail_fixture, mock_rest_get, mock_rest_patch};

    #[tokio::test]
    async fn test_should_update_file_named_by_suffix() {
        let h = TestHarness::new().await;
        mock_rest_patch(
            &h.server,
            "/gists/abc123",
            200,
            detail_fixture("abc123", "demo", &[("a.txt", "new body")]),
        )
        .await;

        h.factory.set_stdin("new body");
        run(&h.factory, &Reference::parse("abc123/a.txt"), None)
            .await
            .unwrap();

        assert!(h.stderr().contains("Updated gist abc123"));
        assert_eq!(h.stdout(), "https://gist.github.com/abc123\n");

        let requests = h.server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["files"]["a.txt"]["content"], "new body");
    }

    #[tokio::test]
    async fn test_should_update_only_file_without_suffix() {
        let h = TestHarness::new().await;
        mock_rest_get(
            &h.server,
            "/gists/abc123",
            detail_fixture("abc123", "demo", &[("solo.txt", "old")]),
        )
        .await;
        mock_rest_patch(
            &h.server,
            "/gists/abc123",
            200,
            detail_fixture("abc123", "demo", &[("solo.txt", "new")]),
        )
        .await;

        h.factory.set_stdin("new");
        run(&h.factory, &Reference::parse("abc123"), None)
            .await
            .unwrap();

        let requests = h.server.received_requests().await.unwrap();
        let patch = requests
            .iter()
            .find(|r| r.method.as_str() == "PATCH")
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&patch.body).unwrap();
        assert_eq!(body["files"]["solo.txt"]["content"], "new");
    }

    #[tokio::test]
    async fn test_should_reject_ambiguous_multi_file_target() {
        let h = TestHarness::new().await;
        mock_rest_get(
            &h.server,
            "/gists/abc123",
            detail_fixture("abc123", "demo", &[("a.txt", "x"), ("b.txt", "y")]),
        )
        .await;

        let err = run(&h.factory, &Reference::parse("abc123"), None)
            .await
            .unwrap_err();

        assert!(err.downcast_ref::<UsageError>().is_some());
        assert!(err.to_string().contains("multiple files"));
        // No PATCH was attempted.
        let requests = h.server.received_requests().await.unwrap();
        assert!(requests.iter().all(|r| r.method.as_str() != "PATCH"));
    }

    #[tokio::test]
    async fn test_should_omit_description_when_none_given() {
        let h = TestHarness::new().await;
        mock_rest_patch(
            &h.server,
            "/gists/abc123",
            200,
            detail_fixture("abc123", "kept", &[("a.txt", "new")]),
        )
        .await;

        h.factory.set_stdin("new");
        run(&h.factory, &Reference::parse("abc123/a.txt"), None)
            .await
            .unwrap();

        let requests = h.server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(body.get("description").is_none());
    }

    #[tokio::test]
    async fn test_should_send_replacement_description_when_given() {
        let h = TestHarness::new().await;
        mock_rest_patch(
            &h.server,
            "/gists/abc123",
            200,
            detail_fixture("abc123", "fresh", &[("a.txt", "new")]),
        )
        .await;

        h.factory.set_stdin("new");
        run(&h.factory, &Reference::parse("abc123/a.txt"), Some("fresh"))
            .await
            .unwrap();

        let requests = h.server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["description"], "fresh");
    }

    #[tokio::test]
    async fn test_should_update_gist_resolved_from_index() {
        let h = TestHarness::new().await;
        mock_rest_get(
            &h.server,
            "/gists",
            serde_json::json!([crate::test_helpers::overview_fixture(
                "first111",
                "octocat",
                &["a.txt"],
                ""
            )]),
        )
        .await;
        mock_rest_patch(
            &h.server,
            "/gists/first111",
            200,
            detail_fixture("first111", "", &[("a.txt", "new")]),
        )
        .await;

        h.factory.set_stdin("new");
        run(&h.factory, &Reference::parse("0/a.txt"), None)
            .await
            .unwrap();

        assert!(h.stderr().contains("Updated gist first111"));
    }
}
