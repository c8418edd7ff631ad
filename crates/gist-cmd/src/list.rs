//! List operation: render owned or starred gist summaries.

use anyhow::{Context, Result};

use gist_api::models::SnippetOverview;
use gist_api::snippets;
use gist_core::iostreams::IOStreams;
use gist_core::text;
use gist_core::{ios_eprintln, ios_println};

use crate::factory::Factory;

/// Run the list operation.
///
/// # Errors
///
/// Returns an error if the gists cannot be listed.
pub async fn run(factory: &Factory, starred: bool, limit: i64, verbose: bool) -> Result<()> {
    let client = factory.api_client()?;

    let gists = if starred {
        snippets::list_starred(&client)
            .await
            .context("failed to list starred gists")?
    } else {
        snippets::list_mine(&client)
            .await
            .context("failed to list gists")?
    };

    let ios = &factory.io;

    if gists.is_empty() {
        if ios.is_stdout_tty() {
            ios_eprintln!(ios, "No gists found");
        }
        return Ok(());
    }

    let shown = if limit > 0 {
        usize::try_from(limit).unwrap_or(usize::MAX)
    } else {
        usize::MAX
    };

    for (index, overview) in gists.iter().take(shown).enumerate() {
        render_overview(ios, index, overview, verbose);
    }

    Ok(())
}

/// Print one list entry in the fixed summary format.
fn render_overview(ios: &IOStreams, index: usize, overview: &SnippetOverview, verbose: bool) {
    ios_println!(
        ios,
        "{index} {}/{} {}",
        overview.owner_login(),
        overview.joined_file_names(),
        text::timestamp(&overview.updated_at)
    );
    ios_println!(
        ios,
        " {} files: {} comments: {}",
        overview.id,
        overview.files.len(),
        overview.comments
    );

    if verbose {
        ios_println!(
            ios,
            " created at: {} updated at: {}",
            text::timestamp(&overview.created_at),
            text::timestamp(&overview.updated_at)
        );
        ios_println!(ios, " {}", overview.html_url);
    }

    let description = overview.description_text();
    ios_println!(ios, " {}", text::indent_continuations(description));
    if !description.is_empty() {
        ios_println!(ios);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::test_helpers::{TestHarness, mock_rest_get, mock_rest_get_status, overview_fixture};

    #[tokio::test]
    async fn test_should_list_owned_gists() {
        let h = TestHarness::new().await;
        mock_rest_get(
            &h.server,
            "/gists",
            serde_json::json!([
                overview_fixture("abc123", "octocat", &["a.txt"], "first gist"),
                overview_fixture("def456", "octocat", &["b.md", "c.md"], ""),
            ]),
        )
        .await;

        run(&h.factory, false, 0, false).await.unwrap();

        let out = h.stdout();
        assert_eq!(
            out,
            "0 octocat/a.txt 2024-01-15T10:00:00Z\n \
             abc123 files: 1 comments: 0\n \
             first gist\n\n\
             1 octocat/b.md,c.md 2024-01-15T10:00:00Z\n \
             def456 files: 2 comments: 0\n \n"
        );
    }

    #[tokio::test]
    async fn test_should_print_exactly_the_first_n_items() {
        let h = TestHarness::new().await;
        let items: Vec<_> = (0..5)
            .map(|i| overview_fixture(&format!("id{i}"), "octocat", &["f.txt"], ""))
            .collect();
        mock_rest_get(&h.server, "/gists", serde_json::Value::Array(items)).await;

        run(&h.factory, false, 2, false).await.unwrap();

        let out = h.stdout();
        assert!(out.contains("id0"));
        assert!(out.contains("id1"));
        assert!(!out.contains("id2"));
        assert!(!out.contains("id4"));
    }

    #[tokio::test]
    async fn test_should_treat_non_positive_limit_as_unbounded() {
        let h = TestHarness::new().await;
        let items: Vec<_> = (0..3)
            .map(|i| overview_fixture(&format!("id{i}"), "octocat", &["f.txt"], ""))
            .collect();
        mock_rest_get(&h.server, "/gists", serde_json::Value::Array(items)).await;

        run(&h.factory, false, -1, false).await.unwrap();

        let out = h.stdout();
        assert!(out.contains("id0"));
        assert!(out.contains("id2"));
    }

    #[tokio::test]
    async fn test_should_list_starred_gists_from_starred_endpoint() {
        let h = TestHarness::new().await;
        mock_rest_get(
            &h.server,
            "/gists/starred",
            serde_json::json!([overview_fixture("starred1", "other", &["x.txt"], "")]),
        )
        .await;

        run(&h.factory, true, 0, false).await.unwrap();

        assert!(h.stdout().contains("starred1"));
        assert!(h.stdout().contains("other/x.txt"));
    }

    #[tokio::test]
    async fn test_should_print_timestamps_and_url_in_verbose_mode() {
        let h = TestHarness::new().await;
        mock_rest_get(
            &h.server,
            "/gists",
            serde_json::json!([overview_fixture("abc123", "octocat", &["a.txt"], "demo")]),
        )
        .await;

        run(&h.factory, false, 0, true).await.unwrap();

        let out = h.stdout();
        assert!(out.contains(" created at: 2024-01-14T09:00:00Z updated at: 2024-01-15T10:00:00Z"));
        assert!(out.contains(" https://gist.github.com/abc123"));
    }

    #[tokio::test]
    async fn test_should_indent_multi_line_descriptions() {
        let h = TestHarness::new().await;
        mock_rest_get(
            &h.server,
            "/gists",
            serde_json::json!([overview_fixture(
                "abc123",
                "octocat",
                &["a.txt"],
                "line one\nline two"
            )]),
        )
        .await;

        run(&h.factory, false, 0, false).await.unwrap();

        assert!(h.stdout().contains(" line one\n line two\n\n"));
    }

    #[tokio::test]
    async fn test_should_not_add_blank_line_after_empty_description() {
        let h = TestHarness::new().await;
        mock_rest_get(
            &h.server,
            "/gists",
            serde_json::json!([overview_fixture("abc123", "octocat", &["a.txt"], "")]),
        )
        .await;

        run(&h.factory, false, 0, false).await.unwrap();

        assert!(h.stdout().ends_with("comments: 0\n \n"));
    }

    #[tokio::test]
    async fn test_should_print_nothing_for_empty_list() {
        let h = TestHarness::new().await;
        mock_rest_get(&h.server, "/gists", serde_json::json!([])).await;

        run(&h.factory, false, 0, false).await.unwrap();

        assert!(h.stdout().is_empty());
    }

    #[tokio::test]
    async fn test_should_surface_service_failure() {
        let h = TestHarness::new().await;
        mock_rest_get_status(
            &h.server,
            "/gists",
            401,
            serde_json::json!({"message": "Bad credentials"}),
        )
        .await;

        let err = run(&h.factory, false, 0, false).await.unwrap_err();
        assert!(err.to_string().contains("failed to list gists"));
    }
}
