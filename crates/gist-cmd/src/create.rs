//! Create operation: new single-file public gist from standard input.

use anyhow::{Context, Result};

use gist_api::snippets;
use gist_core::{ios_eprintln, ios_println};

use crate::factory::Factory;

/// Run the create operation.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or the gist cannot be created.
pub async fn run(factory: &Factory, file_name: &str, description: &str) -> Result<()> {
    let client = factory.api_client()?;
    let content = factory.read_stdin()?;

    let detail = snippets::create(&client, file_name, description, &content)
        .await
        .context("failed to create gist")?;

    let ios = &factory.io;
    let cs = ios.color_scheme();
    ios_eprintln!(ios, "{} Created gist {}", cs.success_icon(), detail.id);
    ios_println!(ios, "{}", detail.html_url);

    Ok(())
}
