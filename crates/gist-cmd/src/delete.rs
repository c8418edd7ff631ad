//! Delete operation.

use anyhow::{Context, Result};

use gist_api::snippets;
use gist_core::ios_eprintln;

use crate::factory::Factory;
use crate::resolve::{self, Reference};

/// Run the delete operation.
///
/// The reference never carries a file name here; plan validation rejects
/// `ID/FILE` shapes before a client exists.
///
/// # Errors
///
/// Returns an error if the gist cannot be deleted.
pub async fn run(factory: &Factory, target: &Reference) -> Result<()> {
    let client = factory.api_client()?;

    let resolved = resolve::resolve(&client, target)
        .await
        .context("failed to resolve gist reference")?;

    snippets::delete(&client, &resolved.id)
        .await
        .context("failed to delete gist")?;

    let ios = &factory.io;
    let cs = ios.color_scheme();
    ios_eprintln!(ios, "{} Deleted gist {}", cs.success_icon(), resolved.id);

    Ok(())
}
