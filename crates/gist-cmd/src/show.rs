//! Show operation: print a gist's files.
//!
//! Files print in name order. An explicit `/FILE` suffix selects one file
//! and always prints it raw; otherwise headers appear whenever output
//! would be ambiguous (several files) or verbose mode asks for them.

use anyhow::{Context, Result};

use gist_api::models::FileContent;
use gist_api::snippets;
use gist_core::iostreams::IOStreams;
use gist_core::text;
use gist_core::{ios_eprintln, ios_print, ios_println};

use crate::factory::Factory;
use crate::resolve::{self, Reference};

/// Run the show operation.
///
/// # Errors
///
/// Returns an error if the gist cannot be fetched.
pub async fn run(factory: &Factory, target: &Reference, limit: i64, verbose: bool) -> Result<()> {
    let client = factory.api_client()?;

    let resolved = resolve::resolve(&client, target)
        .await
        .context("failed to resolve gist reference")?;
    let detail = snippets::get(&client, &resolved.id)
        .await
        .context("failed to fetch gist")?;

    let ios = &factory.io;

    if verbose {
        ios_println!(ios, "{}", detail.id);
        ios_println!(ios, "{}", detail.html_url);
        ios_println!(
            ios,
            "created at: {} updated at: {}",
            text::timestamp(&detail.created_at),
            text::timestamp(&detail.updated_at)
        );
        ios_println!(
            ios,
            "files: {} comments: {} forks: {}",
            detail.files.len(),
            detail.comments,
            detail.forks.len()
        );
        ios_println!(ios, "{}", detail.description_text());
        ios_println!(ios);
    }

    // An explicit file name always prints raw, whatever the verbosity.
    if let Some(ref file_name) = resolved.file_name {
        if let Some(file) = detail.files.get(file_name) {
            note_truncation(ios, file_name, file);
            ios_print!(ios, "{}", file.content);
        }
        return Ok(());
    }

    let shown = if limit > 0 {
        usize::try_from(limit).unwrap_or(usize::MAX)
    } else {
        usize::MAX
    };
    let single = limit == 1 || detail.files.len() == 1;

    for (name, file) in detail.files.iter().take(shown) {
        note_truncation(ios, name, file);

        if verbose {
            ios_println!(
                ios,
                "==> {name} / {}({}) <==",
                file.language_label(),
                file.content_type
            );
            ios_println!(ios, "{}", file.content);
        } else if single {
            ios_print!(ios, "{}", file.content);
        } else {
            ios_println!(ios, "==> {name} <==");
            ios_println!(ios, "{}", file.content);
        }
    }

    Ok(())
}

/// Warn on stderr when the service cut a file's content short.
fn note_truncation(ios: &IOStreams, name: &str, file: &FileContent) {
    if file.truncated {
        let cs = ios.color_scheme();
        ios_eprintln!(
            ios,
            "{} content of {name} is truncated by the service",
            cs.warning_icon()
        );
    }
}
