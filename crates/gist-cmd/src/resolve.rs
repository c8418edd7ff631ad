//! Identifier resolution.
//!
//! A positional argument is an opaque gist id, a zero-based index into the
//! owned list, or either followed by `/FILE`. Parsing the shape is pure;
//! index substitution is the only step that talks to the service, and only
//! when the id is numeric.

use gist_api::client::Client;
use gist_api::errors::ApiError;
use gist_api::snippets;
use tracing::debug;

/// A parsed positional argument: identifier plus optional file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// The identifier part, before index resolution.
    pub id: String,
    /// The file name after the first `/`, if any.
    pub file_name: Option<String>,
}

impl Reference {
    /// Split a raw positional argument on the first `/`.
    ///
    /// Performs no I/O, so argument validation can reject bad shapes
    /// before a client exists.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('/') {
            Some((id, file)) => Self {
                id: id.to_string(),
                file_name: Some(file.to_string()),
            },
            None => Self {
                id: raw.to_string(),
                file_name: None,
            },
        }
    }
}

/// Resolve a reference's identifier against the owned list.
///
/// A non-negative integer id is treated as a zero-based index into
/// `list_mine` (always the owned list, whatever the operation will show).
/// In bounds, the id at that position is substituted; out of bounds, the
/// literal string is kept and the definitive failure is left to the actual
/// fetch. Non-numeric ids pass through without any network access.
///
/// # Errors
///
/// Returns an error only when the index lookup itself fails remotely.
pub async fn resolve(client: &Client, reference: &Reference) -> Result<Reference, ApiError> {
    let Ok(index) = reference.id.parse::<usize>() else {
        return Ok(reference.clone());
    };

    let gists = snippets::list_mine(client).await?;
    let id = match gists.get(index) {
        Some(overview) => {
            debug!(index, id = %overview.id, "resolved list index");
            overview.id.clone()
        }
        // Out of bounds: keep the literal and let the fetch decide.
        None => reference.id.clone(),
    };

    Ok(Reference {
        id,
        file_name: reference.file_name.clone(),
    })
}
