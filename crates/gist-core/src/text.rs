//! Text helpers for the fixed output format.

use chrono::{DateTime, Utc};

/// Re-indent the continuation lines of a multi-line description by one
/// leading space, so the whole block lines up under list/show output.
pub fn indent_continuations(text: &str) -> String {
    text.replace('\n', "\n ")
}

/// Render a timestamp the way the service reports them: RFC 3339 with
/// second precision and a `Z` suffix.
pub fn timestamp(t: &DateTime<Utc>) -> String {
    t.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
