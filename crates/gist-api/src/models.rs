//! Typed models for the remote snippet service.
//!
//! File maps are [`BTreeMap`]s keyed by file name: the service does not
//! guarantee any object-key order, and every consumer here needs
//! name-sorted iteration.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner handle attached to a snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetOwner {
    /// Login name.
    pub login: String,
}

/// Per-file summary in a list response; content is omitted there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStub {
    /// Language tag, if the service detected one.
    #[serde(default)]
    pub language: Option<String>,
    /// Media type reported by the service.
    #[serde(default, rename = "type")]
    pub content_type: String,
    /// File size in bytes.
    #[serde(default)]
    pub size: u64,
}

/// Full file record in a detail response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileContent {
    /// The file's text. When `truncated` is set this is a server-side
    /// prefix only and must not be treated as the complete file.
    #[serde(default)]
    pub content: String,
    /// Language tag, if the service detected one.
    #[serde(default)]
    pub language: Option<String>,
    /// Media type reported by the service.
    #[serde(default, rename = "type")]
    pub content_type: String,
    /// File size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Whether `content` was cut off by the service.
    #[serde(default)]
    pub truncated: bool,
}

impl FileContent {
    /// Language tag for display, empty when the service reported none.
    pub fn language_label(&self) -> &str {
        self.language.as_deref().unwrap_or("")
    }
}

/// Summary record returned by list queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetOverview {
    /// Remote identifier.
    pub id: String,
    /// Free-text description; the service reports `null` for none.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the snippet is public.
    #[serde(default)]
    pub public: bool,
    /// Files present, keyed by file name.
    pub files: BTreeMap<String, FileStub>,
    /// Comment count.
    #[serde(default)]
    pub comments: u64,
    /// Canonical web URL.
    #[serde(default)]
    pub html_url: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Owner handle; absent for anonymous snippets.
    #[serde(default)]
    pub owner: Option<SnippetOwner>,
}

impl SnippetOverview {
    /// Comma-joined file names in name order.
    pub fn joined_file_names(&self) -> String {
        self.files
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Description text, empty when the service reported none.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Owner login, empty when the snippet is anonymous.
    pub fn owner_login(&self) -> &str {
        self.owner.as_ref().map_or("", |o| o.login.as_str())
    }
}

/// Reference to a fork of a snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForkRef {
    /// Remote identifier of the fork.
    pub id: String,
}

/// Full record returned by a single-item fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetDetail {
    /// Remote identifier.
    pub id: String,
    /// Free-text description; the service reports `null` for none.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the snippet is public.
    #[serde(default)]
    pub public: bool,
    /// Files with content, keyed by file name.
    pub files: BTreeMap<String, FileContent>,
    /// Comment count.
    #[serde(default)]
    pub comments: u64,
    /// Canonical web URL.
    #[serde(default)]
    pub html_url: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Known forks.
    #[serde(default)]
    pub forks: Vec<ForkRef>,
    /// Owner handle; absent for anonymous snippets.
    #[serde(default)]
    pub owner: Option<SnippetOwner>,
}

impl SnippetDetail {
    /// Description text, empty when the service reported none.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// One file in a create/update payload.
#[derive(Debug, Clone, Serialize)]
pub struct NewFile {
    /// Full text of the file.
    pub content: String,
}

/// Payload for creating a snippet.
#[derive(Debug, Serialize)]
pub struct CreateSnippet {
    /// Description; may be empty.
    pub description: String,
    /// Visibility of the new snippet.
    pub public: bool,
    /// Files to create, keyed by file name.
    pub files: BTreeMap<String, NewFile>,
}

/// Payload for updating a snippet.
///
/// `description: None` omits the field from the wire payload entirely, so
/// the service keeps the existing description instead of erasing it.
#[derive(Debug, Serialize)]
pub struct UpdateSnippet {
    /// Replacement description, or `None` to leave it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Files to replace, keyed by file name.
    pub files: BTreeMap<String, NewFile>,
}
