// Rust guideline compliant 2026-02-06

//! Core data models for documentation and issue retrieval.

use crate::normalize::normalize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of entry in a remote directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Dir,
    /// Symbolic link.
    Symlink,
    /// Git submodule.
    Submodule,
}

/// A single entry returned by a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    /// File or directory name.
    pub name: String,
    /// Path relative to the repository root.
    pub path: String,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Size in bytes (0 for directories).
    #[serde(default)]
    pub size: u64,
    /// Blob or tree SHA.
    #[serde(default)]
    pub sha: String,
    /// Browser URL for the entry.
    #[serde(default)]
    pub html_url: Option<String>,
}

impl ContentEntry {
    /// Returns whether the entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Returns the file name without its Markdown extension.
///
/// Returns `None` for names that are not `.md` or `.mdx` files.
#[must_use]
pub fn markdown_stem(name: &str) -> Option<&str> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    match ext.to_ascii_lowercase().as_str() {
        "md" | "mdx" => Some(stem),
        _ => None,
    }
}

/// A documentation category (a directory under the docs root).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Directory name as stored on the remote (e.g. `04_reference`).
    pub name: String,
    /// Normalized display title (e.g. `reference`).
    pub title: String,
    /// Path relative to the repository root.
    pub path: String,
}

impl Category {
    /// Builds a category from a directory entry.
    #[must_use]
    pub fn from_entry(entry: &ContentEntry) -> Self {
        Self {
            name: entry.name.clone(),
            title: normalize(&entry.name),
            path: entry.path.clone(),
        }
    }
}

/// A documentation file inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntry {
    /// File name without extension (e.g. `01-quick-start`).
    pub name: String,
    /// File name with extension.
    pub file_name: String,
    /// Normalized display title.
    pub title: String,
    /// Path relative to the repository root.
    pub path: String,
    /// Size in bytes.
    pub size: u64,
    /// Browser URL for the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

impl DocEntry {
    /// Builds a document entry from a Markdown file entry.
    ///
    /// Returns `None` if the entry is not a Markdown file.
    #[must_use]
    pub fn from_entry(entry: &ContentEntry) -> Option<Self> {
        if entry.kind != EntryKind::File {
            return None;
        }
        let stem = markdown_stem(&entry.name)?;
        Some(Self {
            name: stem.to_string(),
            file_name: entry.name.clone(),
            title: normalize(stem),
            path: entry.path.clone(),
            size: entry.size,
            html_url: entry.html_url.clone(),
        })
    }
}

/// Decoded file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    /// File name.
    pub name: String,
    /// Path relative to the repository root.
    pub path: String,
    /// Blob SHA.
    pub sha: String,
    /// Decoded UTF-8 text.
    pub content: String,
    /// Browser URL for the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

/// Issue state filter and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    /// Open issues.
    #[default]
    Open,
    /// Closed issues.
    Closed,
    /// Both open and closed (filter only).
    All,
}

impl IssueState {
    /// Returns the query-string form of the state.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
            IssueState::All => "all",
        }
    }
}

/// A label attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name.
    pub name: String,
}

/// Account that authored an issue or comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name.
    pub login: String,
}

/// A remote issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number within the repository.
    pub number: u64,
    /// One-line title.
    pub title: String,
    /// Current state.
    pub state: IssueState,
    /// Markdown body.
    #[serde(default)]
    pub body: Option<String>,
    /// Author.
    pub user: Option<User>,
    /// Labels.
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Number of comments.
    #[serde(default)]
    pub comments: u64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Browser URL.
    pub html_url: String,
    /// Present when the item is a pull request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<serde_json::Value>,
}

impl Issue {
    /// Returns whether the item is a pull request rather than an issue.
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    /// Returns the label names.
    #[must_use]
    pub fn label_names(&self) -> Vec<&str> {
        self.labels.iter().map(|label| label.name.as_str()).collect()
    }
}

/// A comment on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueComment {
    /// Comment author.
    pub user: Option<User>,
    /// Markdown body.
    #[serde(default)]
    pub body: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Browser URL.
    #[serde(default)]
    pub html_url: String,
}
