// Rust guideline compliant 2026-02-09

//! Abstraction over the remote documentation and issue host.

use crate::error::{AppError, Result};
use async_trait::async_trait;
use ghdocs_core::{ContentEntry, FileContent, Issue, IssueComment, IssueState};
use std::sync::Arc;

/// Default number of issues returned by listings and searches.
pub const DEFAULT_ISSUE_LIMIT: usize = 30;

/// Hard cap on issues returned by a single listing or search.
pub const MAX_ISSUE_LIMIT: usize = 100;

/// Filters for issue listings and searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueQuery {
    /// State filter.
    pub state: IssueState,
    /// Labels that must all be present.
    pub labels: Vec<String>,
    /// Maximum number of issues to return.
    pub limit: usize,
}

impl Default for IssueQuery {
    fn default() -> Self {
        Self {
            state: IssueState::Open,
            labels: Vec::new(),
            limit: DEFAULT_ISSUE_LIMIT,
        }
    }
}

impl IssueQuery {
    /// Returns the limit clamped to `1..=MAX_ISSUE_LIMIT`.
    #[must_use]
    pub fn effective_limit(&self) -> usize {
        self.limit.clamp(1, MAX_ISSUE_LIMIT)
    }
}

/// Parses an issue state filter.
///
/// # Errors
///
/// Returns an error if the state is not `open`, `closed` or `all`.
pub fn parse_state(value: &str) -> Result<IssueState> {
    match value.trim().to_lowercase().as_str() {
        "open" => Ok(IssueState::Open),
        "closed" => Ok(IssueState::Closed),
        "all" => Ok(IssueState::All),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid issue state: {} (expected open, closed, or all)",
            value
        ))),
    }
}

/// Remote host operations needed by the services.
///
/// Implementations handle transport, authentication, pagination and
/// content decoding. Listings come back in remote order.
#[async_trait]
pub trait DocSource: Send + Sync {
    /// Lists the entries of a directory.
    async fn list_directory(&self, path: &str) -> Result<Vec<ContentEntry>>;

    /// Fetches and decodes a file.
    async fn fetch_file(&self, path: &str) -> Result<FileContent>;

    /// Lists issues, excluding pull requests.
    async fn list_issues(&self, query: &IssueQuery) -> Result<Vec<Issue>>;

    /// Fetches a single issue by number.
    async fn get_issue(&self, number: u64) -> Result<Issue>;

    /// Lists the comments of an issue, oldest first.
    async fn list_issue_comments(&self, number: u64) -> Result<Vec<IssueComment>>;

    /// Runs a full-text issue search.
    async fn search_issues(&self, text: &str, query: &IssueQuery) -> Result<Vec<Issue>>;
}

#[async_trait]
impl<T: DocSource + ?Sized> DocSource for Arc<T> {
    async fn list_directory(&self, path: &str) -> Result<Vec<ContentEntry>> {
        (**self).list_directory(path).await
    }

    async fn fetch_file(&self, path: &str) -> Result<FileContent> {
        (**self).fetch_file(path).await
    }

    async fn list_issues(&self, query: &IssueQuery) -> Result<Vec<Issue>> {
        (**self).list_issues(query).await
    }

    async fn get_issue(&self, number: u64) -> Result<Issue> {
        (**self).get_issue(number).await
    }

    async fn list_issue_comments(&self, number: u64) -> Result<Vec<IssueComment>> {
        (**self).list_issue_comments(number).await
    }

    async fn search_issues(&self, text: &str, query: &IssueQuery) -> Result<Vec<Issue>> {
        (**self).search_issues(text, query).await
    }
}
