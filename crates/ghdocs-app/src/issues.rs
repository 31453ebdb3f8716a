// Rust guideline compliant 2026-02-09

//! Issue listing, lookup and search.

use crate::error::{AppError, Result};
use crate::source::{DocSource, IssueQuery};
use ghdocs_core::{Issue, IssueComment};
use serde::Serialize;

/// An issue with its comments, when they were requested.
#[derive(Debug, Clone, Serialize)]
pub struct IssueDetail {
    /// The issue.
    #[serde(flatten)]
    pub issue: Issue,
    /// Comments, oldest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_list: Option<Vec<IssueComment>>,
}

/// Issue service over a [`DocSource`].
#[derive(Debug, Clone)]
pub struct IssuesService<S> {
    source: S,
}

impl<S: DocSource> IssuesService<S> {
    /// Creates an issue service.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Lists issues matching `query`, newest first as returned by the remote.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote listing fails.
    pub async fn list_issues(&self, query: &IssueQuery) -> Result<Vec<Issue>> {
        let mut issues = self.source.list_issues(query).await?;
        issues.truncate(query.effective_limit());
        Ok(issues)
    }

    /// Fetches one issue, optionally with its comments.
    ///
    /// # Errors
    ///
    /// Returns an error if `number` is zero or the issue cannot be fetched.
    pub async fn get_issue(&self, number: u64, include_comments: bool) -> Result<IssueDetail> {
        if number == 0 {
            return Err(AppError::InvalidInput(
                "Issue number must be positive".to_string(),
            ));
        }
        let issue = self.source.get_issue(number).await?;
        let comment_list = if include_comments && issue.comments > 0 {
            Some(self.source.list_issue_comments(number).await?)
        } else if include_comments {
            Some(Vec::new())
        } else {
            None
        };
        Ok(IssueDetail {
            issue,
            comment_list,
        })
    }

    /// Searches issues by free text.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] for a blank query, or a remote error.
    pub async fn search_issues(&self, text: &str, query: &IssueQuery) -> Result<Vec<Issue>> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::InvalidInput(
                "Search query must not be empty".to_string(),
            ));
        }
        tracing::debug!(query = text, state = query.state.as_str(), "searching issues");
        let mut issues = self.source.search_issues(text, query).await?;
        issues.truncate(query.effective_limit());
        Ok(issues)
    }
}
