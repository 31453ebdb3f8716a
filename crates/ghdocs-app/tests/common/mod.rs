// Rust guideline compliant 2026-02-09

//! In-memory `DocSource` used by the service tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use ghdocs_app::{AppError, DocSource, IssueQuery, Result};
use ghdocs_core::{
    ContentEntry, EntryKind, FileContent, Issue, IssueComment, IssueState, Label, User,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const DOCS_ROOT: &str = "docs/_docs";

#[derive(Default)]
pub struct StaticSource {
    directories: HashMap<String, Vec<ContentEntry>>,
    files: HashMap<String, FileContent>,
    issues: Vec<Issue>,
    comments: HashMap<u64, Vec<IssueComment>>,
    comment_fetches: AtomicUsize,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(mut self, path: &str, names: &[(&str, EntryKind)]) -> Self {
        let entries = names
            .iter()
            .map(|(name, kind)| ContentEntry {
                name: (*name).to_string(),
                path: format!("{}/{}", path, name),
                kind: *kind,
                size: 10,
                sha: format!("sha-{}", name),
                html_url: None,
            })
            .collect();
        self.directories.insert(path.to_string(), entries);
        self
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path).to_string();
        self.files.insert(
            path.to_string(),
            FileContent {
                name,
                path: path.to_string(),
                sha: "blob".to_string(),
                content: content.to_string(),
                html_url: None,
            },
        );
        self
    }

    pub fn with_issue(mut self, issue: Issue) -> Self {
        self.issues.push(issue);
        self
    }

    pub fn with_comments(mut self, number: u64, bodies: &[&str]) -> Self {
        let comments = bodies
            .iter()
            .map(|body| IssueComment {
                user: Some(User {
                    login: "reviewer".to_string(),
                }),
                body: (*body).to_string(),
                created_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
                html_url: String::new(),
            })
            .collect();
        self.comments.insert(number, comments);
        self
    }

    pub fn comment_fetches(&self) -> usize {
        self.comment_fetches.load(Ordering::SeqCst)
    }
}

fn matches(issue: &Issue, query: &IssueQuery) -> bool {
    let state_ok = query.state == IssueState::All || issue.state == query.state;
    let labels_ok = query
        .labels
        .iter()
        .all(|label| issue.label_names().contains(&label.as_str()));
    state_ok && labels_ok
}

#[async_trait]
impl DocSource for StaticSource {
    async fn list_directory(&self, path: &str) -> Result<Vec<ContentEntry>> {
        self.directories
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::RemoteNotFound(path.to_string()))
    }

    async fn fetch_file(&self, path: &str) -> Result<FileContent> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::RemoteNotFound(path.to_string()))
    }

    async fn list_issues(&self, query: &IssueQuery) -> Result<Vec<Issue>> {
        Ok(self
            .issues
            .iter()
            .filter(|issue| matches(issue, query))
            .cloned()
            .collect())
    }

    async fn get_issue(&self, number: u64) -> Result<Issue> {
        self.issues
            .iter()
            .find(|issue| issue.number == number)
            .cloned()
            .ok_or_else(|| AppError::RemoteNotFound(format!("issues/{}", number)))
    }

    async fn list_issue_comments(&self, number: u64) -> Result<Vec<IssueComment>> {
        self.comment_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.comments.get(&number).cloned().unwrap_or_default())
    }

    async fn search_issues(&self, text: &str, query: &IssueQuery) -> Result<Vec<Issue>> {
        let needle = text.to_lowercase();
        Ok(self
            .issues
            .iter()
            .filter(|issue| matches(issue, query))
            .filter(|issue| {
                issue.title.to_lowercase().contains(&needle)
                    || issue
                        .body
                        .as_deref()
                        .is_some_and(|body| body.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }
}

pub fn issue(number: u64, title: &str, state: IssueState, labels: &[&str], comments: u64) -> Issue {
    Issue {
        number,
        title: title.to_string(),
        state,
        body: Some(format!("Body of {}", title)),
        user: Some(User {
            login: "octocat".to_string(),
        }),
        labels: labels
            .iter()
            .map(|name| Label {
                name: (*name).to_string(),
            })
            .collect(),
        comments,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        html_url: format!("https://github.com/acme/docs/issues/{}", number),
        pull_request: None,
    }
}

/// A docs tree with three categories in non-sorted remote order.
pub fn docs_source() -> StaticSource {
    StaticSource::new()
        .with_dir(
            DOCS_ROOT,
            &[
                ("04_reference", EntryKind::Dir),
                ("README.md", EntryKind::File),
                ("01_getting-started", EntryKind::Dir),
                ("02_features", EntryKind::Dir),
            ],
        )
        .with_dir(
            "docs/_docs/01_getting-started",
            &[
                ("02_install.md", EntryKind::File),
                ("01-quick-start.md", EntryKind::File),
                ("diagram.png", EntryKind::File),
            ],
        )
        .with_dir(
            "docs/_docs/04_reference",
            &[
                ("01-cli-options.mdx", EntryKind::File),
                ("02-config.md", EntryKind::File),
                ("assets", EntryKind::Dir),
            ],
        )
        .with_dir("docs/_docs/02_features", &[])
        .with_file(
            "docs/_docs/01_getting-started/01-quick-start.md",
            "# Quick start\n",
        )
        .with_file(
            "docs/_docs/04_reference/01-cli-options.mdx",
            "# CLI options\n",
        )
}

/// Issues #1-#4 with a mix of states and labels.
pub fn issues_source() -> StaticSource {
    StaticSource::new()
        .with_issue(issue(4, "Cache is not cleared", IssueState::Open, &["bug"], 2))
        .with_issue(issue(3, "Document include blocks", IssueState::Open, &["docs"], 0))
        .with_issue(issue(2, "Crash on empty cache dir", IssueState::Closed, &["bug"], 0))
        .with_issue(issue(1, "Add plan summary", IssueState::Open, &["enhancement"], 0))
        .with_comments(4, &["Same here", "Fixed on main"])
}
