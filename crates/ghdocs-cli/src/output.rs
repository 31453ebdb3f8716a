// Rust guideline compliant 2026-02-06

//! Output formatting module for the ghdocs CLI.
//!
//! This module provides functionality for formatting resolver results,
//! documentation listings and issues in various output formats (JSON,
//! table, plain text).

use chrono::{DateTime, Utc};
use ghdocs_app::{Document, DocumentListing, IssueDetail, SuccessEnvelope};
use ghdocs_core::{Category, Issue, MatchResult};
use serde::Serialize;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
///
/// Defines the interface for formatting ghdocs data in different output formats.
pub trait OutputFormatter {
    /// Formats the outcome of a name resolution.
    ///
    /// # Arguments
    /// * `input` - The name that was resolved
    /// * `result` - The resolver outcome
    ///
    /// # Returns
    /// A formatted string representation of the result
    fn format_match(&self, input: &str, result: &MatchResult) -> String;

    /// Formats a list of documentation categories.
    fn format_categories(&self, categories: &[Category]) -> String;

    /// Formats the documents of a category.
    fn format_documents(&self, listing: &DocumentListing) -> String;

    /// Formats a fetched document.
    fn format_document(&self, document: &Document) -> String;

    /// Formats a list of issues.
    fn format_issues(&self, issues: &[Issue]) -> String;

    /// Formats a single issue with optional comments.
    fn format_issue(&self, detail: &IssueDetail) -> String;

    /// Formats lookup notices for stderr.
    ///
    /// Returns `None` when the notices are already part of the main output.
    fn format_notices(&self, notices: &[String]) -> Option<String>;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Wraps every payload in the same success envelope the MCP tools return.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope<T: Serialize>(result: T, notices: Vec<String>) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(result).with_notices(notices))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_match(&self, _input: &str, result: &MatchResult) -> String {
        Self::envelope(result, Vec::new())
    }

    fn format_categories(&self, categories: &[Category]) -> String {
        Self::envelope(
            json!({ "categories": categories, "total": categories.len() }),
            Vec::new(),
        )
    }

    fn format_documents(&self, listing: &DocumentListing) -> String {
        Self::envelope(listing, listing.notices())
    }

    fn format_document(&self, document: &Document) -> String {
        Self::envelope(document, document.notices())
    }

    fn format_issues(&self, issues: &[Issue]) -> String {
        Self::envelope(json!({ "issues": issues, "total": issues.len() }), Vec::new())
    }

    fn format_issue(&self, detail: &IssueDetail) -> String {
        Self::envelope(detail, Vec::new())
    }

    fn format_notices(&self, _notices: &[String]) -> Option<String> {
        None
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "status": "error", "message": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats listings as human-readable tables.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_match(&self, input: &str, result: &MatchResult) -> String {
        let mut output = String::new();
        output.push_str(&format!("Input:       {}\n", input));
        match &result.matched {
            Some(matched) => {
                output.push_str(&format!("Match:       {}\n", matched));
                output.push_str(&format!("Score:       {:.3}\n", result.score));
            }
            None => output.push_str("Match:       (none)\n"),
        }
        if !result.suggestions.is_empty() {
            output.push_str(&format!("Suggestions: {}\n", result.suggestions.join(", ")));
        }
        output
    }

    fn format_categories(&self, categories: &[Category]) -> String {
        if categories.is_empty() {
            return "No categories found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Name", "Title", "Path"]);
        for category in categories {
            builder.push_record(vec![&category.name, &category.title, &category.path]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_documents(&self, listing: &DocumentListing) -> String {
        if listing.documents.is_empty() {
            return format!("No documents in {}.", listing.category.matched);
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Name", "Title", "Size"]);
        for doc in &listing.documents {
            builder.push_record(vec![&doc.name, &doc.title, &doc.size.to_string()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        format!("Category: {}\n{}", listing.category.matched, table)
    }

    fn format_document(&self, document: &Document) -> String {
        let mut output = String::new();
        output.push_str(&format!("Path:        {}\n", document.file.path));
        if let Some(url) = &document.file.html_url {
            output.push_str(&format!("URL:         {}\n", url));
        }
        output.push('\n');
        output.push_str(&document.file.content);
        output
    }

    fn format_issues(&self, issues: &[Issue]) -> String {
        if issues.is_empty() {
            return "No issues found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["#", "State", "Title", "Labels", "Updated"]);
        for issue in issues {
            builder.push_record(vec![
                issue.number.to_string(),
                issue.state.as_str().to_string(),
                issue.title.clone(),
                issue.label_names().join(", "),
                format_time(&issue.updated_at),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_issue(&self, detail: &IssueDetail) -> String {
        let issue = &detail.issue;
        let mut output = String::new();
        output.push_str(&format!("Issue:       #{}\n", issue.number));
        output.push_str(&format!("Title:       {}\n", issue.title));
        output.push_str(&format!("State:       {}\n", issue.state.as_str()));
        if let Some(user) = &issue.user {
            output.push_str(&format!("Author:      {}\n", user.login));
        }
        output.push_str(&format!("Created:     {}\n", format_time(&issue.created_at)));
        output.push_str(&format!("Updated:     {}\n", format_time(&issue.updated_at)));
        if !issue.labels.is_empty() {
            output.push_str(&format!("Labels:      {}\n", issue.label_names().join(", ")));
        }
        output.push_str(&format!("URL:         {}\n", issue.html_url));

        if let Some(body) = issue.body.as_deref().filter(|body| !body.trim().is_empty()) {
            output.push('\n');
            output.push_str(body.trim_end());
            output.push('\n');
        }

        if let Some(comments) = &detail.comment_list {
            output.push_str(&format!("\nComments ({}):\n", comments.len()));
            for comment in comments {
                let author = comment
                    .user
                    .as_ref()
                    .map_or("unknown", |user| user.login.as_str());
                output.push_str(&format!(
                    "\n--- {} at {}\n{}\n",
                    author,
                    format_time(&comment.created_at),
                    comment.body.trim_end()
                ));
            }
        }

        output
    }

    fn format_notices(&self, notices: &[String]) -> Option<String> {
        format_notice_lines(notices)
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Plain text output formatter.
///
/// One record per line, tab-separated, for piping into other tools.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_match(&self, _input: &str, result: &MatchResult) -> String {
        let mut output = String::new();
        match &result.matched {
            Some(matched) => output.push_str(&format!("{}\t{:.3}\n", matched, result.score)),
            None => output.push_str("-\t0.000\n"),
        }
        for suggestion in &result.suggestions {
            output.push_str(&format!("{}\n", suggestion));
        }
        output
    }

    fn format_categories(&self, categories: &[Category]) -> String {
        categories
            .iter()
            .map(|category| format!("{}\n", category.name))
            .collect()
    }

    fn format_documents(&self, listing: &DocumentListing) -> String {
        listing
            .documents
            .iter()
            .map(|doc| format!("{}\n", doc.name))
            .collect()
    }

    fn format_document(&self, document: &Document) -> String {
        document.file.content.clone()
    }

    fn format_issues(&self, issues: &[Issue]) -> String {
        issues
            .iter()
            .map(|issue| {
                format!(
                    "{}\t{}\t{}\n",
                    issue.number,
                    issue.state.as_str(),
                    issue.title
                )
            })
            .collect()
    }

    fn format_issue(&self, detail: &IssueDetail) -> String {
        let issue = &detail.issue;
        let mut output = format!("{}\t{}\t{}\n", issue.number, issue.state.as_str(), issue.title);
        if let Some(body) = &issue.body {
            output.push_str(body.trim_end());
            output.push('\n');
        }
        for comment in detail.comment_list.iter().flatten() {
            output.push_str(comment.body.trim_end());
            output.push('\n');
        }
        output
    }

    fn format_notices(&self, notices: &[String]) -> Option<String> {
        format_notice_lines(notices)
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

fn format_notice_lines(notices: &[String]) -> Option<String> {
    if notices.is_empty() {
        return None;
    }
    Some(
        notices
            .iter()
            .map(|notice| format!("Note: {}", notice))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

fn format_time(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter),
    }
}
