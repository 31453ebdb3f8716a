// Rust guideline compliant 2026-02-06

//! Unit tests for output formatting module.

use chrono::{TimeZone, Utc};
use ghdocs_app::{Document, DocumentListing, IssueDetail, Resolution};
use ghdocs_cli::create_formatter;
use ghdocs_core::{
    Category, DocEntry, FileContent, Issue, IssueComment, IssueState, Label, MatchResult, User,
};

fn resolution(requested: &str, matched: &str, score: f64) -> Resolution {
    Resolution {
        requested: requested.to_string(),
        matched: matched.to_string(),
        score,
        suggestions: Vec::new(),
    }
}

fn create_test_issue() -> Issue {
    Issue {
        number: 42,
        title: "Cache is not cleared".to_string(),
        state: IssueState::Open,
        body: Some("Steps to reproduce".to_string()),
        user: Some(User {
            login: "octocat".to_string(),
        }),
        labels: vec![Label {
            name: "bug".to_string(),
        }],
        comments: 1,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap(),
        html_url: "https://github.com/acme/docs/issues/42".to_string(),
        pull_request: None,
    }
}

fn create_test_document(score: f64) -> Document {
    Document {
        category: resolution("reference", "04_reference", 1.0),
        document: resolution("cli optons", "01-cli-options", score),
        file: FileContent {
            name: "01-cli-options.md".to_string(),
            path: "docs/_docs/04_reference/01-cli-options.md".to_string(),
            sha: "abc".to_string(),
            content: "# CLI options\n".to_string(),
            html_url: None,
        },
    }
}

fn create_test_categories() -> Vec<Category> {
    vec![
        Category {
            name: "01_getting-started".to_string(),
            title: "getting started".to_string(),
            path: "docs/_docs/01_getting-started".to_string(),
        },
        Category {
            name: "04_reference".to_string(),
            title: "reference".to_string(),
            path: "docs/_docs/04_reference".to_string(),
        },
    ]
}

#[test]
fn test_json_formatter_match() {
    let formatter = create_formatter("json");
    let result = MatchResult {
        matched: Some("reference".to_string()),
        score: 0.9,
        suggestions: vec!["preference".to_string()],
    };
    let output = formatter.format_match("refrence", &result);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["result"]["match"], "reference");
    assert_eq!(value["result"]["suggestions"][0], "preference");
}

#[test]
fn test_json_formatter_categories_total() {
    let formatter = create_formatter("json");
    let output = formatter.format_categories(&create_test_categories());
    assert!(output.contains("04_reference"));
    assert!(output.contains("\"total\": 2"));
}

#[test]
fn test_json_formatter_document_carries_notices() {
    let formatter = create_formatter("json");
    let output = formatter.format_document(&create_test_document(0.9));
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["result"]["document"]["matched"], "01-cli-options");
    assert_eq!(value["notices"].as_array().unwrap().len(), 1);
    assert!(formatter.format_notices(&["x".to_string()]).is_none());
}

#[test]
fn test_json_formatter_error() {
    let formatter = create_formatter("json");
    let output = formatter.format_error("Category 'x' not found");
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["status"], "error");
    assert_eq!(value["message"], "Category 'x' not found");
}

#[test]
fn test_table_formatter_match_and_no_match() {
    let formatter = create_formatter("table");
    let hit = MatchResult {
        matched: Some("reference".to_string()),
        score: 0.888_888,
        suggestions: Vec::new(),
    };
    let output = formatter.format_match("refrence", &hit);
    assert!(output.contains("Match:       reference"));
    assert!(output.contains("Score:       0.889"));

    let miss = MatchResult {
        matched: None,
        score: 0.0,
        suggestions: vec!["apple".to_string(), "apply".to_string()],
    };
    let output = formatter.format_match("xyz", &miss);
    assert!(output.contains("(none)"));
    assert!(output.contains("Suggestions: apple, apply"));
}

#[test]
fn test_table_formatter_categories() {
    let formatter = create_formatter("table");
    let output = formatter.format_categories(&create_test_categories());
    assert!(output.contains("getting started"));
    assert!(output.contains("04_reference"));
    assert_eq!(formatter.format_categories(&[]), "No categories found.");
}

#[test]
fn test_table_formatter_documents() {
    let formatter = create_formatter("table");
    let listing = DocumentListing {
        category: resolution("reference", "04_reference", 1.0),
        documents: vec![DocEntry {
            name: "01-cli-options".to_string(),
            file_name: "01-cli-options.md".to_string(),
            title: "cli options".to_string(),
            path: "docs/_docs/04_reference/01-cli-options.md".to_string(),
            size: 512,
            html_url: None,
        }],
    };
    let output = formatter.format_documents(&listing);
    assert!(output.starts_with("Category: 04_reference"));
    assert!(output.contains("cli options"));
    assert!(output.contains("512"));
}

#[test]
fn test_table_formatter_issue_with_comments() {
    let formatter = create_formatter("table");
    let detail = IssueDetail {
        issue: create_test_issue(),
        comment_list: Some(vec![IssueComment {
            user: Some(User {
                login: "reviewer".to_string(),
            }),
            body: "Fixed on main".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap(),
            html_url: String::new(),
        }]),
    };
    let output = formatter.format_issue(&detail);
    assert!(output.contains("Issue:       #42"));
    assert!(output.contains("Labels:      bug"));
    assert!(output.contains("Created:     2024-01-01 09:30 UTC"));
    assert!(output.contains("Comments (1):"));
    assert!(output.contains("--- reviewer at 2024-01-03 00:00 UTC"));
}

#[test]
fn test_table_formatter_notices() {
    let formatter = create_formatter("table");
    assert!(formatter.format_notices(&[]).is_none());
    let notices = vec!["Document 'a' resolved to 'b' (score 0.50)".to_string()];
    assert_eq!(
        formatter.format_notices(&notices).unwrap(),
        "Note: Document 'a' resolved to 'b' (score 0.50)"
    );
}

#[test]
fn test_plain_formatter_lines() {
    let formatter = create_formatter("plain");
    let output = formatter.format_issues(&[create_test_issue()]);
    assert_eq!(output, "42\topen\tCache is not cleared\n");

    let output = formatter.format_document(&create_test_document(1.0));
    assert_eq!(output, "# CLI options\n");

    let miss = MatchResult {
        matched: None,
        score: 0.0,
        suggestions: vec!["apple".to_string()],
    };
    assert_eq!(formatter.format_match("xyz", &miss), "-\t0.000\napple\n");
}

#[test]
fn test_unknown_format_falls_back_to_table() {
    let formatter = create_formatter("yaml");
    assert_eq!(formatter.format_issues(&[]), "No issues found.");
}
