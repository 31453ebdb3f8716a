// Rust guideline compliant 2026-02-09

//! MCP tool input and output types for ghdocs.

use ghdocs_core::{Category, Issue};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input parameters for the `resolve_name` tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ResolveNameInput {
    /// Name to resolve.
    pub input: String,
    /// Known names, in priority order.
    pub candidates: Vec<String>,
    /// Maximum edit distance for a match (defaults to the server setting).
    pub threshold: Option<usize>,
    /// Maximum suggestions when nothing matches (defaults to the server setting).
    pub max_suggestions: Option<usize>,
}

/// Empty input for tools without parameters.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct EmptyInput {}

/// Input parameters for the `list_documents` tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ListDocumentsInput {
    /// Category name; approximate names are resolved.
    pub category: String,
}

/// Input parameters for the `get_document` tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GetDocumentInput {
    /// Category name; approximate names are resolved.
    pub category: String,
    /// Document name without extension; approximate names are resolved.
    pub document: String,
}

/// Input parameters for the `list_issues` tool.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct ListIssuesInput {
    /// `open` (default), `closed` or `all`.
    pub state: Option<String>,
    /// Labels that must all be present.
    pub labels: Option<Vec<String>>,
    /// Maximum results (default 30, max 100).
    pub limit: Option<usize>,
}

/// Input parameters for the `get_issue` tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GetIssueInput {
    /// Issue number.
    pub number: u64,
    /// Include the comment thread.
    pub include_comments: Option<bool>,
}

/// Input parameters for the `search_issues` tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SearchIssuesInput {
    /// Free-text query.
    pub query: String,
    /// `open` (default), `closed` or `all`.
    pub state: Option<String>,
    /// Labels that must all be present.
    pub labels: Option<Vec<String>>,
    /// Maximum results (default 30, max 100).
    pub limit: Option<usize>,
}

/// Output payload for the `list_categories` tool and resource.
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResult {
    /// Categories sorted by name.
    pub categories: Vec<Category>,
    /// Number of categories.
    pub total: usize,
}

/// Output payload for issue listings and searches.
#[derive(Debug, Clone, Serialize)]
pub struct IssuesResult {
    /// Matching issues.
    pub issues: Vec<Issue>,
    /// Number of issues returned.
    pub total: usize,
}
