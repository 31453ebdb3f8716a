// Rust guideline compliant 2026-02-09

//! Shared application services for ghdocs.
//!
//! This crate sits between the pure resolver in `ghdocs-core` and the
//! user-facing MCP server and CLI. It provides the remote source
//! abstraction and its GitHub client, documentation and issue services
//! with approximate name lookup, and standardized response envelopes.

pub mod content;
pub mod docs;
pub mod error;
pub mod github;
pub mod issues;
pub mod lookup;
pub mod pagination;
pub mod response;
pub mod source;

pub use content::{decode_base64_content, decode_content};
pub use docs::{Document, DocumentListing, DocsService};
pub use error::{format_suggestions, AppError, ErrorCode, Result};
pub use github::{build_search_query, GithubClient};
pub use issues::{IssueDetail, IssuesService};
pub use lookup::{lookup_name, Resolution};
pub use pagination::{has_next_page, parse_link_header, LinkHeader, Pager};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use source::{parse_state, DocSource, IssueQuery, DEFAULT_ISSUE_LIMIT, MAX_ISSUE_LIMIT};
