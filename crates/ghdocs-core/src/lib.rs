// Rust guideline compliant 2026-02-06

//! ghdocs Core Library
//!
//! This crate provides the foundational components for the ghdocs
//! documentation and issue retrieval proxy:
//! - Name normalization (case, separators, numeric ordering prefixes)
//! - Levenshtein edit distance
//! - Approximate identifier resolution with suggestions
//! - Data models (categories, documents, issues)
//! - Configuration loading and validation
//! - Error types and result handling
//!
//! Everything here is synchronous and free of network access.

pub mod config;
pub mod distance;
pub mod error;
pub mod models;
pub mod normalize;
pub mod resolver;

pub use config::{Config, OutputFormat};
pub use distance::distance;
pub use error::{Error, Result};
pub use models::{
    Category, ContentEntry, DocEntry, EntryKind, FileContent, Issue, IssueComment, IssueState,
    Label, User,
};
pub use normalize::normalize;
pub use resolver::{resolve, MatchResult, ResolverConfig};
