// Rust guideline compliant 2026-02-09

//! Model Context Protocol server for ghdocs.
//!
//! Exposes documentation browsing, issue lookup and the offline name
//! resolver as MCP tools and resources over stdio.

pub mod server;
pub mod types;

pub use server::{parse_log_level, run, GhdocsMcp, McpOptions, McpServerError};
