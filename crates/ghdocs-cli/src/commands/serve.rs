// Rust guideline compliant 2026-02-06

//! Implementation of the `ghdocs serve` command.

use anyhow::Result;
use ghdocs_mcp::{run, McpOptions};
use std::path::PathBuf;

/// Serves the MCP tools over stdio until the client disconnects.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the server fails.
pub fn execute(
    config_path: Option<PathBuf>,
    log_level: String,
    log_file: Option<PathBuf>,
) -> Result<()> {
    run(McpOptions {
        config_path,
        log_level,
        log_file,
    })?;
    Ok(())
}
