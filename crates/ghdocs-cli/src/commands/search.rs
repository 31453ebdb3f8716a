// Rust guideline compliant 2026-02-06

//! Implementation of the `ghdocs search` command.

use crate::commands::issues::build_query;
use crate::commands::Rendered;
use crate::{AppContext, OutputFormatter};
use anyhow::Result;
use ghdocs_app::{DocSource, IssueQuery, IssuesService};

/// Searches issues and formats the hits.
///
/// # Errors
///
/// Returns an error for a blank query or a failed search.
pub async fn render<S: DocSource>(
    service: &IssuesService<S>,
    text: &str,
    query: &IssueQuery,
    formatter: &dyn OutputFormatter,
) -> Result<Rendered> {
    let issues = service.search_issues(text, query).await?;
    Ok(Rendered::plain(formatter.format_issues(&issues)))
}

/// Runs the `search` command.
///
/// # Errors
///
/// Returns an error for invalid filters, a blank query or a failed search.
pub fn execute(
    ctx: &AppContext,
    text: String,
    state: Option<String>,
    labels: Vec<String>,
    limit: Option<usize>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let query = build_query(state.as_deref(), labels, limit)?;
    let service = ctx.issues();
    ctx.block_on(render(&service, &text, &query, formatter))?
        .emit();
    Ok(())
}
