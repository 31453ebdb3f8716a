// Rust guideline compliant 2026-02-06

//! Implementation of the `ghdocs issues` command.

use crate::commands::Rendered;
use crate::{AppContext, OutputFormatter};
use anyhow::{bail, Result};
use ghdocs_app::{parse_state, DocSource, IssueQuery, IssuesService, MAX_ISSUE_LIMIT};

/// Builds an issue query from command-line filters.
///
/// # Errors
///
/// Returns an error for an unknown state or a limit outside `1..=100`.
pub fn build_query(
    state: Option<&str>,
    labels: Vec<String>,
    limit: Option<usize>,
) -> Result<IssueQuery> {
    let mut query = IssueQuery {
        labels,
        ..IssueQuery::default()
    };
    if let Some(state) = state {
        query.state = parse_state(state)?;
    }
    if let Some(limit) = limit {
        if limit == 0 || limit > MAX_ISSUE_LIMIT {
            bail!("--limit must be between 1 and {}", MAX_ISSUE_LIMIT);
        }
        query.limit = limit;
    }
    Ok(query)
}

/// Lists issues matching `query`.
///
/// # Errors
///
/// Returns an error if the remote listing fails.
pub async fn render<S: DocSource>(
    service: &IssuesService<S>,
    query: &IssueQuery,
    formatter: &dyn OutputFormatter,
) -> Result<Rendered> {
    let issues = service.list_issues(query).await?;
    Ok(Rendered::plain(formatter.format_issues(&issues)))
}

/// Runs the `issues` command.
///
/// # Errors
///
/// Returns an error if the filters are invalid or the listing fails.
pub fn execute(
    ctx: &AppContext,
    state: Option<String>,
    labels: Vec<String>,
    limit: Option<usize>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let query = build_query(state.as_deref(), labels, limit)?;
    let service = ctx.issues();
    ctx.block_on(render(&service, &query, formatter))?.emit();
    Ok(())
}
