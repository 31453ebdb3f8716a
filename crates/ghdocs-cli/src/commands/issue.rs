// Rust guideline compliant 2026-02-06

//! Implementation of the `ghdocs issue` command.

use crate::commands::Rendered;
use crate::{AppContext, OutputFormatter};
use anyhow::Result;
use ghdocs_app::{DocSource, IssuesService};

/// Fetches and formats one issue.
///
/// # Errors
///
/// Returns an error if the issue cannot be fetched.
pub async fn render<S: DocSource>(
    service: &IssuesService<S>,
    number: u64,
    include_comments: bool,
    formatter: &dyn OutputFormatter,
) -> Result<Rendered> {
    let detail = service.get_issue(number, include_comments).await?;
    Ok(Rendered::plain(formatter.format_issue(&detail)))
}

/// Runs the `issue` command.
///
/// # Errors
///
/// Returns an error if the issue cannot be fetched.
pub fn execute(
    ctx: &AppContext,
    number: u64,
    include_comments: bool,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let service = ctx.issues();
    ctx.block_on(render(&service, number, include_comments, formatter))?
        .emit();
    Ok(())
}
