// Rust guideline compliant 2026-02-06

//! Implementation of the `ghdocs categories` command.

use crate::commands::Rendered;
use crate::{AppContext, OutputFormatter};
use anyhow::Result;
use ghdocs_app::{DocSource, DocsService};

/// Lists documentation categories.
///
/// # Errors
///
/// Returns an error if the docs root cannot be listed.
pub async fn render<S: DocSource>(
    service: &DocsService<S>,
    formatter: &dyn OutputFormatter,
) -> Result<Rendered> {
    let categories = service.list_categories().await?;
    Ok(Rendered::plain(formatter.format_categories(&categories)))
}

/// Runs the `categories` command.
///
/// # Errors
///
/// Returns an error if the docs root cannot be listed.
pub fn execute(ctx: &AppContext, formatter: &dyn OutputFormatter) -> Result<()> {
    let service = ctx.docs();
    ctx.block_on(render(&service, formatter))?.emit();
    Ok(())
}
