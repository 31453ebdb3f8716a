// Rust guideline compliant 2026-02-06

//! Implementation of the `ghdocs docs` command.
//!
//! Lists the documents of a category. The category name may be
//! approximate; a note on stderr reports which category was used.

use crate::commands::Rendered;
use crate::{AppContext, OutputFormatter};
use anyhow::Result;
use ghdocs_app::{DocSource, DocsService};

/// Lists the documents of `category`.
///
/// # Errors
///
/// Returns an error if the category does not resolve or cannot be listed.
pub async fn render<S: DocSource>(
    service: &DocsService<S>,
    category: &str,
    formatter: &dyn OutputFormatter,
) -> Result<Rendered> {
    let listing = service.list_documents(category).await?;
    Ok(Rendered {
        output: formatter.format_documents(&listing),
        notices: formatter.format_notices(&listing.notices()),
    })
}

/// Runs the `docs` command.
///
/// # Errors
///
/// Returns an error if the category does not resolve or cannot be listed.
pub fn execute(ctx: &AppContext, category: String, formatter: &dyn OutputFormatter) -> Result<()> {
    let service = ctx.docs();
    ctx.block_on(render(&service, &category, formatter))?.emit();
    Ok(())
}
