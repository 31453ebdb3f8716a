// Rust guideline compliant 2026-02-06

//! Implementation of the `ghdocs show` command.
//!
//! Prints a document. Both the category and the document name may be
//! approximate.

use crate::commands::Rendered;
use crate::{AppContext, OutputFormatter};
use anyhow::Result;
use ghdocs_app::{DocSource, DocsService};

/// Fetches and formats a document.
///
/// # Errors
///
/// Returns an error if either name does not resolve or the file cannot be
/// fetched.
pub async fn render<S: DocSource>(
    service: &DocsService<S>,
    category: &str,
    document: &str,
    formatter: &dyn OutputFormatter,
) -> Result<Rendered> {
    let document = service.get_document(category, document).await?;
    Ok(Rendered {
        output: formatter.format_document(&document),
        notices: formatter.format_notices(&document.notices()),
    })
}

/// Runs the `show` command.
///
/// # Errors
///
/// Returns an error if either name does not resolve or the file cannot be
/// fetched.
pub fn execute(
    ctx: &AppContext,
    category: String,
    document: String,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let service = ctx.docs();
    ctx.block_on(render(&service, &category, &document, formatter))?
        .emit();
    Ok(())
}
