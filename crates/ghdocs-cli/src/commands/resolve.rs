// Rust guideline compliant 2026-02-06

//! Implementation of the `ghdocs resolve` command.
//!
//! Resolves a name against candidates given on the command line. Runs
//! entirely offline.

use crate::commands::Rendered;
use crate::OutputFormatter;
use anyhow::Result;
use ghdocs_core::{resolve, ResolverConfig};

/// Resolves `input` against `candidates` and formats the outcome.
///
/// `threshold` and `max_suggestions` override the configured values.
///
/// # Errors
///
/// Returns an error if the effective resolver settings are invalid.
pub fn render(
    input: &str,
    candidates: &[String],
    threshold: Option<usize>,
    max_suggestions: Option<usize>,
    base: &ResolverConfig,
    formatter: &dyn OutputFormatter,
) -> Result<Rendered> {
    let config = ResolverConfig::new(
        threshold.unwrap_or(base.threshold),
        max_suggestions.unwrap_or(base.max_suggestions),
    )?;
    let result = resolve(input, candidates, &config)?;
    Ok(Rendered::plain(formatter.format_match(input, &result)))
}

/// Runs the `resolve` command.
///
/// # Errors
///
/// Returns an error if the effective resolver settings are invalid.
pub fn execute(
    input: String,
    candidates: Vec<String>,
    threshold: Option<usize>,
    max_suggestions: Option<usize>,
    base: &ResolverConfig,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    render(&input, &candidates, threshold, max_suggestions, base, formatter)?.emit();
    Ok(())
}
