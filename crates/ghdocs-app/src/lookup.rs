// Rust guideline compliant 2026-02-09

//! Name lookup on top of the approximate resolver.

use crate::error::{AppError, Result};
use ghdocs_core::{resolve, ResolverConfig};
use serde::Serialize;

/// How a requested name was mapped onto a known name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    /// Name as requested by the caller.
    pub requested: String,
    /// Known name that was chosen.
    pub matched: String,
    /// Resolver confidence in `[0, 1]`.
    pub score: f64,
    /// Other close names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl Resolution {
    /// Returns whether the name matched after normalization alone.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.score >= 1.0
    }

    /// Returns a note for inexact matches, `None` for exact ones.
    #[must_use]
    pub fn notice(&self, kind: &str) -> Option<String> {
        if self.is_exact() {
            return None;
        }
        Some(format!(
            "{} '{}' resolved to '{}' (score {:.2})",
            kind, self.requested, self.matched, self.score
        ))
    }
}

/// Resolves `requested` among `known`, escalating a miss to [`AppError::NotFound`].
///
/// # Arguments
///
/// * `kind` - Entity kind used in messages (`Category`, `Document`)
/// * `requested` - Name supplied by the caller
/// * `known` - Candidate names in remote order
/// * `config` - Resolver settings
///
/// # Errors
///
/// Returns [`AppError::NotFound`] carrying the suggestions when nothing
/// matched, or a configuration error if `config` is invalid.
pub fn lookup_name<S: AsRef<str>>(
    kind: &str,
    requested: &str,
    known: &[S],
    config: &ResolverConfig,
) -> Result<Resolution> {
    let result = resolve(requested, known, config)?;
    match result.matched {
        Some(matched) => {
            if result.score < 1.0 {
                tracing::info!(
                    kind,
                    requested,
                    matched = %matched,
                    score = result.score,
                    "fuzzy name match"
                );
            }
            Ok(Resolution {
                requested: requested.to_string(),
                matched,
                score: result.score,
                suggestions: result.suggestions,
            })
        }
        None => Err(AppError::not_found(kind, requested, result.suggestions)),
    }
}
