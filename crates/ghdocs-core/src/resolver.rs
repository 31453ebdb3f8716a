// Rust guideline compliant 2026-02-06

//! Approximate identifier resolution.
//!
//! Maps a user-supplied name onto one of a list of known names. The policy
//! runs in three stages and stops at the first that succeeds:
//!
//! - Exact: the first candidate whose normalized form equals the normalized
//!   input wins with a score of 1.
//! - Fuzzy: candidates are stable-sorted by edit distance; the head wins if
//!   it is within the threshold.
//! - No match: the closest candidates are returned as suggestions.
//!
//! Resolution is a pure function of its arguments and keeps no state.

use crate::distance::distance;
use crate::normalize::normalize;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Tuning knobs for [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Maximum edit distance accepted for a fuzzy match. Must be positive.
    #[serde(default = "default_threshold")]
    pub threshold: usize,

    /// Number of suggestions returned when nothing matched.
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_threshold() -> usize {
    3
}

fn default_max_suggestions() -> usize {
    3
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl ResolverConfig {
    /// Creates a validated resolver configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is zero.
    pub fn new(threshold: usize, max_suggestions: usize) -> Result<Self> {
        let config = Self {
            threshold,
            max_suggestions,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(Error::InvalidConfig(
                "resolver threshold must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The chosen candidate, as originally supplied.
    #[serde(rename = "match")]
    pub matched: Option<String>,
    /// Confidence in `[0, 1]`. 1 for exact matches, 0 when nothing matched.
    pub score: f64,
    /// Alternative candidates, closest first. Never contains `matched`.
    pub suggestions: Vec<String>,
}

impl MatchResult {
    fn no_match(suggestions: Vec<String>) -> Self {
        Self {
            matched: None,
            score: 0.0,
            suggestions,
        }
    }

    /// Returns whether the match came from normalized equality.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.matched.is_some() && self.score >= 1.0
    }
}

struct Candidate<'a> {
    original: &'a str,
    normalized: String,
}

/// Resolves `input` against an ordered pool of candidate names.
///
/// Ties are broken by pool order, so the first of two equally close
/// candidates wins. Duplicates are allowed.
///
/// When a fuzzy match is found, every other candidate within the threshold
/// is returned as a suggestion, regardless of `max_suggestions`. When nothing
/// is within the threshold, the `max_suggestions` closest candidates are
/// returned instead.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if `config` is invalid. This is checked
/// before any matching work. Data never causes an error.
///
/// # Examples
///
/// ```
/// use ghdocs_core::{resolve, ResolverConfig};
///
/// let result = resolve("reference", &["04_reference", "02_features"], &ResolverConfig::default())
///     .unwrap();
/// assert_eq!(result.matched.as_deref(), Some("04_reference"));
/// assert_eq!(result.score, 1.0);
/// ```
pub fn resolve<S: AsRef<str>>(
    input: &str,
    candidates: &[S],
    config: &ResolverConfig,
) -> Result<MatchResult> {
    config.validate()?;

    if candidates.is_empty() {
        return Ok(MatchResult::no_match(Vec::new()));
    }

    let target = normalize(input);
    let pool: Vec<Candidate<'_>> = candidates
        .iter()
        .map(|candidate| {
            let original = candidate.as_ref();
            Candidate {
                original,
                normalized: normalize(original),
            }
        })
        .collect();

    if let Some(exact) = pool.iter().find(|c| c.normalized == target) {
        return Ok(MatchResult {
            matched: Some(exact.original.to_string()),
            score: 1.0,
            suggestions: Vec::new(),
        });
    }

    let mut ranked: Vec<(usize, &Candidate<'_>)> = pool
        .iter()
        .map(|candidate| (distance(&target, &candidate.normalized), candidate))
        .collect();
    // sort_by_key is stable: equal distances keep pool order
    ranked.sort_by_key(|(dist, _)| *dist);

    let (best_distance, best) = ranked[0];
    if best_distance > config.threshold {
        let suggestions = ranked
            .iter()
            .take(config.max_suggestions)
            .map(|(_, c)| c.original.to_string())
            .collect();
        return Ok(MatchResult::no_match(suggestions));
    }

    let suggestions = ranked[1..]
        .iter()
        .filter(|(dist, c)| *dist <= config.threshold && c.original != best.original)
        .map(|(_, c)| c.original.to_string())
        .collect();

    Ok(MatchResult {
        matched: Some(best.original.to_string()),
        score: similarity(best_distance, &target, &best.normalized),
        suggestions,
    })
}

fn similarity(dist: usize, a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - dist as f64 / longest as f64
}
