// Rust guideline compliant 2026-02-06

//! Command implementations for the ghdocs CLI.
//!
//! Remote commands split into an async `render` step, generic over the
//! source so tests can drive it in memory, and a sync `execute` step that
//! runs it on the [`crate::AppContext`] runtime and prints the result.

pub mod categories;
pub mod docs;
pub mod issue;
pub mod issues;
pub mod resolve;
pub mod search;
pub mod serve;
pub mod show;

/// Output of a command, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Main output for stdout.
    pub output: String,
    /// Lookup notes for stderr.
    pub notices: Option<String>,
}

impl Rendered {
    /// Creates output without notices.
    pub fn plain(output: String) -> Self {
        Self {
            output,
            notices: None,
        }
    }

    /// Prints the output to stdout and the notices to stderr.
    pub fn emit(&self) {
        if let Some(notices) = &self.notices {
            eprintln!("{}", notices);
        }
        println!("{}", self.output.trim_end_matches('\n'));
    }
}
