// Rust guideline compliant 2026-02-06

//! ghdocs CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod context;
pub mod output;

pub use context::AppContext;
pub use output::{create_formatter, OutputFormatter};
