//! CLI support for hud-conditionals
//!
//! Provides programmatic access to the `hudcond` commands so they can be
//! driven from tests or embedded in other tools.

mod check;
mod docs;
mod vars;

pub use check::{CheckOptions, CheckResult, execute_check, execute_tree};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use vars::registry_from_json;

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Compile error: {0}")]
    Compile(#[from] crate::CompileError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid variables document: {0}")]
    Vars(String),

    #[error("Unknown category: '{0}'\nRun 'hudcond docs' to see available categories.")]
    UnknownCategory(String),
}
