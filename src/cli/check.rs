//! Compile and evaluate conditionals against a variables document

use super::{CliError, registry_from_json};
use crate::ast::Conditional;
use crate::compile::Compiler;
use crate::resolver::{Enabled, VariableRegistry};
use crate::trace::tree_lines;

/// Options for the check and tree commands
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The conditional expression
    pub expression: String,
    /// JSON variables document
    pub vars: Option<String>,
    /// Config line reported in diagnostics
    pub line: usize,
    /// Report compile errors instead of falling back to true
    pub strict: bool,
}

/// Result of a check operation
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    /// What the conditional evaluated to
    pub value: bool,
    /// Compilation failed and the fallback was used
    pub fell_back: bool,
    /// Data groups the expression switched on
    pub enabled: Vec<String>,
}

fn registry(options: &CheckOptions) -> Result<VariableRegistry, CliError> {
    match &options.vars {
        Some(json) => registry_from_json(json),
        None => Ok(VariableRegistry::new()),
    }
}

/// Execute a check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let registry = registry(options)?;
    let mut enabled = Enabled::new();
    let compiler = Compiler::new(&registry);

    let (conditional, fell_back) =
        match compiler.try_compile(&options.expression, options.line, &mut enabled) {
            Ok(conditional) => (conditional, false),
            Err(e) if options.strict => return Err(e.into()),
            Err(e) => {
                log::warn!(
                    "Conditional on line {} couldn't be parsed ({:?}): {}",
                    options.line,
                    options.expression,
                    e
                );
                (Conditional::Literal(true), true)
            }
        };

    Ok(CheckResult {
        value: conditional.value(),
        fell_back,
        enabled: enabled.groups().map(str::to_string).collect(),
    })
}

/// Compile and return the tree dump
pub fn execute_tree(options: &CheckOptions) -> Result<Vec<String>, CliError> {
    let registry = registry(options)?;
    let mut enabled = Enabled::new();
    let compiler = Compiler::new(&registry);
    let conditional = compiler.try_compile(&options.expression, options.line, &mut enabled)?;
    Ok(tree_lines(&conditional))
}
