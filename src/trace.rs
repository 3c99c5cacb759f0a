//! Indented dump of a compiled tree, one node per line.
//!
//! ```text
//! Or
//!   And
//!     Variable: number {health}
//!     Literal: true
//!   Comparison: >= (number)
//!     left: Variable: number {level}
//!     right: 30
//! ```

use crate::ast::{CompareMode, Conditional, ValueSource};
use crate::value::format_number;

const INDENT: &str = "  ";

/// Renders `conditional` into lines, two spaces of indent per depth.
pub fn tree_lines(conditional: &Conditional) -> Vec<String> {
    let mut lines = Vec::new();
    write_node(conditional, 0, &mut lines);
    lines
}

fn write_node(conditional: &Conditional, depth: usize, lines: &mut Vec<String>) {
    let pad = INDENT.repeat(depth);
    match conditional {
        Conditional::Literal(b) => lines.push(format!("{pad}Literal: {b}")),
        Conditional::Variable(provider) => lines.push(format!("{pad}Variable: {provider:?}")),
        Conditional::Comparison(comparison) => {
            let mode = match comparison.mode() {
                CompareMode::Boolean => "boolean",
                CompareMode::Number => "number",
                CompareMode::String => "string",
            };
            lines.push(format!("{pad}Comparison: {} ({mode})", comparison.op));
            lines.push(format!("{pad}{INDENT}left: {}", describe(&comparison.left)));
            lines.push(format!("{pad}{INDENT}right: {}", describe(&comparison.right)));
        }
        Conditional::And(children) | Conditional::Or(children) => {
            let name = if matches!(conditional, Conditional::And(_)) { "And" } else { "Or" };
            lines.push(format!("{pad}{name}"));
            for child in children {
                write_node(child, depth + 1, lines);
            }
        }
    }
}

fn describe(source: &ValueSource) -> String {
    use crate::value::Constant;
    match source {
        ValueSource::Provider(provider) => format!("Variable: {provider:?}"),
        ValueSource::Constant(Constant::String(s)) => format!("{s:?}"),
        ValueSource::Constant(Constant::Number(n)) => format_number(*n),
        ValueSource::Constant(Constant::Boolean(b)) => b.to_string(),
    }
}
