//! Tree-walking evaluation of compiled conditionals.
//!
//! Evaluation reads live data through value providers on every call and
//! never touches the tree itself, so one compiled conditional can be
//! evaluated once per frame for its whole lifetime.

use crate::ast::{CompareMode, Comparison, Conditional};

/// Evaluates a conditional against the current provider state.
///
/// # Examples
///
/// ```
/// use hud_conditionals::ast::Conditional;
/// use hud_conditionals::evaluator::evaluate;
///
/// let tree = Conditional::Or(vec![Conditional::Literal(false), Conditional::Literal(true)]);
/// assert!(evaluate(&tree));
/// ```
pub fn evaluate(conditional: &Conditional) -> bool {
    match conditional {
        Conditional::Literal(b) => *b,
        Conditional::Variable(provider) => provider.as_boolean(),
        Conditional::Comparison(comparison) => compare(comparison),
        Conditional::And(children) => children.iter().all(evaluate),
        Conditional::Or(children) => children.iter().any(evaluate),
    }
}

fn compare(comparison: &Comparison) -> bool {
    let left = comparison.left.provider();
    let right = comparison.right.provider();

    let ordering = match comparison.mode() {
        CompareMode::Boolean => Some(left.as_boolean().cmp(&right.as_boolean())),
        CompareMode::Number => left.as_number().partial_cmp(&right.as_number()),
        CompareMode::String => Some(left.as_string().as_ref().cmp(right.as_string().as_ref())),
    };
    comparison.op.accepts(ordering)
}

impl Conditional {
    /// Shorthand for [`evaluate`].
    pub fn value(&self) -> bool {
        evaluate(self)
    }
}
