use std::rc::Rc;

use crate::ast::CompareOp;
use crate::value::{Constant, ValueProvider};

/// Compiled boolean expression.
///
/// Built once by the parser and never mutated afterwards. `And` and `Or`
/// always hold at least two children.
#[derive(Debug, Clone)]
pub enum Conditional {
    /// `true` / `false`
    Literal(bool),

    /// Bare variable, true when its boolean view is
    Variable(Rc<dyn ValueProvider>),

    /// `left op right`
    Comparison(Comparison),

    /// `a & b & ...`
    And(Vec<Conditional>),

    /// `a | b | ...`
    Or(Vec<Conditional>),
}

/// Which operand view a comparison reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareMode {
    Boolean,
    Number,
    String,
}

#[derive(Debug, Clone)]
pub struct Comparison {
    pub left: ValueSource,
    pub right: ValueSource,
    pub op: CompareOp,
    /// A boolean literal appeared on either side
    pub check_bool: bool,
    /// A number literal appeared on either side
    pub check_num: bool,
}

impl Comparison {
    /// Booleans win over numbers, strings are the default.
    pub fn mode(&self) -> CompareMode {
        if self.check_bool {
            CompareMode::Boolean
        } else if self.check_num {
            CompareMode::Number
        } else {
            CompareMode::String
        }
    }
}

/// Comparison operand: live data or a literal.
#[derive(Debug, Clone)]
pub enum ValueSource {
    Provider(Rc<dyn ValueProvider>),
    Constant(Constant),
}

impl ValueSource {
    pub fn provider(&self) -> &dyn ValueProvider {
        match self {
            ValueSource::Provider(p) => p.as_ref(),
            ValueSource::Constant(c) => c,
        }
    }
}
