use std::cmp::Ordering;
use std::fmt;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Less than (`<`)
    LessThan,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    GreaterThan,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal (`=`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,
}

impl CompareOp {
    /// Whether an ordering between two operands satisfies this operator.
    ///
    /// `None` (unordered, e.g. a NaN operand) only satisfies `!=`.
    pub fn accepts(self, ordering: Option<Ordering>) -> bool {
        match ordering {
            None => self == CompareOp::NotEqual,
            Some(ord) => match self {
                CompareOp::LessThan => ord == Ordering::Less,
                CompareOp::LessEqual => ord != Ordering::Greater,
                CompareOp::GreaterThan => ord == Ordering::Greater,
                CompareOp::GreaterEqual => ord != Ordering::Less,
                CompareOp::Equal => ord == Ordering::Equal,
                CompareOp::NotEqual => ord != Ordering::Equal,
            },
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::LessThan => "<",
            CompareOp::LessEqual => "<=",
            CompareOp::GreaterThan => ">",
            CompareOp::GreaterEqual => ">=",
            CompareOp::Equal => "=",
            CompareOp::NotEqual => "!=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
