use std::rc::Rc;

use crate::ast::CompareOp;
use crate::value::ValueProvider;

/// Lexical token.
///
/// `Group` never comes out of the lexer; the reducer builds it from a
/// matched `OpenGroup`/`CloseGroup` pair.
#[derive(Debug, Clone)]
pub enum Token {
    // Grouping
    /// `(`
    OpenGroup,

    /// `)`
    CloseGroup,

    /// A fully reduced parenthesised span, markers excluded
    ///
    /// # Examples
    /// ```text
    /// (a | b)
    /// ```
    Group(Vec<Token>),

    // Logical
    /// `|`
    Or,

    /// `&`
    And,

    /// One of `<` `<=` `>` `>=` `=` `!=`
    Comparison(CompareOp),

    // Literals
    /// Run of digits and `.`
    ///
    /// # Examples
    /// ```text
    /// 20
    /// 0.5
    /// ```
    Number(f64),

    /// Text between double quotes, no escapes
    ///
    /// # Examples
    /// ```text
    /// "nether"
    /// ```
    String(String),

    /// `true` or `false`
    Boolean(bool),

    /// Identifier resolved to a live provider
    ///
    /// # Examples
    /// ```text
    /// health
    /// dimension_id
    /// ```
    Variable(Rc<dyn ValueProvider>),
}

impl Token {
    /// Short name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::OpenGroup => "'('",
            Token::CloseGroup => "')'",
            Token::Group(_) => "group",
            Token::Or => "'|'",
            Token::And => "'&'",
            Token::Comparison(_) => "comparison",
            Token::Number(_) => "number",
            Token::String(_) => "string",
            Token::Boolean(_) => "boolean",
            Token::Variable(_) => "variable",
        }
    }
}
