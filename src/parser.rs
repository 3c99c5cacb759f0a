use thiserror::Error;

use crate::ast::{Comparison, Conditional, Token, ValueSource};
use crate::value::Constant;

/// Structural errors: the token sequence does not form a conditional.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("wrong number of tokens: expected 1 or 3, got {0}")]
    WrongTokenCount(usize),

    #[error("unexpected {found} where {expected} was expected")]
    UnexpectedToken {
        found: &'static str,
        expected: &'static str,
    },

    #[error("')' at token {position} has no matching '('")]
    UnmatchedClose { position: usize },

    #[error("{depth} '(' left unclosed")]
    UnmatchedOpen { depth: usize },

    #[error("groups nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Builds a [`Conditional`] from a reduced token sequence.
///
/// Precedence is handled by splitting: first on `|`, then on `&`; whatever
/// remains must be a single atom or a `left op right` comparison.
pub struct Parser {
    tokens: Vec<Token>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens }
    }

    pub fn parse(self) -> Result<Conditional, ParseError> {
        parse_or(self.tokens)
    }
}

fn split(tokens: Vec<Token>, on: fn(&Token) -> bool) -> Vec<Vec<Token>> {
    let mut sections = Vec::new();
    let mut current = Vec::new();
    for token in tokens {
        if on(&token) {
            sections.push(std::mem::take(&mut current));
        } else {
            current.push(token);
        }
    }
    sections.push(current);
    sections
}

/// Parse each section and wrap in `combine` unless there is only one.
fn parse_sections(
    sections: Vec<Vec<Token>>,
    parse: fn(Vec<Token>) -> Result<Conditional, ParseError>,
    combine: fn(Vec<Conditional>) -> Conditional,
) -> Result<Conditional, ParseError> {
    let mut children = sections
        .into_iter()
        .map(parse)
        .collect::<Result<Vec<_>, _>>()?;

    if children.len() == 1 {
        Ok(children.remove(0))
    } else {
        Ok(combine(children))
    }
}

fn parse_or(tokens: Vec<Token>) -> Result<Conditional, ParseError> {
    let sections = split(tokens, |t| matches!(t, Token::Or));
    parse_sections(sections, parse_and, Conditional::Or)
}

fn parse_and(tokens: Vec<Token>) -> Result<Conditional, ParseError> {
    let sections = split(tokens, |t| matches!(t, Token::And));
    parse_sections(sections, parse_comparison, Conditional::And)
}

fn parse_comparison(tokens: Vec<Token>) -> Result<Conditional, ParseError> {
    match tokens.len() {
        0 => return Err(ParseError::Empty),
        1 | 3 => {}
        n => return Err(ParseError::WrongTokenCount(n)),
    }

    let mut tokens = tokens.into_iter();
    let first = tokens.next().ok_or(ParseError::Empty)?;

    let Some(middle) = tokens.next() else {
        return parse_atom(first);
    };
    let op = match middle {
        Token::Comparison(op) => op,
        other => {
            return Err(ParseError::UnexpectedToken {
                found: other.kind(),
                expected: "comparison",
            });
        }
    };
    let last = tokens.next().ok_or(ParseError::WrongTokenCount(2))?;

    let mut flags = LiteralFlags::default();
    let left = operand(first, &mut flags)?;
    let right = operand(last, &mut flags)?;

    Ok(Conditional::Comparison(Comparison {
        left,
        right,
        op,
        check_bool: flags.boolean,
        check_num: flags.number,
    }))
}

fn parse_atom(token: Token) -> Result<Conditional, ParseError> {
    match token {
        Token::Group(inner) => parse_or(inner),
        Token::Boolean(b) => Ok(Conditional::Literal(b)),
        Token::Variable(provider) => Ok(Conditional::Variable(provider)),
        other => Err(ParseError::UnexpectedToken {
            found: other.kind(),
            expected: "group, boolean or variable",
        }),
    }
}

/// Literal kinds seen on either side of a comparison.
#[derive(Default)]
struct LiteralFlags {
    boolean: bool,
    number: bool,
}

fn operand(token: Token, flags: &mut LiteralFlags) -> Result<ValueSource, ParseError> {
    match token {
        Token::Variable(provider) => Ok(ValueSource::Provider(provider)),
        Token::String(s) => Ok(ValueSource::Constant(Constant::String(s))),
        Token::Number(n) => {
            flags.number = true;
            Ok(ValueSource::Constant(Constant::Number(n)))
        }
        Token::Boolean(b) => {
            flags.boolean = true;
            Ok(ValueSource::Constant(Constant::Boolean(b)))
        }
        other => Err(ParseError::UnexpectedToken {
            found: other.kind(),
            expected: "comparison operand",
        }),
    }
}
