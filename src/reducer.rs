//! Collapses parenthesis markers into nested [`Token::Group`]s.
//!
//! After [`reduce`] no `OpenGroup`/`CloseGroup` is left at any depth, so the
//! parser can treat every group as a single atom.

use crate::ast::Token;
use crate::parser::ParseError;

/// Deepest parenthesis nesting accepted. Parsing, evaluation and tree
/// dumps all recurse once per level.
pub const MAX_DEPTH: usize = 64;

/// Single pass with an explicit stack of open spans.
///
/// # Examples
///
/// ```
/// use hud_conditionals::ast::Token;
/// use hud_conditionals::reducer::reduce;
///
/// let tokens = vec![
///     Token::OpenGroup,
///     Token::Boolean(true),
///     Token::CloseGroup,
/// ];
/// let reduced = reduce(tokens).unwrap();
/// assert!(matches!(reduced.as_slice(), [Token::Group(inner)] if inner.len() == 1));
/// ```
pub fn reduce(tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    let mut stack: Vec<Vec<Token>> = vec![Vec::with_capacity(tokens.len())];

    for (position, token) in tokens.into_iter().enumerate() {
        match token {
            Token::OpenGroup => {
                if stack.len() > MAX_DEPTH {
                    return Err(ParseError::TooDeep { limit: MAX_DEPTH });
                }
                stack.push(Vec::new());
            }
            Token::CloseGroup => {
                if stack.len() == 1 {
                    return Err(ParseError::UnmatchedClose { position });
                }
                let inner = stack.pop().unwrap_or_default();
                if let Some(outer) = stack.last_mut() {
                    outer.push(Token::Group(inner));
                }
            }
            other => {
                if let Some(current) = stack.last_mut() {
                    current.push(other);
                }
            }
        }
    }

    if stack.len() > 1 {
        return Err(ParseError::UnmatchedOpen {
            depth: stack.len() - 1,
        });
    }
    Ok(stack.pop().unwrap_or_default())
}
