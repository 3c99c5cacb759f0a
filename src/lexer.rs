use thiserror::Error;

use crate::ast::{CompareOp, Token};
use crate::resolver::{Enabled, ResolveError, VariableResolver};

/// Errors raised while tokenizing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("expected '=' after '!' at position {position}")]
    LoneBang { position: usize },

    #[error("invalid number {text:?} at position {position}")]
    InvalidNumber { text: String, position: usize },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

pub struct Lexer<'a> {
    input: Vec<char>,
    position: usize,
    line: usize,
    resolver: &'a dyn VariableResolver,
    enabled: &'a mut Enabled,
}

fn is_number_char(ch: char) -> bool {
    ch == '.' || ch.is_ascii_digit()
}

fn is_variable_char(ch: char) -> bool {
    ch == ':' || ch == '_' || ch.is_ascii_lowercase()
}

impl<'a> Lexer<'a> {
    /// `line` is the config line the expression came from; it is passed
    /// along to the resolver for diagnostics.
    pub fn new(
        input: &str,
        line: usize,
        resolver: &'a dyn VariableResolver,
        enabled: &'a mut Enabled,
    ) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            line,
            resolver,
            enabled,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn starts_with(&self, word: &str) -> bool {
        let mut chars = self.input[self.position..].iter();
        word.chars().all(|w| chars.next() == Some(&w))
    }

    fn read_while(&mut self, accept: fn(char) -> bool) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if !accept(ch) {
                break;
            }
            result.push(ch);
            self.advance();
        }
        result
    }

    /// Reads up to the closing quote. A missing closing quote just ends the string.
    fn read_string(&mut self) -> String {
        self.advance(); // opening quote
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            self.advance();
            if ch == '"' {
                break;
            }
            result.push(ch);
        }
        result
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        let text = self.read_while(is_number_char);
        text.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| LexError::InvalidNumber {
                text,
                position: start,
            })
    }

    fn read_variable(&mut self) -> Result<Token, LexError> {
        let name = self.read_while(is_variable_char);
        let reference = format!("{{{}}}", name);
        let provider = self.resolver.resolve(&reference, self.line, &mut *self.enabled)?;
        Ok(Token::Variable(provider))
    }

    fn comparison(&mut self, bare: CompareOp, with_equals: CompareOp) -> Token {
        if self.peek_char(1) == Some('=') {
            self.advance();
            self.advance();
            Token::Comparison(with_equals)
        } else {
            self.advance();
            Token::Comparison(bare)
        }
    }

    /// Next token, `None` at end of input. Unknown characters are skipped.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            let Some(ch) = self.current_char() else {
                return Ok(None);
            };

            let token = match ch {
                '(' => {
                    self.advance();
                    Token::OpenGroup
                }
                ')' => {
                    self.advance();
                    Token::CloseGroup
                }
                '|' => {
                    self.advance();
                    Token::Or
                }
                '&' => {
                    self.advance();
                    Token::And
                }
                '=' => {
                    self.advance();
                    Token::Comparison(CompareOp::Equal)
                }
                '!' => {
                    if self.peek_char(1) != Some('=') {
                        return Err(LexError::LoneBang {
                            position: self.position,
                        });
                    }
                    self.advance();
                    self.advance();
                    Token::Comparison(CompareOp::NotEqual)
                }
                '>' => self.comparison(CompareOp::GreaterThan, CompareOp::GreaterEqual),
                '<' => self.comparison(CompareOp::LessThan, CompareOp::LessEqual),
                'f' if self.starts_with("false") => {
                    self.position += 5;
                    Token::Boolean(false)
                }
                't' if self.starts_with("true") => {
                    self.position += 4;
                    Token::Boolean(true)
                }
                '"' => Token::String(self.read_string()),
                c if is_number_char(c) => self.read_number()?,
                c if is_variable_char(c) => self.read_variable()?,
                _ => {
                    self.advance();
                    continue;
                }
            };
            return Ok(Some(token));
        }
    }

    /// Tokenize the whole input.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}
