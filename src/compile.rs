//! The single entry point that turns expression text into a [`Conditional`].
//!
//! [`Compiler::compile`] never fails: any lexing, structural or resolution
//! error is written to the trace sink and the expression becomes
//! `Literal(true)` for good. [`Compiler::try_compile`] exposes the error for
//! callers that want to report it themselves.

use thiserror::Error;

use crate::ast::Conditional;
use crate::lexer::{LexError, Lexer};
use crate::parser::{ParseError, Parser};
use crate::reducer::reduce;
use crate::resolver::{Enabled, ResolveError, VariableResolver};
use crate::trace::tree_lines;

/// Why an expression could not be compiled.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error("lex error: {0}")]
    Lex(LexError),

    #[error("structural error: {0}")]
    Parse(#[from] ParseError),

    #[error("resolution error: {0}")]
    Resolve(#[from] ResolveError),
}

impl From<LexError> for CompileError {
    fn from(e: LexError) -> Self {
        match e {
            LexError::Resolve(inner) => CompileError::Resolve(inner),
            other => CompileError::Lex(other),
        }
    }
}

/// Line sink for tree dumps and failure diagnostics.
pub trait TraceSink {
    /// Debug output, e.g. one line of a tree dump.
    fn trace(&mut self, line: &str);

    /// A compilation failure.
    fn failure(&mut self, line: &str);
}

/// Routes trace lines to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn trace(&mut self, line: &str) {
        log::debug!("{}", line);
    }

    fn failure(&mut self, line: &str) {
        log::warn!("{}", line);
    }
}

impl TraceSink for Vec<String> {
    fn trace(&mut self, line: &str) {
        self.push(line.to_string());
    }

    fn failure(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<T: TraceSink + ?Sized> TraceSink for &mut T {
    fn trace(&mut self, line: &str) {
        (**self).trace(line);
    }

    fn failure(&mut self, line: &str) {
        (**self).failure(line);
    }
}

pub struct Compiler<'a> {
    resolver: &'a dyn VariableResolver,
    sink: Box<dyn TraceSink + 'a>,
    dump_trees: bool,
}

impl<'a> Compiler<'a> {
    /// A compiler logging through [`LogSink`] with tree dumps on.
    pub fn new(resolver: &'a dyn VariableResolver) -> Self {
        Compiler {
            resolver,
            sink: Box::new(LogSink),
            dump_trees: true,
        }
    }

    pub fn with_sink(mut self, sink: impl TraceSink + 'a) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn dump_trees(mut self, enabled: bool) -> Self {
        self.dump_trees = enabled;
        self
    }

    /// Lex, reduce and parse `text`.
    pub fn try_compile(
        &self,
        text: &str,
        line: usize,
        enabled: &mut Enabled,
    ) -> Result<Conditional, CompileError> {
        let tokens = Lexer::new(text, line, self.resolver, enabled).tokenize()?;
        let tokens = reduce(tokens)?;
        Ok(Parser::new(tokens).parse()?)
    }

    /// Compile `text`, falling back to `Literal(true)` on any error.
    ///
    /// # Examples
    ///
    /// ```
    /// use hud_conditionals::compile::Compiler;
    /// use hud_conditionals::resolver::{Enabled, VariableRegistry};
    ///
    /// let registry = VariableRegistry::new();
    /// let mut compiler = Compiler::new(&registry).with_sink(Vec::<String>::new());
    /// let mut enabled = Enabled::new();
    ///
    /// assert!(!compiler.compile("3>5", 1, &mut enabled).value());
    /// // Unclosed group: falls back to true.
    /// assert!(compiler.compile("(true&false", 2, &mut enabled).value());
    /// ```
    pub fn compile(&mut self, text: &str, line: usize, enabled: &mut Enabled) -> Conditional {
        match self.try_compile(text, line, enabled) {
            Ok(conditional) => {
                if self.dump_trees {
                    self.sink.trace(&format!("Tree for conditional on line {}:", line));
                    for entry in tree_lines(&conditional) {
                        self.sink.trace(&entry);
                    }
                }
                conditional
            }
            Err(e) => {
                self.sink.failure(&format!(
                    "Conditional on line {} couldn't be parsed ({:?}): {}",
                    line, text, e
                ));
                Conditional::Literal(true)
            }
        }
    }
}
