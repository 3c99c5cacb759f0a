pub mod ast;
pub mod compile;
pub mod element;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod reducer;
pub mod resolver;
pub mod trace;
pub mod value;

pub mod cli;

pub use ast::{CompareOp, Conditional, Token};
pub use compile::{CompileError, Compiler, LogSink, TraceSink};
pub use element::ConditionalElement;
pub use evaluator::evaluate;
pub use lexer::{LexError, Lexer};
pub use parser::{ParseError, Parser};
pub use resolver::{Enabled, ResolveError, VariableRegistry, VariableResolver};
pub use value::{Constant, ValueProvider};
