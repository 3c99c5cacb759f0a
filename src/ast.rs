//! # Conditional expression syntax tree
//!
//! Conditionals are small boolean expressions embedded in display templates
//! and re-evaluated every frame:
//!
//! ```text
//! (health < 5 | hunger <= 2) & dimension = "nether"
//! ```
//!
//! - **[tokens]** - Lexical tokens, including reduced parenthesis groups
//! - **[operators]** - The six comparison operators
//! - **[conditional]** - The compiled tree
//!
//! ## Precedence
//!
//! `|` binds loosest, then `&`, then comparisons. Parentheses group.
//!
//! ## Literals
//!
//! - Strings: `"text"` (no escapes)
//! - Numbers: `12`, `0.25` (no sign, no exponent)
//! - Booleans: `true`, `false`
//! - Variables: lowercase letters, `_` and `:`, resolved by the host
pub mod conditional;
pub mod operators;
pub mod tokens;

pub use conditional::{CompareMode, Comparison, Conditional, ValueSource};
pub use operators::CompareOp;
pub use tokens::Token;
