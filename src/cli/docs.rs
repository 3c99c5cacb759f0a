//! Documentation content for the hudcond CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Literals,
    Variables,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "literals" | "literal" | "types" => Some(Self::Literals),
            "variables" | "variable" | "vars" => Some(Self::Variables),
            "errors" | "error" | "fallback" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"HUDCOND DOCUMENTATION

Conditionals are boolean expressions embedded in display templates. The
display re-evaluates them every frame and shows one of two branches.

DOCUMENTATION CATEGORIES

  syntax            Grouping, precedence and whitespace
  operators         Comparison and logical operators
  literals          Strings, numbers and booleans, and how they coerce
  variables         Identifiers and the variables document
  errors            What happens when an expression does not compile

QUICK REFERENCE

  a & b             Both hold
  a | b             Either holds
  x >= 10           Numeric comparison
  name = "steve"    Text comparison
  (a | b) & c       Grouping

Run 'hudcond doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Literals) => Ok(LITERALS_DOC),
        Some(DocCategory::Variables) => Ok(VARIABLES_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Structure of a conditional

PRECEDENCE
  |  binds loosest, then &, then comparisons.

    a & b | c & d    is    (a & b) | (c & d)

GROUPING
  ( ... )
    Parentheses group any sub-expression and may nest freely.

    (health < 5 | hunger < 5) & dimension = "nether"

WHITESPACE
  Whitespace and any character the grammar does not know are skipped.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS

COMPARISON
  =     equal (a single '=')
  !=    not equal
  <     less than
  <=    less than or equal
  >     greater than
  >=    greater than or equal

  A comparison has exactly one operator between two operands.

LOGICAL
  &     and, stops at the first false operand
  |     or, stops at the first true operand
"#;

const LITERALS_DOC: &str = r#"LITERALS

STRING
  "text"
    Everything up to the next double quote. No escapes.

NUMBER
  12   0.5   3.
    Digits and dots. No sign, no exponent.

BOOLEAN
  true   false

COERCION
  A comparison against a boolean literal compares boolean views.
  Otherwise a comparison against a number literal compares numbers.
  Otherwise both sides are compared as text.

  Variables expose all three views: text sources count their length as
  a number, and any source is true when its number is above zero.
"#;

const VARIABLES_DOC: &str = r#"VARIABLES

IDENTIFIERS
  Lowercase letters, '_' and ':'.

    health   dimension_id   client:fps

  A bare variable is true when its boolean view is true.

VARIABLES DOCUMENT
  hudcond reads variables from a JSON object:

    {"health": 20, "dimension": "overworld", "raining": false, "biome": null}

  null marks a source with no data: it reads as "-", 0 and false.
"#;

const ERRORS_DOC: &str = r#"ERRORS

  An expression that does not compile (a lone '!', a missing operand, an
  unknown variable, unbalanced parentheses) is reported once and then
  always evaluates to true.

  hudcond check --strict reports the error instead.
"#;
