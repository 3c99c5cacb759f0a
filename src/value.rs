use std::borrow::Cow;
use std::fmt;

/// Placeholder rendered when a source has no data.
pub const MISSING: &str = "-";

/// A live source of display data, viewed three ways.
///
/// Every view is failure-tolerant: when the underlying data is absent the
/// provider answers with its fallback (`"-"`, `0`, `false`) instead of
/// erroring. Conditionals only ever talk to data through this trait.
///
/// # Examples
///
/// ```
/// use hud_conditionals::value::{Constant, ValueProvider};
///
/// let name = Constant::String("overworld".to_string());
/// assert_eq!(name.as_string(), "overworld");
/// assert_eq!(name.as_number(), 9.0);
/// assert!(name.as_boolean());
/// ```
pub trait ValueProvider: fmt::Debug {
    /// Text view, `"-"` when unavailable.
    fn as_string(&self) -> Cow<'_, str>;

    /// Numeric view, `0` when unavailable.
    fn as_number(&self) -> f64;

    /// Boolean view, `false` when unavailable.
    fn as_boolean(&self) -> bool {
        self.as_number() > 0.0
    }
}

/// A literal wrapped in the provider views.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl ValueProvider for Constant {
    fn as_string(&self) -> Cow<'_, str> {
        match self {
            Constant::String(s) => Cow::Borrowed(s.as_str()),
            Constant::Number(n) => Cow::Owned(format_number(*n)),
            Constant::Boolean(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        }
    }

    fn as_number(&self) -> f64 {
        match self {
            Constant::String(s) => s.chars().count() as f64,
            Constant::Number(n) => *n,
            Constant::Boolean(b) => f64::from(u8::from(*b)),
        }
    }

    fn as_boolean(&self) -> bool {
        match self {
            Constant::Boolean(b) => *b,
            _ => self.as_number() > 0.0,
        }
    }
}

/// Render whole numbers without a trailing `.0`.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Text-backed provider. The numeric view is the text length.
pub struct StringSupplier {
    name: String,
    supplier: Box<dyn Fn() -> Option<String>>,
}

impl StringSupplier {
    pub fn new(name: impl Into<String>, supplier: impl Fn() -> Option<String> + 'static) -> Self {
        StringSupplier {
            name: name.into(),
            supplier: Box::new(supplier),
        }
    }
}

impl fmt::Debug for StringSupplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "string {{{}}}", self.name)
    }
}

impl ValueProvider for StringSupplier {
    fn as_string(&self) -> Cow<'_, str> {
        match (self.supplier)() {
            Some(s) => Cow::Owned(s),
            None => Cow::Borrowed(MISSING),
        }
    }

    fn as_number(&self) -> f64 {
        (self.supplier)().map_or(0.0, |s| s.chars().count() as f64)
    }
}

/// Number-backed provider.
pub struct NumberSupplier {
    name: String,
    supplier: Box<dyn Fn() -> Option<f64>>,
}

impl NumberSupplier {
    pub fn new(name: impl Into<String>, supplier: impl Fn() -> Option<f64> + 'static) -> Self {
        NumberSupplier {
            name: name.into(),
            supplier: Box::new(supplier),
        }
    }
}

impl fmt::Debug for NumberSupplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "number {{{}}}", self.name)
    }
}

impl ValueProvider for NumberSupplier {
    fn as_string(&self) -> Cow<'_, str> {
        match (self.supplier)() {
            Some(n) => Cow::Owned(format_number(n)),
            None => Cow::Borrowed(MISSING),
        }
    }

    fn as_number(&self) -> f64 {
        (self.supplier)().unwrap_or(0.0)
    }
}

/// Flag-backed provider.
pub struct BooleanSupplier {
    name: String,
    supplier: Box<dyn Fn() -> Option<bool>>,
}

impl BooleanSupplier {
    pub fn new(name: impl Into<String>, supplier: impl Fn() -> Option<bool> + 'static) -> Self {
        BooleanSupplier {
            name: name.into(),
            supplier: Box::new(supplier),
        }
    }
}

impl fmt::Debug for BooleanSupplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "boolean {{{}}}", self.name)
    }
}

impl ValueProvider for BooleanSupplier {
    fn as_string(&self) -> Cow<'_, str> {
        match (self.supplier)() {
            Some(true) => Cow::Borrowed("true"),
            Some(false) => Cow::Borrowed("false"),
            None => Cow::Borrowed(MISSING),
        }
    }

    fn as_number(&self) -> f64 {
        if self.as_boolean() { 1.0 } else { 0.0 }
    }

    fn as_boolean(&self) -> bool {
        (self.supplier)().unwrap_or(false)
    }
}
