//! Display element that picks between two branches each frame.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::ast::Conditional;
use crate::value::ValueProvider;

/// Renders `positive` when the condition holds and `negative` otherwise.
///
/// It is itself a [`ValueProvider`], so an element can be registered as a
/// variable and tested by other conditionals: its number view is `1` or `0`
/// and its boolean view is the condition.
pub struct ConditionalElement {
    conditional: Conditional,
    positive: Vec<Rc<dyn ValueProvider>>,
    negative: Vec<Rc<dyn ValueProvider>>,
}

impl ConditionalElement {
    pub fn new(
        conditional: Conditional,
        positive: Vec<Rc<dyn ValueProvider>>,
        negative: Vec<Rc<dyn ValueProvider>>,
    ) -> Self {
        ConditionalElement {
            conditional,
            positive,
            negative,
        }
    }

    pub fn conditional(&self) -> &Conditional {
        &self.conditional
    }

    fn branch(&self) -> &[Rc<dyn ValueProvider>] {
        if self.conditional.value() {
            &self.positive
        } else {
            &self.negative
        }
    }
}

impl fmt::Debug for ConditionalElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionalElement")
            .field("positive", &self.positive.len())
            .field("negative", &self.negative.len())
            .finish()
    }
}

impl ValueProvider for ConditionalElement {
    fn as_string(&self) -> Cow<'_, str> {
        match self.branch() {
            [] => Cow::Borrowed(""),
            [only] => only.as_string(),
            elements => {
                let mut out = String::new();
                for element in elements {
                    out.push_str(&element.as_string());
                }
                Cow::Owned(out)
            }
        }
    }

    fn as_number(&self) -> f64 {
        if self.conditional.value() { 1.0 } else { 0.0 }
    }

    fn as_boolean(&self) -> bool {
        self.conditional.value()
    }
}
