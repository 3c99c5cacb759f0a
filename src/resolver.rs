//! Variable resolution.
//!
//! The lexer hands every identifier to a [`VariableResolver`] wrapped in the
//! host's reference syntax (`{name}`) and keeps whatever provider comes
//! back. [`VariableRegistry`] is a map-backed resolver good enough for the
//! command line tool and for tests; a real host plugs in its own.

use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::value::ValueProvider;

/// Errors raised while resolving a variable reference.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("unknown variable {reference} on line {line}")]
    Unknown { reference: String, line: usize },

    #[error("malformed variable reference {reference:?} on line {line}")]
    Malformed { reference: String, line: usize },
}

/// Data groups the host must compute because some expression uses them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enabled {
    groups: BTreeSet<String>,
}

impl Enabled {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&mut self, group: impl Into<String>) {
        self.groups.insert(group.into());
    }

    pub fn is_enabled(&self, group: &str) -> bool {
        self.groups.contains(group)
    }

    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(String::as_str)
    }
}

/// Maps a variable reference to a live provider.
pub trait VariableResolver {
    /// Resolve `reference` (e.g. `{health}`) seen on config line `line`,
    /// switching on whatever data groups it needs in `enabled`.
    fn resolve(
        &self,
        reference: &str,
        line: usize,
        enabled: &mut Enabled,
    ) -> Result<Rc<dyn ValueProvider>, ResolveError>;
}

struct Entry {
    provider: Rc<dyn ValueProvider>,
    requires: Vec<String>,
}

/// Name-to-provider table.
///
/// # Examples
///
/// ```
/// use hud_conditionals::resolver::{Enabled, VariableRegistry, VariableResolver};
/// use hud_conditionals::value::Constant;
///
/// let mut registry = VariableRegistry::new();
/// registry.register_with("biome", Constant::String("plains".into()), ["world"]);
///
/// let mut enabled = Enabled::new();
/// let biome = registry.resolve("{biome}", 1, &mut enabled).unwrap();
/// assert_eq!(biome.as_string(), "plains");
/// assert!(enabled.is_enabled("world"));
/// ```
#[derive(Default)]
pub struct VariableRegistry {
    entries: HashMap<String, Entry>,
}

fn reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\{(?:(?P<ns>[a-z_]+):)?(?P<name>[a-z_:]+)\}$")
            .expect("variable reference pattern is valid")
    })
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under `name` (which may carry a `namespace:` prefix).
    pub fn register(&mut self, name: impl Into<String>, provider: impl ValueProvider + 'static) {
        self.register_rc(name, Rc::new(provider), Vec::new());
    }

    /// Register a provider that needs the given data groups computed.
    pub fn register_with<I, S>(
        &mut self,
        name: impl Into<String>,
        provider: impl ValueProvider + 'static,
        requires: I,
    ) where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let requires = requires.into_iter().map(Into::into).collect();
        self.register_rc(name, Rc::new(provider), requires);
    }

    /// Register an already shared provider, e.g. one also placed in a layout.
    pub fn register_rc(
        &mut self,
        name: impl Into<String>,
        provider: Rc<dyn ValueProvider>,
        requires: Vec<String>,
    ) {
        self.entries
            .insert(name.into(), Entry { provider, requires });
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl VariableResolver for VariableRegistry {
    fn resolve(
        &self,
        reference: &str,
        line: usize,
        enabled: &mut Enabled,
    ) -> Result<Rc<dyn ValueProvider>, ResolveError> {
        let caps = reference_pattern()
            .captures(reference)
            .ok_or_else(|| ResolveError::Malformed {
                reference: reference.to_string(),
                line,
            })?;

        // Namespaced names are stored whole, so look up the full key first.
        let full = &reference[1..reference.len() - 1];
        let entry = self
            .entries
            .get(full)
            .or_else(|| caps.name("ns").and_then(|_| self.entries.get(&caps["name"])))
            .ok_or_else(|| ResolveError::Unknown {
                reference: reference.to_string(),
                line,
            })?;

        for group in &entry.requires {
            enabled.enable(group.clone());
        }
        log::trace!("line {}: resolved {} to {:?}", line, reference, entry.provider);
        Ok(Rc::clone(&entry.provider))
    }
}
