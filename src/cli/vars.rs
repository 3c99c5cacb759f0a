//! JSON variables document -> resolver.

use crate::resolver::VariableRegistry;
use crate::value::{BooleanSupplier, Constant, StringSupplier};

use super::CliError;

fn valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c == '_' || c == ':' || c.is_ascii_lowercase())
}

/// Build a registry from a JSON object of `name: value` pairs.
///
/// Strings, numbers and booleans become constants; `null` registers a source
/// that is never available, so its views fall back to `"-"`, `0` and `false`.
pub fn registry_from_json(json: &str) -> Result<VariableRegistry, CliError> {
    let document: serde_json::Value = serde_json::from_str(json)?;
    let serde_json::Value::Object(entries) = document else {
        return Err(CliError::Vars("expected a JSON object".to_string()));
    };

    let mut registry = VariableRegistry::new();
    for (name, value) in entries {
        if !valid_name(&name) {
            return Err(CliError::Vars(format!(
                "'{}' is not a valid variable name (lowercase letters, '_' and ':' only)",
                name
            )));
        }
        match value {
            serde_json::Value::Null => {
                let label = name.clone();
                registry.register(name, StringSupplier::new(label, || None));
            }
            serde_json::Value::Bool(b) => {
                let label = name.clone();
                registry.register(name, BooleanSupplier::new(label, move || Some(b)));
            }
            serde_json::Value::Number(n) => {
                let n = n
                    .as_f64()
                    .ok_or_else(|| CliError::Vars(format!("'{}' is out of range", name)))?;
                registry.register(name, Constant::Number(n));
            }
            serde_json::Value::String(s) => registry.register(name, Constant::String(s)),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                return Err(CliError::Vars(format!(
                    "'{}' must be a string, number, boolean or null",
                    name
                )));
            }
        }
    }
    Ok(registry)
}
