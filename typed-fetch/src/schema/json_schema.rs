use std::fmt;

use jsonschema::Validator;
use serde_json::Value;

use super::{Issue, Outcome, Schema, SchemaError};
use crate::error::ConfigError;

/// Schema backed by a JSON Schema document.
///
/// The document is compiled once at construction. Accepted values are
/// returned unchanged; each violation becomes one [`Issue`] located at the
/// offending instance path.
///
/// ## Examples
///
/// ```rust
/// use serde_json::json;
/// use typed_fetch::JsonSchema;
///
/// let schema = JsonSchema::new(&json!({
///     "type": "object",
///     "required": ["message"],
///     "properties": { "message": { "type": "string" } }
/// }))
/// .unwrap();
/// # let _ = schema;
/// ```
pub struct JsonSchema {
    validator: Validator,
}

impl JsonSchema {
    /// Compiles a JSON Schema document.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidSchema`] if the document is not a valid
    /// schema.
    pub fn new(schema: &Value) -> Result<Self, ConfigError> {
        let validator =
            jsonschema::validator_for(schema).map_err(|e| ConfigError::InvalidSchema {
                message: e.to_string(),
            })?;
        Ok(Self { validator })
    }
}

impl fmt::Debug for JsonSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSchema").finish_non_exhaustive()
    }
}

impl Schema for JsonSchema {
    type Output = Value;

    async fn validate(&self, candidate: &Value) -> Result<Outcome<Value>, SchemaError> {
        let issues: Vec<Issue> = self
            .validator
            .iter_errors(candidate)
            .map(|e| Issue::at(e.instance_path.to_string(), e.to_string()))
            .collect();

        if issues.is_empty() {
            Ok(Outcome::Accepted(candidate.clone()))
        } else {
            Ok(Outcome::Rejected(issues))
        }
    }
}
