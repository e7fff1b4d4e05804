use crate::error::SchemaError;
use serde_json::Value;
use std::fmt;

/// Checks a payload against a declared shape.
///
/// Implementations must be pure: the same payload always yields the same
/// errors, and validation never performs I/O.
pub trait SchemaValidator: Send + Sync {
    /// Returns every violation in `payload`. An empty list means valid.
    fn validate(&self, payload: &Value) -> Vec<SchemaError>;

    /// Convenience check for callers that only need a yes/no answer.
    fn is_valid(&self, payload: &Value) -> bool {
        self.validate(payload).is_empty()
    }
}

/// Validates `payload` against `schema`.
pub fn validate(payload: &Value, schema: &dyn SchemaValidator) -> Vec<SchemaError> {
    schema.validate(payload)
}

/// A compiled JSON Schema document.
pub struct JsonSchema {
    source: Value,
    compiled: jsonschema::Validator,
}

impl JsonSchema {
    /// Compiles a schema document. The draft is detected from `$schema`,
    /// falling back to the latest supported draft.
    pub fn compile(source: Value) -> Result<Self, String> {
        let compiled = jsonschema::validator_for(&source).map_err(|e| e.to_string())?;
        Ok(Self { source, compiled })
    }

    /// Returns the schema document this validator was compiled from.
    pub fn source(&self) -> &Value {
        &self.source
    }
}

impl SchemaValidator for JsonSchema {
    fn validate(&self, payload: &Value) -> Vec<SchemaError> {
        self.compiled
            .iter_errors(payload)
            .map(|e| SchemaError::new(e.to_string()))
            .collect()
    }

    fn is_valid(&self, payload: &Value) -> bool {
        self.compiled.is_valid(payload)
    }
}

impl fmt::Debug for JsonSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSchema")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
