use crate::error::{SchemaError, TopicError, TopicResult};
use crate::validator::{validate, JsonSchema, SchemaValidator};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A named category of pings with an associated validation schema.
///
/// Cheap to clone; the validator is shared.
#[derive(Clone)]
pub struct Topic {
    name: String,
    schema: Arc<dyn SchemaValidator>,
}

impl Topic {
    /// Declares a topic, compiling its JSON Schema up front.
    pub fn new(name: impl Into<String>, schema: Value) -> TopicResult<Self> {
        let name = name.into();
        let schema = JsonSchema::compile(schema).map_err(|reason| TopicError::InvalidSchema {
            topic: name.clone(),
            reason,
        })?;
        Self::with_validator(name, Arc::new(schema))
    }

    /// Declares a topic checked by an arbitrary validator.
    pub fn with_validator(
        name: impl Into<String>,
        schema: Arc<dyn SchemaValidator>,
    ) -> TopicResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TopicError::EmptyName);
        }
        Ok(Self { name, schema })
    }

    /// Declares a topic from a schema given as JSON text.
    pub fn from_schema_str(name: impl Into<String>, schema: &str) -> TopicResult<Self> {
        let schema: Value = serde_json::from_str(schema)?;
        Self::new(name, schema)
    }

    /// A topic whose schema accepts any payload.
    pub fn permissive(name: impl Into<String>) -> TopicResult<Self> {
        Self::new(name, Value::Object(Default::default()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Arc<dyn SchemaValidator> {
        &self.schema
    }

    /// Validates a payload against this topic's schema.
    pub fn validate(&self, payload: &Value) -> Vec<SchemaError> {
        validate(payload, self.schema.as_ref())
    }
}

impl fmt::Debug for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Topic")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
