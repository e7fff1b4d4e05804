use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for topic construction.
pub type TopicResult<T> = Result<T, TopicError>;

/// A single structural violation found while validating a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaError {
    /// Human-readable description, e.g. `"title" is a required property`.
    pub message: String,
}

impl SchemaError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Errors raised while declaring a topic.
#[derive(Debug, Error)]
pub enum TopicError {
    #[error("topic name must not be empty")]
    EmptyName,

    #[error("invalid schema for topic `{topic}`: {reason}")]
    InvalidSchema { topic: String, reason: String },

    #[error("schema is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
