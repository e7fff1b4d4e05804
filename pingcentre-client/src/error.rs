//! Error types for ping submission.

use pingcentre_schema::SchemaError;
use thiserror::Error;

/// Result type for ping operations.
pub type PingResult<T> = Result<T, PingCentreError>;

/// Errors that can occur while submitting a ping.
#[derive(Debug, Error)]
pub enum PingCentreError {
    /// The payload did not match the topic schema. The network was never
    /// contacted.
    #[error("payload failed validation: {}", join_errors(.0))]
    Validation(Vec<SchemaError>),

    /// Connection-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status.
    #[error("endpoint responded with HTTP {0}")]
    Status(u16),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// `send_ping` was called outside a tokio runtime.
    #[error("no async runtime available to deliver the ping")]
    NoRuntime,

    /// The delivery task ended before reporting a result.
    #[error("delivery was cancelled")]
    Cancelled,
}

impl PingCentreError {
    /// Returns the schema violations if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[SchemaError]> {
        match self {
            PingCentreError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Returns true for failures that happened on the wire.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            PingCentreError::Network(_) | PingCentreError::Status(_) | PingCentreError::Timeout
        )
    }
}

fn join_errors(errors: &[SchemaError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
