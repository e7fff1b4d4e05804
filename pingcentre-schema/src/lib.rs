//! Ping topics and payload validation.
//!
//! - [`Topic`] — a named category of pings with its declared schema
//! - [`SchemaValidator`] — checks a payload against a shape, returning every
//!   violation found
//! - [`JsonSchema`] — the default validator, backed by compiled JSON Schema
//!
//! Validation is pure and synchronous: no I/O, no shared state.

mod error;
mod topic;
mod validator;

pub use error::{SchemaError, TopicError, TopicResult};
pub use topic::Topic;
pub use validator::{validate, JsonSchema, SchemaValidator};
