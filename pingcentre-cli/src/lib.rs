//! Input handling for the `pingcentre` command-line tool.

use anyhow::{bail, Context, Result};
use pingcentre_client::{Payload, PingCentreConfig};
use pingcentre_schema::Topic;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parses ping data given as a JSON object.
pub fn parse_payload(raw: &str) -> Result<Payload> {
    let value: Value = serde_json::from_str(raw).context("ping data is not valid JSON")?;
    match value {
        Value::Object(map) => Ok(map),
        other => bail!("ping data must be a JSON object, got {}", json_kind(&other)),
    }
}

/// Loads a topic, reading its schema from `schema_path` or accepting any
/// payload when no schema is given.
pub fn load_topic(name: &str, schema_path: Option<&Path>) -> Result<Topic> {
    let topic = match schema_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read schema {}", path.display()))?;
            Topic::from_schema_str(name, &raw)?
        }
        None => Topic::permissive(name)?,
    };
    Ok(topic)
}

/// Loads client config from a JSON file, or the defaults.
pub fn load_config(path: Option<&Path>) -> Result<PingCentreConfig> {
    let Some(path) = path else {
        return Ok(PingCentreConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    PingCentreConfig::from_json_str(&raw)
        .with_context(|| format!("invalid config {}", path.display()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
