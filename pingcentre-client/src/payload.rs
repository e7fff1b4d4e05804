//! Ping payload construction.

use pingcentre_types::ClientId;
use serde_json::{Map, Value};

/// A ping body: string keys to arbitrary JSON values.
pub type Payload = Map<String, Value>;

pub const TOPIC_KEY: &str = "topic";
pub const CLIENT_ID_KEY: &str = "client_id";

/// Builds the wire payload for a ping.
///
/// The result is a copy of `data` with `topic` and `client_id` written last,
/// so caller-supplied values for those keys are always replaced.
pub fn build_payload(data: &Payload, topic_name: &str, client_id: &ClientId) -> Payload {
    let mut payload = data.clone();
    payload.insert(TOPIC_KEY.to_string(), Value::String(topic_name.to_string()));
    payload.insert(CLIENT_ID_KEY.to_string(), Value::String(client_id.to_string()));
    payload
}
