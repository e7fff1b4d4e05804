//! Ping Centre telemetry client.
//!
//! Builds structured events ("pings"), checks them against the topic's
//! schema and POSTs them as JSON to a collection endpoint chosen by build
//! channel.
//!
//! ## Components
//!
//! - **Endpoint**: maps a build channel to the staging or production URL
//! - **Payload**: merges caller data with `topic` and `client_id`
//! - **Transport**: the single HTTP POST, plus background delivery
//! - **Client**: orchestrates build, validate and deliver
//!
//! Transport failures are logged and, by default, do not fail the returned
//! handle. Set [`PingCentreConfig::surface_transport_errors`] to observe
//! them.
//!
//! # Example
//!
//! ```no_run
//! use pingcentre_client::{PingCentre, PingCentreClient, Payload};
//! use pingcentre_schema::Topic;
//! use pingcentre_types::BuildChannel;
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let topic = Topic::new("ios-mock", json!({
//!     "type": "object",
//!     "required": ["title"]
//! }))?;
//! let client = PingCentre::client_for_topic(topic, BuildChannel::Beta)?;
//!
//! let mut data = Payload::new();
//! data.insert("title".into(), json!("hello"));
//! client.send_ping(&data).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
pub mod endpoint;
mod error;
mod handle;
pub mod payload;
pub mod transport;

pub use client::{DefaultPingCentre, PingCentre, PingCentreClient};
pub use config::PingCentreConfig;
pub use endpoint::{resolve, Endpoint, PRODUCTION_URL, STAGING_URL};
pub use error::{PingCentreError, PingResult};
pub use handle::PingHandle;
pub use payload::{build_payload, Payload, CLIENT_ID_KEY, TOPIC_KEY};
pub use transport::{deliver, Delivery, HttpTransport, PingTransport};
