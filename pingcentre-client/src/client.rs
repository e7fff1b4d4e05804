//! The Ping Centre client.
//!
//! Per call: build the payload, optionally validate it against the topic
//! schema on the calling thread, then hand it to the transport. A client
//! holds no mutable state; overlapping calls are independent.

use crate::config::PingCentreConfig;
use crate::endpoint::Endpoint;
use crate::error::{PingCentreError, PingResult};
use crate::handle::PingHandle;
use crate::payload::{build_payload, Payload};
use crate::transport::{deliver, Delivery, HttpTransport, PingTransport};
use pingcentre_schema::Topic;
use pingcentre_types::{BuildChannel, ClientId};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Submits pings for one topic.
pub trait PingCentreClient: Send + Sync {
    /// Sends a ping, validating it first when `validate` is set.
    ///
    /// A validation failure resolves the handle immediately with
    /// [`PingCentreError::Validation`] and nothing is sent.
    fn send_ping_with(&self, data: &Payload, validate: bool) -> PingHandle;

    /// Sends a ping after validating it against the topic schema.
    fn send_ping(&self, data: &Payload) -> PingHandle {
        self.send_ping_with(data, true)
    }
}

/// Entry point for building clients from a build channel.
pub struct PingCentre;

impl PingCentre {
    /// Creates an HTTP client for `topic`, reporting to the endpoint for
    /// `channel` under a fresh client ID.
    pub fn client_for_topic(topic: Topic, channel: BuildChannel) -> PingResult<DefaultPingCentre> {
        Self::client_for_topic_with(topic, channel, ClientId::new(), PingCentreConfig::default())
    }

    /// Like [`PingCentre::client_for_topic`] with an explicit identity and
    /// config.
    pub fn client_for_topic_with(
        topic: Topic,
        channel: BuildChannel,
        client_id: ClientId,
        config: PingCentreConfig,
    ) -> PingResult<DefaultPingCentre> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        let endpoint = Endpoint::for_channel(channel);
        info!(
            topic = %topic.name(),
            channel = %channel,
            endpoint = ?endpoint,
            "Created ping centre client"
        );
        Ok(DefaultPingCentre::new(topic, endpoint, client_id, transport, config))
    }
}

/// The standard client: schema validation plus single-attempt delivery.
pub struct DefaultPingCentre {
    topic: Topic,
    client_id: ClientId,
    endpoint_url: String,
    transport: Arc<dyn PingTransport>,
    config: PingCentreConfig,
}

impl DefaultPingCentre {
    /// Creates a client for one of the fixed endpoints.
    pub fn new(
        topic: Topic,
        endpoint: Endpoint,
        client_id: ClientId,
        transport: Arc<dyn PingTransport>,
        config: PingCentreConfig,
    ) -> Self {
        Self::with_url(topic, endpoint.url(), client_id, transport, config)
    }

    /// Creates a client that posts to an arbitrary URL.
    pub fn with_url(
        topic: Topic,
        url: impl Into<String>,
        client_id: ClientId,
        transport: Arc<dyn PingTransport>,
        config: PingCentreConfig,
    ) -> Self {
        Self {
            topic,
            client_id,
            endpoint_url: url.into(),
            transport,
            config,
        }
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn config(&self) -> &PingCentreConfig {
        &self.config
    }
}

impl PingCentreClient for DefaultPingCentre {
    fn send_ping_with(&self, data: &Payload, validate: bool) -> PingHandle {
        let payload = Value::Object(build_payload(data, self.topic.name(), &self.client_id));

        if validate {
            let errors = self.topic.validate(&payload);
            if !errors.is_empty() {
                debug!(
                    topic = %self.topic.name(),
                    errors = errors.len(),
                    "Ping rejected by schema"
                );
                return PingHandle::ready(Err(PingCentreError::Validation(errors)));
            }
        }

        debug!(topic = %self.topic.name(), url = %self.endpoint_url, "Dispatching ping");
        deliver(
            Arc::clone(&self.transport),
            Delivery {
                topic: self.topic.name().to_string(),
                url: self.endpoint_url.clone(),
                payload,
                surface_errors: self.config.surface_transport_errors,
            },
        )
    }
}
