//! Ping delivery.
//!
//! [`PingTransport`] abstracts the single HTTP POST so the client can be
//! driven by a test double; [`deliver`] runs it in the background and turns
//! the outcome into a [`PingHandle`].

use crate::config::PingCentreConfig;
use crate::error::{PingCentreError, PingResult};
use crate::handle::PingHandle;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Posts one JSON payload to a URL. Single attempt, no retry.
#[async_trait]
pub trait PingTransport: Send + Sync {
    /// Sends `payload` to `url`. Any non-2xx answer is an error.
    async fn post(&self, url: &str, payload: &Value) -> PingResult<()>;
}

/// HTTPS transport backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport honouring the config's timeout and user agent.
    pub fn new(config: &PingCentreConfig) -> PingResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| PingCentreError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wraps an existing reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PingTransport for HttpTransport {
    async fn post(&self, url: &str, payload: &Value) -> PingResult<()> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PingCentreError::Status(status.as_u16()));
        }
        Ok(())
    }
}

fn map_request_error(e: reqwest::Error) -> PingCentreError {
    if e.is_timeout() {
        PingCentreError::Timeout
    } else {
        PingCentreError::Network(e.to_string())
    }
}

/// One ping ready to go over the wire.
#[derive(Debug, Clone)]
pub struct Delivery {
    /// Topic name, for logging.
    pub topic: String,
    pub url: String,
    pub payload: Value,
    /// Fail the handle on transport errors instead of only logging them.
    pub surface_errors: bool,
}

/// Spawns the POST on the current tokio runtime and returns its handle.
///
/// Transport failures are logged with the topic name. Unless
/// `surface_errors` is set the handle still resolves with `Ok(())`.
pub fn deliver(transport: Arc<dyn PingTransport>, delivery: Delivery) -> PingHandle {
    let Ok(runtime) = tokio::runtime::Handle::try_current() else {
        warn!(topic = %delivery.topic, "No tokio runtime, ping dropped");
        return PingHandle::ready(Err(PingCentreError::NoRuntime));
    };

    let (completer, handle) = PingHandle::channel();
    runtime.spawn(async move {
        let Delivery {
            topic,
            url,
            payload,
            surface_errors,
        } = delivery;

        let outcome = match transport.post(&url, &payload).await {
            Ok(()) => {
                debug!(topic = %topic, "Ping delivered");
                Ok(())
            }
            Err(e) => {
                warn!(topic = %topic, error = %e, "Failed to send ping to ping centre");
                if surface_errors { Err(e) } else { Ok(()) }
            }
        };
        completer.fill(outcome);
    });
    handle
}

/// A recording transport for testing.
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// A request observed by [`MockTransport`].
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedPing {
        pub url: String,
        pub payload: Value,
    }

    /// Records every post and answers with a fixed HTTP status.
    #[derive(Debug)]
    pub struct MockTransport {
        status: u16,
        requests: Mutex<Vec<RecordedPing>>,
    }

    impl MockTransport {
        /// A transport whose endpoint answers `200 OK`.
        pub fn succeeding() -> Arc<Self> {
            Self::with_status(200)
        }

        /// A transport whose endpoint answers with `status`.
        pub fn with_status(status: u16) -> Arc<Self> {
            Arc::new(Self {
                status,
                requests: Mutex::new(Vec::new()),
            })
        }

        /// Number of posts attempted.
        pub fn invocations(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        /// Every post attempted, in order.
        pub fn requests(&self) -> Vec<RecordedPing> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PingTransport for MockTransport {
        async fn post(&self, url: &str, payload: &Value) -> PingResult<()> {
            self.requests.lock().unwrap().push(RecordedPing {
                url: url.to_string(),
                payload: payload.clone(),
            });
            if (200..300).contains(&self.status) {
                Ok(())
            } else {
                Err(PingCentreError::Status(self.status))
            }
        }
    }
}
