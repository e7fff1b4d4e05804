use crate::error::{PingCentreError, PingResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a Ping Centre client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PingCentreConfig {
    /// Per-request timeout (ms). Bounds how long a ping handle can stay
    /// pending.
    pub timeout_ms: u64,
    /// When set, transport failures fail the ping handle instead of only
    /// being logged.
    pub surface_transport_errors: bool,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
}

impl Default for PingCentreConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            surface_transport_errors: false,
            user_agent: concat!("pingcentre/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl PingCentreConfig {
    /// Parses a config from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> PingResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that serde cannot.
    pub fn validate(&self) -> PingResult<()> {
        if self.timeout_ms == 0 {
            return Err(PingCentreError::Config("timeout_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
