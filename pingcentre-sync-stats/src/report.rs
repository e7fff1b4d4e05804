use crate::stats::SyncEngineStats;
use pingcentre_types::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A device registered with the sync account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRegistration {
    pub id: String,
}

/// The account identity a sync session runs under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncAccount {
    pub uid: String,
    #[serde(default)]
    pub device_registration: Option<DeviceRegistration>,
}

impl SyncAccount {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            device_registration: None,
        }
    }

    pub fn with_device(mut self, device_id: impl Into<String>) -> Self {
        self.device_registration = Some(DeviceRegistration {
            id: device_id.into(),
        });
        self
    }
}

/// Stats for one whole sync session, keyed by engine name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncStatsReport {
    when: Timestamp,
    took: u64,
    uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    device_id: Option<String>,
    did_login: bool,
    why: String,
    engines: BTreeMap<String, SyncEngineStats>,
}

impl SyncStatsReport {
    /// Starts a report for a session that began at `when`.
    pub fn new(
        when: Timestamp,
        account: &SyncAccount,
        did_login: bool,
        why: impl Into<String>,
    ) -> Self {
        Self {
            when,
            took: 0,
            uid: account.uid.clone(),
            device_id: account.device_registration.as_ref().map(|d| d.id.clone()),
            did_login,
            why: why.into(),
            engines: BTreeMap::new(),
        }
    }

    /// Files stats under `engine`, replacing any earlier entry.
    pub fn add_stats(&mut self, stats: SyncEngineStats, engine: impl Into<String>) {
        self.engines.insert(engine.into(), stats);
    }

    /// Files stats under their own engine name.
    pub fn record(&mut self, stats: SyncEngineStats) {
        let engine = stats.name.clone();
        self.add_stats(stats, engine);
    }

    /// Records the session's total elapsed time as of now.
    pub fn finish_report(&mut self) {
        self.finish_report_at(Timestamp::now());
    }

    /// Records the session's total elapsed time as of `now`.
    pub fn finish_report_at(&mut self, now: Timestamp) {
        self.took = now.millis_since(self.when);
    }

    pub fn when(&self) -> Timestamp {
        self.when
    }

    /// Total session time (ms); zero until the report is finished.
    pub fn took(&self) -> u64 {
        self.took
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    pub fn did_login(&self) -> bool {
        self.did_login
    }

    pub fn why(&self) -> &str {
        &self.why
    }

    pub fn engine(&self, name: &str) -> Option<&SyncEngineStats> {
        self.engines.get(name)
    }

    pub fn engines(&self) -> impl Iterator<Item = (&str, &SyncEngineStats)> {
        self.engines.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    /// Serializes the report for whatever upload path consumes it.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
