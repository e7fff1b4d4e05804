use serde::{Deserialize, Serialize};

/// Counters produced while uploading local changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncUploadStats {
    pub sent: u32,
    pub sent_failed: u32,
}

/// Counters produced while applying incoming records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncDownloadStats {
    pub applied: u32,
    pub succeeded: u32,
    pub failed: u32,
    pub new_failed: u32,
    pub reconciled: u32,
}

/// Validation problems found in synced data. No checks report into this yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationStats {}

/// How an engine sync ended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    #[default]
    Completed,
    Partial,
    NotStarted(String),
}

impl SyncStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, SyncStatus::Completed)
    }
}

/// Statistics for one engine within a sync session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncEngineStats {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_stats: Option<SyncUploadStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_stats: Option<SyncDownloadStats>,
    /// Elapsed time (ms). Zero until the engine finishes with a known start.
    pub took: u64,
    pub status: SyncStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_stats: Option<ValidationStats>,
}

impl SyncEngineStats {
    /// Fresh stats for an engine that is about to sync.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            upload_stats: None,
            download_stats: None,
            took: 0,
            status: SyncStatus::Completed,
            failure_reason: None,
            validation_stats: None,
        }
    }

    /// Records why the engine failed.
    pub fn with_failure_reason(mut self, reason: impl Into<String>) -> Self {
        self.failure_reason = Some(reason.into());
        self
    }
}
