//! Sync statistics for telemetry.
//!
//! Sync engines report upload and apply counters through a
//! [`SyncStatsDelegate`]. The [`SyncEngineStatsObserver`] collects them for
//! the one engine currently syncing, and the finished [`SyncEngineStats`]
//! are filed into a session-wide [`SyncStatsReport`].
//!
//! Everything here is in-memory bookkeeping driven from the thread running
//! the sync session. Nothing is sent over the network.

mod observer;
mod report;
mod stats;

pub use observer::{Clock, SyncEngineStatsObserver, SyncStatsDelegate};
pub use report::{DeviceRegistration, SyncAccount, SyncStatsReport};
pub use stats::{
    SyncDownloadStats, SyncEngineStats, SyncStatus, SyncUploadStats, ValidationStats,
};
