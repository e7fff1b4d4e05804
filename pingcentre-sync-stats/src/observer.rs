//! Per-engine stats collection.
//!
//! The observer holds at most one in-flight [`SyncEngineStats`]. Callbacks
//! for an engine arrive strictly in order: begin, zero or more stat
//! reports, end. Ending clears the slot.

use crate::stats::{SyncDownloadStats, SyncEngineStats, SyncStatus, SyncUploadStats};
use pingcentre_types::Timestamp;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Source of the current time.
pub type Clock = Arc<dyn Fn() -> Timestamp + Send + Sync>;

/// Callbacks a sync engine uses to report its statistics.
pub trait SyncStatsDelegate {
    /// The engine is about to sync.
    fn engine_will_begin(&mut self, engine: &str);

    /// The engine finished uploading.
    fn did_generate_upload_stats(&mut self, engine: &str, stats: SyncUploadStats);

    /// The engine finished applying incoming records.
    fn did_generate_apply_stats(&mut self, engine: &str, stats: SyncDownloadStats);

    /// The engine finished; returns its final stats.
    fn engine_did_end(&mut self, engine: &str, status: SyncStatus) -> SyncEngineStats;
}

/// Collects stats for the engine currently syncing.
pub struct SyncEngineStatsObserver {
    engine_stats: Option<SyncEngineStats>,
    start_time: Option<Timestamp>,
    clock: Clock,
}

impl SyncEngineStatsObserver {
    /// Creates an observer timed by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(Timestamp::now))
    }

    /// Creates an observer timed by `clock`.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            engine_stats: None,
            start_time: None,
            clock,
        }
    }

    /// The stats being collected, if an engine is in flight.
    pub fn in_flight(&self) -> Option<&SyncEngineStats> {
        self.engine_stats.as_ref()
    }

    fn in_flight_mut(&mut self, engine: &str) -> Option<&mut SyncEngineStats> {
        let stats = self.engine_stats.as_mut();
        if stats.is_none() {
            debug!(engine, "Stats reported with no engine in flight, ignoring");
        }
        stats
    }
}

impl Default for SyncEngineStatsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SyncEngineStatsObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncEngineStatsObserver")
            .field("engine_stats", &self.engine_stats)
            .field("start_time", &self.start_time)
            .finish_non_exhaustive()
    }
}

impl SyncStatsDelegate for SyncEngineStatsObserver {
    fn engine_will_begin(&mut self, engine: &str) {
        if let Some(previous) = &self.engine_stats {
            debug!(previous = %previous.name, engine, "Discarding unfinished engine stats");
        }
        self.engine_stats = Some(SyncEngineStats::new(engine));
        self.start_time = Some((self.clock)());
        debug!(engine, "Engine sync started");
    }

    fn did_generate_upload_stats(&mut self, engine: &str, stats: SyncUploadStats) {
        if let Some(in_flight) = self.in_flight_mut(engine) {
            in_flight.upload_stats = Some(stats);
        }
    }

    fn did_generate_apply_stats(&mut self, engine: &str, stats: SyncDownloadStats) {
        if let Some(in_flight) = self.in_flight_mut(engine) {
            in_flight.download_stats = Some(stats);
        }
    }

    fn engine_did_end(&mut self, engine: &str, status: SyncStatus) -> SyncEngineStats {
        let mut stats = self
            .engine_stats
            .take()
            .unwrap_or_else(|| SyncEngineStats::new(engine));
        stats.status = status;
        stats.took = match self.start_time.take() {
            Some(start) => (self.clock)().millis_since(start),
            None => 0,
        };
        debug!(engine, took_ms = stats.took, status = ?stats.status, "Engine sync ended");
        stats
    }
}
