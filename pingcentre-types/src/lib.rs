//! Core type definitions for the Ping Centre telemetry client.
//!
//! This crate defines the small, dependency-free types shared by the
//! client and the sync statistics crates:
//! - Client identifiers (UUID v4)
//! - Millisecond wall-clock timestamps
//! - Build/release channels

mod channel;
mod ids;
mod timestamp;

pub use channel::BuildChannel;
pub use ids::ClientId;
pub use timestamp::Timestamp;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown build channel: {0}")]
    UnknownChannel(String),
}
