//! Collection endpoints, selected by build channel.

use pingcentre_types::BuildChannel;

pub const STAGING_URL: &str = "https://onyx_tiles.stage.mozaws.net/v3/links/ping-centre";
pub const PRODUCTION_URL: &str = "https://tiles.services.mozilla.com/v3/links/ping-centre";

/// Where pings are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Staging,
    Production,
}

impl Endpoint {
    /// Pre-release builds report to staging; only release builds reach
    /// production.
    #[must_use]
    pub const fn for_channel(channel: BuildChannel) -> Self {
        match channel {
            BuildChannel::Developer
            | BuildChannel::Nightly
            | BuildChannel::Aurora
            | BuildChannel::Beta => Endpoint::Staging,
            BuildChannel::Release => Endpoint::Production,
        }
    }

    #[must_use]
    pub const fn url(&self) -> &'static str {
        match self {
            Endpoint::Staging => STAGING_URL,
            Endpoint::Production => PRODUCTION_URL,
        }
    }
}

/// Resolves the collection URL for a build channel.
#[must_use]
pub const fn resolve(channel: BuildChannel) -> &'static str {
    Endpoint::for_channel(channel).url()
}
