//! Build/release channels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The release tier an application build belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildChannel {
    Developer,
    Nightly,
    Aurora,
    Beta,
    Release,
}

impl BuildChannel {
    /// All channels, in release order.
    pub const ALL: [BuildChannel; 5] = [
        BuildChannel::Developer,
        BuildChannel::Nightly,
        BuildChannel::Aurora,
        BuildChannel::Beta,
        BuildChannel::Release,
    ];

    /// Returns the lowercase channel name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Developer => "developer",
            Self::Nightly => "nightly",
            Self::Aurora => "aurora",
            Self::Beta => "beta",
            Self::Release => "release",
        }
    }

    /// Whether this is a public release build.
    #[must_use]
    pub const fn is_release(&self) -> bool {
        matches!(self, Self::Release)
    }
}

impl fmt::Display for BuildChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildChannel {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::Error::UnknownChannel(s.to_string()))
    }
}
