//! Discovered development servers.

use serde::{Deserialize, Serialize};

/// Origin tag for servers found by probing local ports.
pub const SOURCE_DESKTOP: &str = "desktop";

/// A local development server that answered its liveness probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Packager {
    /// Display string
    pub description: String,
    pub url: String,
    /// Where the entry came from
    pub source: String,
    pub hide_image: bool,
}

impl Packager {
    /// An entry for a server found at `address` by a local probe.
    #[must_use]
    pub fn local(address: &str) -> Self {
        Self {
            description: address.to_string(),
            url: address.to_string(),
            source: SOURCE_DESKTOP.to_string(),
            hide_image: true,
        }
    }
}
