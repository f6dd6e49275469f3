//! Local development server discovery.
//!
//! A discovery pass probes `{base}:{port}/{status_path}` for every candidate
//! port at once and keeps the ports that answered HTTP 200. Failures of any
//! kind count as "not live" and are never surfaced. [`PackagerPoller`]
//! repeats passes for servers that start after the launcher opened.

pub mod packager;
pub mod poller;
pub mod probe;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;

use crate::config::DiscoveryConfig;

pub use packager::Packager;
pub use poller::{PackagerPoller, PollEvent, PollOutcome, PollSnapshot, QueryStatus};
pub use probe::{HttpProbe, ProbeError, StatusProbe};

/// Probes every port in `ports` and returns the live ones in input order.
pub async fn discover<P>(probe: &P, ports: &[u16], base_address: &str, status_path: &str) -> Vec<Packager>
where
    P: StatusProbe + ?Sized,
{
    let base = base_address.trim_end_matches('/');
    let path = status_path.trim_start_matches('/');

    let addresses: Vec<String> = ports.iter().map(|port| format!("{base}:{port}")).collect();
    let checks = addresses.iter().map(|address| async move {
        let url = format!("{address}/{path}");
        match probe.probe(&url).await {
            Ok(live) => live,
            Err(e) => {
                log::debug!("Probe {url} failed: {e}");
                false
            }
        }
    });

    let results = join_all(checks).await;

    addresses
        .iter()
        .zip(results)
        .filter(|(_, live)| *live)
        .map(|(address, _)| Packager::local(address))
        .collect()
}

/// Produces the current set of packagers for one discovery pass.
#[async_trait]
pub trait PackagerSource: Send + Sync {
    async fn fetch(&self) -> Vec<Packager>;
}

/// Discovery against the configured ports.
pub struct LocalPackagers {
    probe: Arc<dyn StatusProbe>,
    ports: Vec<u16>,
    base_address: String,
    status_path: String,
}

impl LocalPackagers {
    #[must_use]
    pub fn new(probe: Arc<dyn StatusProbe>, config: &DiscoveryConfig) -> Self {
        Self {
            probe,
            ports: config.ports.clone(),
            base_address: config.resolved_base_address(),
            status_path: config.status_path.clone(),
        }
    }

    /// HTTP discovery with the configured timeout.
    pub fn from_config(config: &DiscoveryConfig) -> Result<Self, ProbeError> {
        let probe = HttpProbe::new(Duration::from_millis(config.probe_timeout_ms))?;
        Ok(Self::new(Arc::new(probe), config))
    }
}

#[async_trait]
impl PackagerSource for LocalPackagers {
    async fn fetch(&self) -> Vec<Packager> {
        let packagers = discover(self.probe.as_ref(), &self.ports, &self.base_address, &self.status_path).await;
        log::info!(
            "Discovery pass over {} ports found {} packagers",
            self.ports.len(),
            packagers.len()
        );
        if let Ok(json) = serde_json::to_string(&packagers) {
            log::debug!("Packagers: {json}");
        }
        packagers
    }
}
