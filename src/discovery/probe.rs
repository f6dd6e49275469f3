//! Liveness probes.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
}

/// Checks whether a status endpoint is live.
#[async_trait]
pub trait StatusProbe: Send + Sync {
    /// `Ok(true)` only for a definite "live" answer. Transport failures are
    /// errors; callers decide whether to surface them.
    async fn probe(&self, url: &str) -> Result<bool, ProbeError>;
}

/// `GET` probe that treats HTTP 200 as live.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    http: reqwest::Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            // Probes target the local network
            .no_proxy()
            .build()
            .map_err(|e| ProbeError::ClientBuild(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl StatusProbe for HttpProbe {
    async fn probe(&self, url: &str) -> Result<bool, ProbeError> {
        let response = self.http.get(url).send().await.map_err(|e| ProbeError::Request {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        Ok(response.status().as_u16() == 200)
    }
}
