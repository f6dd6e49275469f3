//! Hand-off to whatever opens the selected app.

use std::sync::Mutex;

/// Opens an app from a development server URL.
pub trait AppLoader: Send + Sync {
    fn load_app(&self, url: &str) -> anyhow::Result<()>;
}

/// Loader that remembers every URL it was asked to open.
#[derive(Debug, Default)]
pub struct RecordingLoader {
    urls: Mutex<Vec<String>>,
}

impl RecordingLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs in the order they were loaded.
    #[must_use]
    pub fn loaded(&self) -> Vec<String> {
        self.urls.lock().map(|urls| urls.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.loaded().pop()
    }
}

impl AppLoader for RecordingLoader {
    fn load_app(&self, url: &str) -> anyhow::Result<()> {
        log::info!("Loading app from {url}");
        self.urls
            .lock()
            .map_err(|_| anyhow::anyhow!("loader state poisoned"))?
            .push(url.to_string());
        Ok(())
    }
}
