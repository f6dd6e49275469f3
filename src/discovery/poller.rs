//! Repeated discovery with cancellation and coalescing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{Packager, PackagerSource};

/// Lifecycle of the packager query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStatus {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// First pass in flight.
    Loading,
    /// At least one pass completed.
    Success,
}

/// Observable poller state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollSnapshot {
    pub data: Vec<Packager>,
    pub status: QueryStatus,
    /// A single pass is in flight.
    pub fetching: bool,
    /// A multi-pass poll is running.
    pub polling: bool,
    pub passes: u64,
    pub last_updated: Option<DateTime<Utc>>,
}

impl PollSnapshot {
    /// Busy from the caller's point of view: fetching or polling.
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.fetching || self.polling
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PollEvent {
    Updated(PollSnapshot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Completed,
    /// Another pass or poll was already running; this request was dropped.
    Coalesced,
    /// The poller was unmounted before the request finished.
    Cancelled,
}

/// Drives discovery passes for one consumer.
///
/// Cloning gives another handle onto the same state. [`unmount`] stops all
/// further state changes: passes still in flight finish but their results
/// are discarded.
///
/// [`unmount`]: PackagerPoller::unmount
#[derive(Clone)]
pub struct PackagerPoller {
    source: Arc<dyn PackagerSource>,
    state: Arc<Mutex<PollSnapshot>>,
    mounted: Arc<AtomicBool>,
    busy: Arc<AtomicBool>,
    events: Option<mpsc::UnboundedSender<PollEvent>>,
}

/// Releases the busy flag when a request ends, including when its future is
/// dropped part way through.
struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl PackagerPoller {
    #[must_use]
    pub fn new(source: Arc<dyn PackagerSource>) -> Self {
        Self {
            source,
            state: Arc::new(Mutex::new(PollSnapshot::default())),
            mounted: Arc::new(AtomicBool::new(true)),
            busy: Arc::new(AtomicBool::new(false)),
            events: None,
        }
    }

    /// Also publish every state change on `events`.
    #[must_use]
    pub fn with_events(mut self, events: mpsc::UnboundedSender<PollEvent>) -> Self {
        self.events = Some(events);
        self
    }

    #[must_use]
    pub fn snapshot(&self) -> PollSnapshot {
        self.state.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn data(&self) -> Vec<Packager> {
        self.snapshot().data
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.snapshot().is_fetching()
    }

    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.snapshot().polling
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Stops all further state updates and events.
    pub fn unmount(&self) {
        if self.mounted.swap(false, Ordering::AcqRel) {
            log::debug!("Packager poller unmounted");
        }
    }

    /// Runs one discovery pass.
    pub async fn refetch(&self) -> PollOutcome {
        let Some(_guard) = self.try_begin() else {
            log::debug!("Refetch requested while busy; coalesced");
            return PollOutcome::Coalesced;
        };
        self.run_pass().await
    }

    /// Runs `amount` passes, waiting `interval` after each.
    pub async fn poll(&self, amount: u32, interval: Duration) -> PollOutcome {
        let Some(_guard) = self.try_begin() else {
            log::debug!("Poll requested while busy; coalesced");
            return PollOutcome::Coalesced;
        };

        if !self.update(|s| s.polling = true) {
            return PollOutcome::Cancelled;
        }
        log::info!("Polling for local packagers: {amount} passes every {interval:?}");

        for _ in 0..amount {
            if self.run_pass().await == PollOutcome::Cancelled {
                return PollOutcome::Cancelled;
            }
            tokio::time::sleep(interval).await;
            if !self.is_mounted() {
                return PollOutcome::Cancelled;
            }
        }

        if !self.update(|s| s.polling = false) {
            return PollOutcome::Cancelled;
        }
        PollOutcome::Completed
    }

    pub fn spawn_refetch(&self) -> JoinHandle<PollOutcome> {
        let poller = self.clone();
        tokio::spawn(async move { poller.refetch().await })
    }

    pub fn spawn_poll(&self, amount: u32, interval: Duration) -> JoinHandle<PollOutcome> {
        let poller = self.clone();
        tokio::spawn(async move { poller.poll(amount, interval).await })
    }

    fn try_begin(&self) -> Option<BusyGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(Arc::clone(&self.busy)))
    }

    async fn run_pass(&self) -> PollOutcome {
        let started = self.update(|s| {
            s.fetching = true;
            if s.status == QueryStatus::Idle {
                s.status = QueryStatus::Loading;
            }
        });
        if !started {
            return PollOutcome::Cancelled;
        }

        let data = self.source.fetch().await;

        let applied = self.update(|s| {
            s.data = data;
            s.status = QueryStatus::Success;
            s.fetching = false;
            s.passes += 1;
            s.last_updated = Some(Utc::now());
        });
        if applied {
            PollOutcome::Completed
        } else {
            PollOutcome::Cancelled
        }
    }

    /// Applies `mutate` and publishes the result. Returns `false` without
    /// touching anything once unmounted.
    fn update<F>(&self, mutate: F) -> bool
    where
        F: FnOnce(&mut PollSnapshot),
    {
        if !self.is_mounted() {
            return false;
        }

        let snapshot = match self.state.lock() {
            Ok(mut state) => {
                mutate(&mut state);
                state.clone()
            }
            Err(_) => return false,
        };

        if let Some(events) = &self.events {
            let _ = events.send(PollEvent::Updated(snapshot));
        }
        true
    }
}
