//! Shared observable for environment conditions.
//!
//! The notifier is the single writer of [`ConditionState`]. Environment
//! callbacks (appearance, accessibility, resize) update it; mounted
//! components subscribe and read snapshots. It is passed around by handle
//! rather than living in a global.
//!
//! Deliveries are serialized: every listener sees state changes in the order
//! they were applied. A listener may read the notifier but must not write to
//! it or subscribe from inside the callback.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use async_trait::async_trait;

use super::conditions::{AccessibilityFlags, ColorScheme, Condition, ConditionKey, ConditionState, Dimension};

pub type SubscriptionId = u64;

/// Listener invoked with the keys that changed and the new snapshot.
/// An empty key list means "initial state".
pub type Listener = Box<dyn Fn(&[ConditionKey], &ConditionState) + Send + Sync>;

struct Inner {
    state: ConditionState,
    listeners: BTreeMap<SubscriptionId, Arc<Listener>>,
    next_id: SubscriptionId,
}

/// Cloneable handle to the shared condition state.
#[derive(Clone)]
pub struct ConditionNotifier {
    inner: Arc<Mutex<Inner>>,
    /// Held from mutation until the last listener returns.
    dispatch: Arc<Mutex<()>>,
}

impl Default for ConditionNotifier {
    fn default() -> Self {
        Self::new(ConditionState::default())
    }
}

impl ConditionNotifier {
    #[must_use]
    pub fn new(initial: ConditionState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: initial,
                listeners: BTreeMap::new(),
                next_id: 1,
            })),
            dispatch: Arc::new(Mutex::new(())),
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> ConditionState {
        self.inner.lock().map(|inner| inner.state.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.lock().map(|inner| inner.listeners.len()).unwrap_or(0)
    }

    /// Registers a listener and immediately calls it with the current state.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped or explicitly unsubscribed.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&[ConditionKey], &ConditionState) + Send + Sync + 'static,
    {
        let listener: Arc<Listener> = Arc::new(Box::new(listener));
        let _delivery = self.lock_dispatch();

        let (id, snapshot) = match self.inner.lock() {
            Ok(mut inner) => {
                let id = inner.next_id;
                inner.next_id += 1;
                inner.listeners.insert(id, Arc::clone(&listener));
                (id, inner.state.clone())
            }
            Err(_) => (0, ConditionState::default()),
        };

        listener(&[], &snapshot);

        Subscription {
            id,
            notifier: Arc::downgrade(&self.inner),
        }
    }

    pub fn set_color_scheme(&self, scheme: Option<ColorScheme>) {
        self.update(
            &[
                ConditionKey::Flag(Condition::Light),
                ConditionKey::Flag(Condition::Dark),
            ],
            |state| state.set_color_scheme(scheme),
        );
    }

    pub fn set_accessibility(&self, condition: Condition, active: bool) {
        self.update(&[ConditionKey::Flag(condition)], |state| state.set_flag(condition, active));
    }

    pub fn set_accessibility_flags(&self, flags: AccessibilityFlags) {
        let keys: Vec<ConditionKey> = Condition::ACCESSIBILITY.iter().map(|c| ConditionKey::Flag(*c)).collect();
        self.update(&keys, |state| {
            for (condition, active) in flags.entries() {
                state.set_flag(condition, active);
            }
        });
    }

    pub fn set_dimensions(&self, width: f64, height: f64) {
        self.update(
            &[
                ConditionKey::Dimension(Dimension::Width),
                ConditionKey::Dimension(Dimension::Height),
            ],
            |state| {
                state.width = width;
                state.height = height;
            },
        );
    }

    /// Applies the synchronous part of `source` now and fetches the
    /// accessibility flags in the background.
    ///
    /// Until the fetch completes every accessibility flag reads as inactive.
    pub fn bootstrap<S>(&self, source: Arc<S>) -> tokio::task::JoinHandle<()>
    where
        S: ConditionSource + 'static,
    {
        self.set_color_scheme(source.color_scheme());
        let (width, height) = source.dimensions();
        self.set_dimensions(width, height);

        let notifier = self.clone();
        tokio::spawn(async move {
            let flags = source.accessibility_flags().await;
            log::debug!("Initial accessibility flags resolved: {flags:?}");
            notifier.set_accessibility_flags(flags);
        })
    }

    fn update<F>(&self, keys: &[ConditionKey], mutate: F)
    where
        F: FnOnce(&mut ConditionState),
    {
        // Listeners run outside the state lock so they may read the notifier.
        let _delivery = self.lock_dispatch();
        let (snapshot, listeners) = match self.inner.lock() {
            Ok(mut inner) => {
                mutate(&mut inner.state);
                let listeners: Vec<Arc<Listener>> = inner.listeners.values().cloned().collect();
                (inner.state.clone(), listeners)
            }
            Err(_) => return,
        };

        for listener in listeners {
            listener(keys, &snapshot);
        }
    }

    fn lock_dispatch(&self) -> MutexGuard<'_, ()> {
        // A panicking listener must not stop later deliveries.
        self.dispatch.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Registration handle returned by [`ConditionNotifier::subscribe`].
pub struct Subscription {
    id: SubscriptionId,
    notifier: Weak<Mutex<Inner>>,
}

impl Subscription {
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Removes the listener. Dropping the subscription does the same.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.notifier.upgrade() {
            if let Ok(mut inner) = inner.lock() {
                inner.listeners.remove(&self.id);
            }
        }
    }
}

/// Where the initial and ongoing environment conditions come from.
#[async_trait]
pub trait ConditionSource: Send + Sync {
    /// The current color scheme, if the host reports one.
    fn color_scheme(&self) -> Option<ColorScheme>;

    /// Viewport width and height.
    fn dimensions(&self) -> (f64, f64);

    /// Accessibility toggles. May take a while to resolve.
    async fn accessibility_flags(&self) -> AccessibilityFlags;
}
