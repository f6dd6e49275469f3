//! Styled component factory.
//!
//! [`create_component`] pairs an element kind with a [`StyleSpec`]. Mounting
//! the result subscribes it to a [`ConditionNotifier`]; the mounted instance
//! keeps its selector layer current and flags itself for redraw when that
//! layer actually changes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use super::conditions::{ConditionKey, ConditionState};
use super::notifier::{ConditionNotifier, Subscription, SubscriptionId};
use super::render::Attributes;
use super::spec::{Props, SelectorTable, StyleSpec};
use super::value::StyleMap;

/// The host element a styled component renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// A run of text.
    Text,
    /// Editable single-line text.
    TextInput,
    /// A box that can carry background, border and padding.
    View,
    /// A focusable box.
    Pressable,
}

/// Sent when a mounted component's selector layer changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawRequest {
    pub subscription: SubscriptionId,
}

/// A component type produced by [`create_component`].
#[derive(Debug, Clone)]
pub struct StyledComponent {
    element: ElementKind,
    spec: Arc<StyleSpec>,
}

/// Builds a styled component type from an element kind and a skin.
#[must_use]
pub fn create_component(element: ElementKind, spec: StyleSpec) -> StyledComponent {
    StyledComponent {
        element,
        spec: Arc::new(spec),
    }
}

impl StyledComponent {
    #[must_use]
    pub fn element(&self) -> ElementKind {
        self.element
    }

    #[must_use]
    pub fn spec(&self) -> &StyleSpec {
        &self.spec
    }

    /// Resolves once against an explicit state, without subscribing.
    #[must_use]
    pub fn resolve(&self, props: &Props, state: &ConditionState, explicit: Option<&StyleMap>) -> StyleMap {
        self.spec.resolve(props, state, explicit)
    }

    /// Subscribes an instance to `notifier`.
    #[must_use]
    pub fn mount(&self, notifier: &ConditionNotifier) -> MountedComponent {
        self.mount_inner(notifier, None)
    }

    /// Like [`mount`](Self::mount), also sending a [`RedrawRequest`] on
    /// `redraw` whenever the selector layer changes.
    #[must_use]
    pub fn mount_with_redraw(
        &self,
        notifier: &ConditionNotifier,
        redraw: mpsc::UnboundedSender<RedrawRequest>,
    ) -> MountedComponent {
        self.mount_inner(notifier, Some(redraw))
    }

    fn mount_inner(
        &self,
        notifier: &ConditionNotifier,
        redraw: Option<mpsc::UnboundedSender<RedrawRequest>>,
    ) -> MountedComponent {
        let selectors = Arc::new(Mutex::new(SelectorTable::new()));
        let dirty = Arc::new(AtomicBool::new(false));
        let id_slot: Arc<Mutex<SubscriptionId>> = Arc::new(Mutex::new(0));

        let listener = {
            let spec = Arc::clone(&self.spec);
            let selectors = Arc::clone(&selectors);
            let dirty = Arc::clone(&dirty);
            let id_slot = Arc::clone(&id_slot);
            move |keys: &[ConditionKey], state: &ConditionState| {
                let next = spec.selectors.active_table(state);
                let changed = match selectors.lock() {
                    Ok(mut current) if *current != next => {
                        *current = next;
                        true
                    }
                    _ => false,
                };

                // The initial call only seeds the layer; the first draw picks it up.
                if changed && !keys.is_empty() {
                    dirty.store(true, Ordering::Release);
                    if let Some(tx) = &redraw {
                        let subscription = id_slot.lock().map(|id| *id).unwrap_or(0);
                        let _ = tx.send(RedrawRequest { subscription });
                    }
                }
            }
        };

        let subscription = notifier.subscribe(listener);
        if let Ok(mut id) = id_slot.lock() {
            *id = subscription.id();
        }

        MountedComponent {
            component: self.clone(),
            selectors,
            dirty,
            subscription: Some(subscription),
        }
    }
}

/// A live instance of a [`StyledComponent`].
///
/// Dropping it releases the notifier subscription.
pub struct MountedComponent {
    component: StyledComponent,
    selectors: Arc<Mutex<SelectorTable>>,
    dirty: Arc<AtomicBool>,
    subscription: Option<Subscription>,
}

impl MountedComponent {
    #[must_use]
    pub fn element(&self) -> ElementKind {
        self.component.element
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Id carried by this instance's [`RedrawRequest`]s while mounted.
    #[must_use]
    pub fn subscription_id(&self) -> Option<SubscriptionId> {
        self.subscription.as_ref().map(Subscription::id)
    }

    /// Returns and clears the "selector layer changed" flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    /// The combined selector table currently in effect.
    #[must_use]
    pub fn active_selectors(&self) -> SelectorTable {
        self.selectors.lock().map(|table| table.clone()).unwrap_or_default()
    }

    /// Resolves the flattened style for `props`.
    #[must_use]
    pub fn resolve(&self, props: &Props, explicit: Option<&StyleMap>) -> StyleMap {
        let selectors = self.active_selectors();
        self.component.spec.resolve_with(props, &selectors, explicit)
    }

    /// Resolves and projects onto terminal attributes.
    #[must_use]
    pub fn attributes(&self, props: &Props, explicit: Option<&StyleMap>) -> Attributes {
        Attributes::from_style(self.component.element, &self.resolve(props, explicit))
    }

    /// Releases the subscription. Later condition changes no longer reach
    /// this instance.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}
