//! Mounted primitives shared by every launcher component.

use tokio::sync::mpsc;

use crate::primitives::{self, spacer};
use crate::style::{ConditionNotifier, MountedComponent, RedrawRequest, StyledComponent};

/// One mounted instance of every primitive, subscribed to the same
/// notifier. Dropping the skin releases all subscriptions.
pub struct Skin {
    pub heading: MountedComponent,
    pub text: MountedComponent,
    pub text_input: MountedComponent,
    pub view: MountedComponent,
    pub row: MountedComponent,
    pub divider: MountedComponent,
    pub button: MountedComponent,
    pub spacer_horizontal: MountedComponent,
    pub spacer_vertical: MountedComponent,
}

impl Skin {
    #[must_use]
    pub fn mount(notifier: &ConditionNotifier, redraw: Option<mpsc::UnboundedSender<RedrawRequest>>) -> Self {
        let mount = |component: &StyledComponent| match &redraw {
            Some(tx) => component.mount_with_redraw(notifier, tx.clone()),
            None => component.mount(notifier),
        };

        Self {
            heading: mount(&primitives::HEADING),
            text: mount(&primitives::TEXT),
            text_input: mount(&primitives::TEXT_INPUT),
            view: mount(&primitives::VIEW),
            row: mount(&primitives::ROW),
            divider: mount(&primitives::DIVIDER),
            button: mount(&primitives::BUTTON),
            spacer_horizontal: mount(&spacer::HORIZONTAL),
            spacer_vertical: mount(&spacer::VERTICAL),
        }
    }

    fn all(&self) -> [&MountedComponent; 9] {
        [
            &self.heading,
            &self.text,
            &self.text_input,
            &self.view,
            &self.row,
            &self.divider,
            &self.button,
            &self.spacer_horizontal,
            &self.spacer_vertical,
        ]
    }

    /// Whether any primitive's selector layer changed since the last call.
    pub fn take_dirty(&self) -> bool {
        // Every flag is cleared, not just the first dirty one.
        self.all().iter().fold(false, |dirty, component| component.take_dirty() || dirty)
    }
}
