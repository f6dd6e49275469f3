//! The launcher home screen.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

use crate::config::PollingConfig;
use crate::discovery::{PackagerPoller, PackagerSource, PollEvent};
use crate::style::{ConditionNotifier, Props, RedrawRequest};
use crate::ui::components::{
    AppHeader, DebugPanel, FetchPackagersRow, PackagersList, ServerInstructions, StatusBar, UrlDropdown,
};
use crate::ui::core::{Action, AppLoader, Component, EventType};
use crate::ui::layout::LayoutManager;
use crate::ui::skin::Skin;

pub struct LauncherApp {
    // Component composition
    header: AppHeader,
    packagers: PackagersList,
    instructions: ServerInstructions,
    fetch_row: FetchPackagersRow,
    url_dropdown: UrlDropdown,
    status_bar: StatusBar,
    debug_panel: DebugPanel,

    // Services
    skin: Arc<Skin>,
    notifier: ConditionNotifier,
    poller: PackagerPoller,
    loader: Arc<dyn AppLoader>,
    polling: PollingConfig,
    poll_rx: mpsc::UnboundedReceiver<PollEvent>,
    redraw_rx: mpsc::UnboundedReceiver<RedrawRequest>,

    // Simple UI state
    should_quit: bool,
    selected_url: Option<String>,
}

impl LauncherApp {
    pub fn new(
        notifier: ConditionNotifier,
        source: Arc<dyn PackagerSource>,
        loader: Arc<dyn AppLoader>,
        polling: PollingConfig,
    ) -> Self {
        let (poll_tx, poll_rx) = mpsc::unbounded_channel();
        let (redraw_tx, redraw_rx) = mpsc::unbounded_channel();
        let skin = Arc::new(Skin::mount(&notifier, Some(redraw_tx)));

        Self {
            header: AppHeader::new(Arc::clone(&skin)),
            packagers: PackagersList::new(Arc::clone(&skin)),
            instructions: ServerInstructions::new(Arc::clone(&skin)),
            fetch_row: FetchPackagersRow::new(Arc::clone(&skin)),
            url_dropdown: UrlDropdown::new(Arc::clone(&skin)),
            status_bar: StatusBar::new(Arc::clone(&skin)),
            debug_panel: DebugPanel::new(),
            skin,
            notifier,
            poller: PackagerPoller::new(source).with_events(poll_tx),
            loader,
            polling,
            poll_rx,
            redraw_rx,
            should_quit: false,
            selected_url: None,
        }
    }

    /// Start the first discovery pass
    pub fn mount(&mut self) {
        log::info!("Launcher mounted; starting discovery");
        self.poller.spawn_refetch();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// URL handed to the loader, once the user picked one
    pub fn selected_url(&self) -> Option<&str> {
        self.selected_url.as_deref()
    }

    pub fn poller(&self) -> &PackagerPoller {
        &self.poller
    }

    pub fn packagers(&self) -> &PackagersList {
        &self.packagers
    }

    pub fn fetch_row(&self) -> &FetchPackagersRow {
        &self.fetch_row
    }

    pub fn url_dropdown(&self) -> &UrlDropdown {
        &self.url_dropdown
    }

    pub fn status_bar(&self) -> &StatusBar {
        &self.status_bar
    }

    pub fn debug_panel(&self) -> &DebugPanel {
        &self.debug_panel
    }

    /// Drain poller events as actions
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(PollEvent::Updated(snapshot)) = self.poll_rx.try_recv() {
            actions.push(Action::PollUpdated(snapshot));
        }
        actions
    }

    /// Whether a condition change restyled any primitive since the last call
    pub fn take_redraw(&mut self) -> bool {
        let mut requested = false;
        while self.redraw_rx.try_recv().is_ok() {
            requested = true;
        }
        self.skin.take_dirty() || requested
    }

    /// Apply the poller's current state without waiting for its event
    pub fn sync_poll_state(&mut self) {
        self.dispatch(Action::PollUpdated(self.poller.snapshot()));
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(width, height) => Action::Resize(width, height),
            EventType::Tick | EventType::Other => Action::None,
        };
        self.dispatch(action);
        Ok(())
    }

    /// Run an action through every component, then handle what is left at app level
    pub fn dispatch(&mut self, action: Action) {
        let action = self.update(action);
        let follow_up = self.handle_app_action(action);
        if follow_up != Action::None {
            let follow_up = self.update(follow_up);
            self.handle_app_action(follow_up);
        }
        self.status_bar.set_url_input_open(self.url_dropdown.is_open());
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            log::debug!("Global key: Ctrl+C - quitting");
            return Action::Quit;
        }

        // Dialog has priority when visible
        if self.debug_panel.is_visible() {
            return self.debug_panel.handle_key_events(key);
        }

        if self.status_bar.error_message().is_some() {
            let dismiss = self.status_bar.handle_key_events(key);
            self.status_bar.update(dismiss);
        }

        if self.url_dropdown.is_open() {
            return self.url_dropdown.handle_key_events(key);
        }

        let action = self.packagers.handle_key_events(key);
        if action != Action::None {
            return action;
        }
        let action = self.fetch_row.handle_key_events(key);
        if action != Action::None {
            return action;
        }
        let action = self.url_dropdown.handle_key_events(key);
        if action != Action::None {
            return action;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('G') => Action::ToggleLogs,
            _ => Action::None,
        }
    }

    fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Refetch => {
                if self.poller.is_fetching() {
                    log::debug!("Refetch ignored: discovery already running");
                } else {
                    self.poller.spawn_poll(self.polling.poll_amount, self.polling.interval());
                }
                Action::None
            }
            Action::OpenUrl(url) => match self.loader.load_app(&url) {
                Ok(()) => {
                    log::info!("Opening {url}");
                    self.selected_url = Some(url);
                    self.should_quit = true;
                    Action::None
                }
                Err(e) => Action::ShowError(format!("❌ Failed to open {url}: {e}")),
            },
            Action::Resize(width, height) => {
                self.notifier.set_dimensions(f64::from(width), f64::from(height));
                Action::None
            }
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for LauncherApp {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.debug_panel.update(action);
        let action = self.url_dropdown.update(action);
        let action = self.packagers.update(action);
        let action = self.fetch_row.update(action);
        self.status_bar.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let body_height = if self.packagers.is_empty() {
            ServerInstructions::HEIGHT
        } else {
            self.packagers.height()
        };
        let gap = self
            .skin
            .spacer_vertical
            .attributes(&Props::new().with("size", "small"), None)
            .height
            .unwrap_or(1);
        let layout = LayoutManager::home_layout(
            rect,
            [
                AppHeader::HEIGHT,
                body_height,
                FetchPackagersRow::HEIGHT,
                self.url_dropdown.height(),
            ],
            gap,
        );

        self.header.render(f, layout.header);
        if self.packagers.is_empty() {
            self.instructions.render(f, layout.body);
        } else {
            self.packagers.render(f, layout.body);
        }
        self.fetch_row.render(f, layout.fetch_row);
        self.url_dropdown.render(f, layout.url_dropdown);
        self.status_bar.render(f, layout.status);

        // Render dialog on top if visible
        self.debug_panel.render(f, rect);
    }
}

impl Drop for LauncherApp {
    fn drop(&mut self) {
        // In-flight passes must not touch state after the screen is gone.
        self.poller.unmount();
    }
}
