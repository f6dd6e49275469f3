//! Status bar component

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::{layout::Alignment, layout::Rect, widgets::Paragraph, Frame};

use crate::constants::{STATUS_HINTS, STATUS_URL_HINTS};
use crate::style::Props;
use crate::ui::core::{Action, Component};
use crate::ui::skin::Skin;

/// One line of key hints, replaced by an error message while one is shown
pub struct StatusBar {
    skin: Arc<Skin>,
    url_input_open: bool,
    error_message: Option<String>,
}

impl StatusBar {
    pub fn new(skin: Arc<Skin>) -> Self {
        Self {
            skin,
            url_input_open: false,
            error_message: None,
        }
    }

    pub fn set_url_input_open(&mut self, open: bool) {
        self.url_input_open = open;
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Text currently shown in the bar
    pub fn text(&self) -> &str {
        match &self.error_message {
            Some(message) => message.as_str(),
            None if self.url_input_open => STATUS_URL_HINTS,
            None => STATUS_HINTS,
        }
    }
}

impl Component for StatusBar {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        // Any key press clears a pending error
        if self.error_message.is_some() {
            Action::DismissMessage
        } else {
            Action::None
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowError(message) => {
                log::warn!("{message}");
                self.error_message = Some(message);
                Action::None
            }
            Action::DismissMessage => {
                self.error_message = None;
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let color = if self.error_message.is_some() { "error" } else { "secondary" };
        let text = self
            .skin
            .text
            .attributes(&Props::new().with("size", "small").with("color", color), None);

        let status_bar = Paragraph::new(self.text().to_string())
            .alignment(Alignment::Center)
            .style(text.style);
        f.render_widget(status_bar, rect);
    }
}
