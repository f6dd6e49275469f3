//! Shown in place of the list while no server has been found

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::constants::{TEXT_SELECT_SERVER, TEXT_START_COMMAND, TEXT_START_SERVER};
use crate::style::Props;
use crate::ui::core::{Action, Component};
use crate::ui::skin::Skin;

pub struct ServerInstructions {
    skin: Arc<Skin>,
}

impl ServerInstructions {
    /// Rows needed: two lines of text, the bordered command box and spacing
    pub const HEIGHT: u16 = 7;

    pub fn new(skin: Arc<Skin>) -> Self {
        Self { skin }
    }
}

impl Component for ServerInstructions {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let container = self.skin.view.attributes(&Props::new().with("px", "medium"), None);
        let text = self.skin.text.attributes(&Props::new().with("size", "medium"), None);
        let command_box = self.skin.view.attributes(
            &Props::new()
                .with("bg", "secondary")
                .with("border", "default")
                .with("rounded", "medium")
                .with("px", "small"),
            None,
        );
        let mono = self.skin.text.attributes(&Props::new().with("type", "mono"), None);

        let inner = container.block().inner(rect);
        f.render_widget(container.block(), rect);

        let [intro, _, command, _, outro] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        f.render_widget(Paragraph::new(Line::styled(TEXT_START_SERVER, text.style)), intro);
        f.render_widget(
            Paragraph::new(Line::styled(TEXT_START_COMMAND, mono.style)).block(command_box.block()),
            command,
        );
        f.render_widget(
            Paragraph::new(Line::styled(TEXT_SELECT_SERVER, text.style)).wrap(Wrap { trim: true }),
            outro,
        );
    }
}
