//! Screen header: terminal icon plus the "Development servers" heading

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::HEADER_DEVELOPMENT_SERVERS;
use crate::style::Props;
use crate::ui::core::{Action, Component};
use crate::ui::skin::Skin;

pub struct AppHeader {
    skin: Arc<Skin>,
}

impl AppHeader {
    /// Heading line plus the divider below it
    pub const HEIGHT: u16 = 2;

    pub fn new(skin: Arc<Skin>) -> Self {
        Self { skin }
    }
}

impl Component for AppHeader {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let row = self.skin.row.attributes(&Props::new().with("px", "medium").with("align", "center"), None);
        let icon = self.skin.text.attributes(&Props::new().with("type", "mono"), None);
        let heading = self
            .skin
            .heading
            .attributes(&Props::new().with("size", "small").with("color", "secondary"), None);

        let line = Line::from(vec![
            Span::styled(">_ ", icon.style),
            Span::styled(HEADER_DEVELOPMENT_SERVERS, heading.style),
        ]);

        let [title, rule] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(rect);
        f.render_widget(Paragraph::new(line).block(row.block()), title);

        let divider = self
            .skin
            .divider
            .attributes(&Props::new().with("weight", "thin").with("mx", "small"), None);
        if let Some(color) = divider.border {
            let block = Block::default()
                .borders(Borders::TOP)
                .border_type(divider.border_type)
                .border_style(Style::default().fg(color));
            f.render_widget(block, divider.inset(rule));
        }
    }
}
