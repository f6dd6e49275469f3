//! Refetch button with a status dot

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::{GLYPH_REFRESH, GLYPH_STATUS_DOT, TEXT_NOT_FOUND, TEXT_REFETCH, TEXT_SEARCHING};
use crate::discovery::{PollSnapshot, QueryStatus};
use crate::style::Props;
use crate::ui::core::{Action, Component};
use crate::ui::skin::Skin;

pub struct FetchPackagersRow {
    skin: Arc<Skin>,
    is_fetching: bool,
    not_found: bool,
}

impl FetchPackagersRow {
    pub const HEIGHT: u16 = 2;

    pub fn new(skin: Arc<Skin>) -> Self {
        Self {
            skin,
            is_fetching: false,
            not_found: false,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    /// The label currently shown on the button
    pub fn label(&self) -> &'static str {
        if self.is_fetching {
            TEXT_SEARCHING
        } else {
            TEXT_REFETCH
        }
    }

    fn apply(&mut self, snapshot: &PollSnapshot) {
        self.is_fetching = snapshot.is_fetching();
        self.not_found = snapshot.status == QueryStatus::Success && snapshot.data.is_empty();
    }
}

impl Component for FetchPackagersRow {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            // Disabled while a search is running
            KeyCode::Char('r') if !self.is_fetching => Action::Refetch,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::PollUpdated(snapshot) = &action {
            self.apply(snapshot);
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let button = self.skin.button.attributes(
            &Props::new()
                .with("px", "medium")
                .flag("disabled", self.is_fetching),
            None,
        );
        let indicator_bg = if self.is_fetching { "info" } else { "default" };
        let indicator = self.skin.view.attributes(&Props::new().with("bg", indicator_bg), None);
        let label = self.skin.text.attributes(&Props::new().with("size", "large"), None);
        let secondary = self.skin.text.attributes(&Props::new().with("color", "secondary"), None);

        let dot_style = indicator.style.bg.map(|c| label.style.fg(c)).unwrap_or(label.style);
        let mut spans = vec![
            Span::styled(format!("{GLYPH_STATUS_DOT} "), dot_style),
            Span::styled(self.label(), label.style),
        ];
        if !self.is_fetching {
            spans.push(Span::styled(format!(" {GLYPH_REFRESH}"), label.style));
        }

        let mut lines = vec![Line::from(spans)];
        if self.not_found && !self.is_fetching {
            lines.push(Line::styled(format!("  {TEXT_NOT_FOUND}"), secondary.style));
        }

        let paragraph = Paragraph::new(lines).style(button.style).block(button.block());
        f.render_widget(paragraph, rect);
    }
}
