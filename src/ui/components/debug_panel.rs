//! Overlay listing the in-memory log buffer

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::logger::LOG_BUFFER;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

#[derive(Default)]
pub struct DebugPanel {
    visible: bool,
    scroll_offset: usize,
}

impl DebugPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn line_style(message: &str) -> Style {
        if message.contains("ERROR") {
            Style::default().fg(Color::Red)
        } else if message.contains("WARN") {
            Style::default().fg(Color::Yellow)
        } else if message.contains("DEBUG") {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

impl Component for DebugPanel {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::ToggleLogs,
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ToggleLogs => {
                self.visible = !self.visible;
                self.scroll_offset = 0;
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.visible {
            return;
        }

        let area = LayoutManager::centered_rect(90, 80, rect);
        f.render_widget(Clear, area);
        let block = Block::default()
            .title(DIALOG_TITLE_DEBUG_LOGS)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let logs = LOG_BUFFER.get_logs();
        if logs.is_empty() {
            let empty = Paragraph::new("No debug logs available")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            f.render_widget(empty, inner);
            return;
        }

        self.scroll_offset = self.scroll_offset.min(logs.len().saturating_sub(1));
        let items: Vec<ListItem> = logs
            .iter()
            .skip(self.scroll_offset)
            .take(inner.height as usize)
            .map(|log| match log.find("] ") {
                Some(end) => ListItem::new(Line::from(vec![
                    Span::styled(log[..end + 2].to_string(), Style::default().fg(Color::DarkGray)),
                    Span::styled(log[end + 2..].to_string(), Self::line_style(log)),
                ])),
                None => ListItem::new(Line::styled(log.clone(), Self::line_style(log))),
            })
            .collect();
        f.render_widget(List::new(items), inner);
    }
}
