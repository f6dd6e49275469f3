//! List of discovered development servers

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use super::{chevron_glyph, rotate};
use crate::constants::GLYPH_STATUS_DOT;
use crate::discovery::Packager;
use crate::style::Props;
use crate::ui::core::{Action, Component};
use crate::ui::skin::Skin;

pub struct PackagersList {
    skin: Arc<Skin>,
    packagers: Vec<Packager>,
    state: ListState,
}

impl PackagersList {
    pub fn new(skin: Arc<Skin>) -> Self {
        Self {
            skin,
            packagers: Vec::new(),
            state: ListState::default(),
        }
    }

    /// Replace the entries, keeping the selection in bounds
    pub fn update_data(&mut self, packagers: Vec<Packager>) {
        self.packagers = packagers;
        let selected = match (self.packagers.len(), self.state.selected()) {
            (0, _) => None,
            (len, Some(index)) => Some(index.min(len - 1)),
            (_, None) => Some(0),
        };
        self.state.select(selected);
    }

    pub fn packagers(&self) -> &[Packager] {
        &self.packagers
    }

    pub fn is_empty(&self) -> bool {
        self.packagers.is_empty()
    }

    pub fn selected(&self) -> Option<&Packager> {
        self.state.selected().and_then(|index| self.packagers.get(index))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Rows needed to draw every entry
    pub fn height(&self) -> u16 {
        u16::try_from(self.packagers.len()).unwrap_or(u16::MAX)
    }

    fn select_offset(&mut self, forward: bool) {
        if self.packagers.is_empty() {
            return;
        }
        let len = self.packagers.len();
        let current = self.state.selected().unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.state.select(Some(next));
    }
}

impl Component for PackagersList {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.packagers.is_empty() {
            return Action::None;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Action::NextPackager,
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousPackager,
            KeyCode::Enter => match self.selected() {
                Some(packager) => Action::OpenUrl(packager.url.clone()),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextPackager => {
                self.select_offset(true);
                Action::None
            }
            Action::PreviousPackager => {
                self.select_offset(false);
                Action::None
            }
            Action::PollUpdated(snapshot) => {
                self.update_data(snapshot.data.clone());
                Action::PollUpdated(snapshot)
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let dot = self
            .skin
            .view
            .attributes(&Props::new().with("bg", "success").with("rounded", "full"), None);
        let text = self.skin.text.attributes(&Props::new(), None);
        let chevron_style = self.skin.text.resolve(&Props::new(), Some(&rotate("-90deg")));
        let chevron = chevron_glyph(&chevron_style);

        let items: Vec<ListItem> = self
            .packagers
            .iter()
            .map(|packager| {
                // The dot is drawn in the view's background color as foreground.
                let dot_style = dot.style.bg.map(|c| text.style.fg(c)).unwrap_or(text.style);
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{GLYPH_STATUS_DOT} "), dot_style),
                    Span::styled(packager.description.clone(), text.style),
                    Span::styled(format!(" {chevron}"), text.style),
                ]))
            })
            .collect();

        let list = List::new(items).highlight_style(text.style.add_modifier(Modifier::REVERSED));
        f.render_stateful_widget(list, rect, &mut self.state);
    }
}
