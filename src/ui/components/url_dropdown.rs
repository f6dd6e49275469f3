//! Collapsible manual URL entry

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{chevron_glyph, rotate};
use crate::constants::{ERROR_EMPTY_URL, TEXT_CONNECT, TEXT_ENTER_URL, TEXT_URL_PLACEHOLDER};
use crate::style::{merged, Props, StyleValue};
use crate::ui::core::{Action, Component};
use crate::ui::skin::Skin;

pub struct UrlDropdown {
    skin: Arc<Skin>,
    open: bool,
    input: String,
}

impl UrlDropdown {
    pub const COLLAPSED_HEIGHT: u16 = 1;
    pub const EXPANDED_HEIGHT: u16 = 4;

    pub fn new(skin: Arc<Skin>) -> Self {
        Self {
            skin,
            open: false,
            input: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn height(&self) -> u16 {
        if self.open {
            Self::EXPANDED_HEIGHT
        } else {
            Self::COLLAPSED_HEIGHT
        }
    }

    fn submit(&self) -> Action {
        let url = self.input.trim();
        if url.is_empty() {
            Action::ShowError(ERROR_EMPTY_URL.to_string())
        } else {
            Action::OpenUrl(url.to_string())
        }
    }
}

impl Component for UrlDropdown {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.open {
            return match key.code {
                KeyCode::Char('u') => Action::ToggleUrlInput,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Esc => Action::ToggleUrlInput,
            KeyCode::Enter => Action::SubmitUrl,
            KeyCode::Backspace => Action::UrlBackspace,
            KeyCode::Char(c) => Action::UrlInput(c),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ToggleUrlInput => {
                self.open = !self.open;
                Action::None
            }
            Action::UrlInput(c) => {
                self.input.push(c);
                Action::None
            }
            Action::UrlBackspace => {
                self.input.pop();
                Action::None
            }
            Action::SubmitUrl => self.submit(),
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [toggle, body] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(rect);

        // The open chevron is nudged with a translate on top of the rotation.
        let angle = if self.open { "0deg" } else { "-90deg" };
        let explicit = merged(
            &rotate(angle),
            &crate::style! { "transform" => vec![StyleValue::Map(crate::style! { "translateX" => -1 })] },
        );
        let chevron_style = self.skin.text.resolve(&Props::new(), Some(&explicit));
        let label = self.skin.text.attributes(&Props::new(), None);

        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", chevron_glyph(&chevron_style)), label.style),
                Span::styled(TEXT_ENTER_URL, label.style),
            ])),
            toggle,
        );

        if !self.open || body.height == 0 {
            return;
        }

        let gap = self
            .skin
            .spacer_horizontal
            .attributes(&Props::new().with("size", "small"), None)
            .width
            .unwrap_or(1);
        let input_box = self.skin.view.attributes(
            &Props::new()
                .with("flex", "1")
                .with("border", "default")
                .with("rounded", "medium")
                .with("px", "small")
                .with("bg", "default"),
            None,
        );
        let [field, _, connect] = Layout::horizontal([
            input_box.flex.map_or(Constraint::Min(10), Constraint::Fill),
            Constraint::Length(gap),
            Constraint::Length(u16::try_from(TEXT_CONNECT.len()).unwrap_or(7) + 4),
        ])
        .areas(body);

        let text = if self.input.is_empty() {
            let placeholder = self
                .skin
                .text_input
                .attributes(&Props::new().with("color", "secondary"), None);
            Span::styled(TEXT_URL_PLACEHOLDER, placeholder.style)
        } else {
            let value = self.skin.text_input.attributes(&Props::new(), None);
            Span::styled(self.input.clone(), value.style)
        };
        f.render_widget(Paragraph::new(Line::from(text)).block(input_box.block()), field);

        let button = self.skin.button.attributes(
            &Props::new()
                .with("bg", "tertiary")
                .with("rounded", "medium")
                .with("px", "small"),
            None,
        );
        let button_text = self
            .skin
            .text
            .attributes(&Props::new().with("button", "tertiary").with("align", "center"), None);
        f.render_widget(
            Paragraph::new(Line::styled(TEXT_CONNECT, button_text.style))
                .alignment(button_text.alignment)
                .style(button.style)
                .block(button.block()),
            connect,
        );
    }
}
