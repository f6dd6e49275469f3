//! Projection of a flattened style onto ratatui primitives.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Padding},
};

use super::component::ElementKind;
use super::value::{StyleMap, StyleValue};
use crate::utils::color::parse_color;

/// Terminal attributes derived from a resolved style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attributes {
    pub style: Style,
    pub padding: Padding,
    pub margin: Padding,
    pub border: Option<Color>,
    pub border_type: BorderType,
    pub alignment: Alignment,
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub flex: Option<u16>,
}

impl Attributes {
    /// Projects a flattened style. Attributes without a terminal
    /// counterpart (font size, line height, shadows) are ignored.
    #[must_use]
    pub fn from_style(element: ElementKind, style: &StyleMap) -> Self {
        let mut text_style = Style::default();

        if let Some(color) = color_attr(style, "color") {
            text_style = text_style.fg(color);
        }
        if let Some(color) = color_attr(style, "backgroundColor") {
            text_style = text_style.bg(color);
        }
        if is_bold(style.get("fontWeight")) {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }
        if style.get("fontStyle").and_then(StyleValue::as_str) == Some("italic") {
            text_style = text_style.add_modifier(Modifier::ITALIC);
        }
        if style
            .get("textDecorationLine")
            .and_then(StyleValue::as_str)
            .is_some_and(|d| d.contains("underline"))
        {
            text_style = text_style.add_modifier(Modifier::UNDERLINED);
        }
        if style
            .get("opacity")
            .and_then(StyleValue::as_f64)
            .is_some_and(|o| o < 0.6)
        {
            text_style = text_style.add_modifier(Modifier::DIM);
        }

        let has_border = style
            .get("borderWidth")
            .and_then(StyleValue::as_f64)
            .is_some_and(|w| w > 0.0);
        let border = has_border.then(|| color_attr(style, "borderColor").unwrap_or(Color::Reset));

        let rounded = style
            .get("borderRadius")
            .and_then(StyleValue::as_f64)
            .is_some_and(|r| r > 0.0);
        let border_type = match style.get("borderWidth").and_then(StyleValue::as_f64) {
            Some(w) if w >= 2.0 => BorderType::Thick,
            _ if rounded => BorderType::Rounded,
            _ => BorderType::Plain,
        };

        let alignment = match style.get("textAlign").and_then(StyleValue::as_str) {
            Some("center") => Alignment::Center,
            Some("right") => Alignment::Right,
            _ => Alignment::Left,
        };

        // Text elements only carry their own colors; box metrics belong to views.
        let (padding, margin) = match element {
            ElementKind::Text => (Padding::ZERO, Padding::ZERO),
            _ => (box_attr(style, "padding"), box_attr(style, "margin")),
        };

        Self {
            style: text_style,
            padding,
            margin,
            border,
            border_type,
            alignment,
            width: cells(style.get("width")),
            height: cells(style.get("height")),
            flex: cells(style.get("flex")),
        }
    }

    /// A block carrying background, border and padding.
    #[must_use]
    pub fn block(&self) -> Block<'static> {
        let mut block = Block::default().padding(self.padding);
        if let Some(bg) = self.style.bg {
            block = block.style(Style::default().bg(bg));
        }
        if let Some(color) = self.border {
            block = block
                .borders(Borders::ALL)
                .border_type(self.border_type)
                .border_style(Style::default().fg(color));
        }
        block
    }

    /// `area` shrunk by the margin on each side.
    #[must_use]
    pub fn inset(&self, area: Rect) -> Rect {
        let m = self.margin;
        Rect::new(
            area.x.saturating_add(m.left),
            area.y.saturating_add(m.top),
            area.width.saturating_sub(m.left.saturating_add(m.right)),
            area.height.saturating_sub(m.top.saturating_add(m.bottom)),
        )
    }
}

fn color_attr(style: &StyleMap, key: &str) -> Option<Color> {
    style.get(key).and_then(StyleValue::as_str).and_then(parse_color)
}

fn is_bold(weight: Option<&StyleValue>) -> bool {
    match weight {
        Some(StyleValue::String(w)) if w == "bold" => true,
        Some(value) => value.as_f64().is_some_and(|w| w >= 600.0),
        None => false,
    }
}

fn cells(value: Option<&StyleValue>) -> Option<u16> {
    let n = value?.as_f64()?;
    if !n.is_finite() || n < 0.0 {
        return None;
    }
    Some(n.round() as u16)
}

fn box_attr(style: &StyleMap, prefix: &str) -> Padding {
    let side = |name: &str| cells(style.get(&format!("{prefix}{name}"))).unwrap_or(0);
    Padding::new(side("Left"), side("Right"), side("Top"), side("Bottom"))
}
