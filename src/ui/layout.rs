//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the home screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    pub header: Rect,
    pub body: Rect,
    pub fetch_row: Rect,
    pub url_dropdown: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into header, server list, refetch row, URL entry and status bar.
    ///
    /// `heights` are the header, body, refetch row and URL entry heights; `gap`
    /// separates the sections.
    #[must_use]
    pub fn home_layout(area: Rect, heights: [u16; 4], gap: u16) -> HomeLayout {
        let [header_height, body_height, fetch_height, dropdown_height] = heights;
        let [header, _, body, fetch_row, _, url_dropdown, _, status] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Length(gap),
            Constraint::Length(body_height),
            Constraint::Length(fetch_height),
            Constraint::Length(gap),
            Constraint::Length(dropdown_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        HomeLayout {
            header,
            body,
            fetch_row,
            url_dropdown,
            status,
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
