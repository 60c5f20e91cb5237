//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, controls, budget gauge,
//! expense list beside the category chart, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title and theme indicator
    pub header: Rect,
    /// Search input and category filter
    pub controls: Rect,
    /// Budget progress gauge
    pub gauge: Rect,
    /// Expense list
    pub list: Rect,
    /// Category chart
    pub chart: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(3), // Controls
                Constraint::Length(3), // Gauge
                Constraint::Min(5),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        // Split main area into list and chart
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(vertical[3]);

        Self {
            header: vertical[0],
            controls: vertical[1],
            gauge: vertical[2],
            list: horizontal[0],
            chart: horizontal[1],
            status_bar: vertical[4],
        }
    }
}

/// Create a centered rect for dialogs
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

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Rect in the top-right corner for toasts
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let y = if r.height > height { r.y + 1 } else { r.y };
    Rect::new(r.x + r.width - width, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = AppLayout::new(area);

        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.list.width + layout.chart.width, 100);
        assert_eq!(layout.list.y, 7);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let r = centered_rect_fixed(50, 7, Rect::new(0, 0, 30, 5));
        assert_eq!(r, Rect::new(0, 0, 30, 5));
    }

    #[test]
    fn test_toast_rect_top_right() {
        let r = toast_rect(30, 3, Rect::new(0, 0, 100, 40));
        assert_eq!(r, Rect::new(70, 1, 30, 3));
    }
}
