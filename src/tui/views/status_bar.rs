//! Status bar view
//!
//! Shows the record count, export state, and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::services::ExpenseView;
use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, view: &ExpenseView, area: Rect) {
    let palette = app.palette();
    let total_records = app.store.count().unwrap_or(0);

    let mut spans = vec![
        Span::styled(" Showing: ", Style::default().fg(palette.muted)),
        Span::styled(
            format!("{}/{}", view.len(), total_records),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if app.store.is_editing() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("Editing", Style::default().fg(palette.accent)));
    }

    if app.export_in_progress {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            "Exporting…",
            Style::default().fg(palette.warning),
        ));
    }

    // Key hints (right-aligned)
    let hints = match app.input_mode {
        InputMode::Search => " Enter/Esc:Done ",
        _ => " a:Add  e:Edit  d:Delete  p:PDF  ?:Help  q:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(palette.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
