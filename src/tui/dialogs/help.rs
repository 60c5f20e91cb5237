//! Help dialog
//!
//! Shows keyboard shortcuts

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::theme::Palette;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.palette();
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(true))
        .style(palette.base());

    let paragraph = Paragraph::new(help_lines(&palette))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(text: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(palette.warning),
    )])
}

fn help_lines(palette: &Palette) -> Vec<Line<'static>> {
    vec![
        heading("Global Keys", palette),
        Line::from(""),
        key_line("q", "Quit application", palette),
        key_line("?", "Show/hide help", palette),
        key_line("t", "Toggle light/dark theme", palette),
        key_line("p", "Export the current view to PDF", palette),
        Line::from(""),
        heading("Expenses", palette),
        Line::from(""),
        key_line("j/k", "Move selection down/up", palette),
        key_line("a/n", "Add expense", palette),
        key_line("e/Enter", "Edit selected expense", palette),
        key_line("d/Del", "Delete selected expense", palette),
        Line::from(""),
        heading("Filtering", palette),
        Line::from(""),
        key_line("/", "Search by title", palette),
        key_line("f/F", "Next/previous category", palette),
        key_line("Esc", "Clear search", palette),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(palette.muted),
        )]),
    ]
}

/// Create a formatted key line
fn key_line(key: &str, description: &str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(palette.accent)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(palette.text)),
    ])
}
