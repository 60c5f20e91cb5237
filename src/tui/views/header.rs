//! Header and filter controls
//!
//! The header shows the application title and the active theme. Below it the
//! controls row holds the title search box and the category filter.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::Theme;
use crate::models::CategoryFilter;
use crate::tui::app::{App, InputMode};
use crate::tui::theme::Palette;

/// Render the header line
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let title = Line::from(vec![Span::styled(
        " Expense Tracker",
        palette.title(),
    )]);
    frame.render_widget(Paragraph::new(title), area);

    let theme = match app.settings.theme {
        Theme::Light => "☀ Light mode ",
        Theme::Dark => "☾ Dark mode ",
    };
    let indicator = Line::from(vec![
        Span::styled(theme, Style::default().fg(palette.muted)),
        Span::styled("[t]", palette.key()),
        Span::raw(" "),
    ]);
    frame.render_widget(
        Paragraph::new(indicator).alignment(Alignment::Right),
        area,
    );
}

/// Render the search box and category filter
pub fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let searching = app.input_mode == InputMode::Search;
    let search_block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(searching));
    let search = Paragraph::new(app.search_input.line(6, &palette)).block(search_block);
    frame.render_widget(search, chunks[0]);

    let filter_block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(false));
    let filter = Paragraph::new(filter_line(app.category_filter, &palette)).block(filter_block);
    frame.render_widget(filter, chunks[1]);
}

fn filter_line(filter: CategoryFilter, palette: &Palette) -> Line<'static> {
    let name = match filter {
        CategoryFilter::All => "All".to_string(),
        CategoryFilter::Only(category) => category.to_string(),
    };

    Line::from(vec![
        Span::styled("Category: ", Style::default().fg(palette.accent)),
        Span::styled("‹ ", palette.key()),
        Span::styled(
            name,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ›", palette.key()),
        Span::styled("  [f/F]", Style::default().fg(palette.muted)),
    ])
}
