//! Confirmation dialog
//!
//! Simple yes/no confirmation

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;
use crate::tui::theme::Palette;

/// Render a confirmation dialog
pub fn render(frame: &mut Frame, message: &str, palette: &Palette) {
    let area = centered_rect_fixed(50, 7, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.warning))
        .style(palette.base());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(palette.text),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(palette.success)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(palette.danger)),
            Span::raw(" No  "),
            Span::styled("[Esc]", palette.key()),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Prompt shown before deleting an expense
pub fn delete_message(title: &str) -> String {
    format!("Delete '{}'?", title)
}
