//! Expense list view
//!
//! Shows the filtered expenses, newest first

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::services::ExpenseView;
use crate::tui::app::{App, InputMode};

/// Render the expense table
pub fn render(frame: &mut Frame, app: &App, view: &ExpenseView, area: Rect) {
    let palette = app.palette();
    let is_focused = app.input_mode == InputMode::Normal && !app.has_dialog();

    let block = Block::default()
        .title(format!(" Expenses ({}) ", view.len()))
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(is_focused));

    if view.is_empty() {
        let text = Paragraph::new("No expenses found.")
            .block(block)
            .style(Style::default().fg(palette.muted));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(10), // Date
        Constraint::Min(12),    // Title
        Constraint::Length(10), // Category
        Constraint::Length(12), // Amount
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Date").style(bold),
        Cell::from("Title").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Amount").style(bold),
    ])
    .style(Style::default().fg(palette.warning))
    .height(1);

    let rows: Vec<Row> = view
        .expenses
        .iter()
        .map(|expense| {
            let amount_style = if expense.amount < 0.0 {
                Style::default().fg(palette.success)
            } else {
                Style::default().fg(palette.text)
            };

            Row::new(vec![
                Cell::from(expense.date.clone()).style(Style::default().fg(palette.muted)),
                Cell::from(expense.title.clone()),
                Cell::from(expense.category.to_string()),
                Cell::from(format!(
                    "{:>12}",
                    app.settings.format_amount(expense.amount)
                ))
                .style(amount_style),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .style(Style::default().fg(palette.text))
        .highlight_style(
            Style::default()
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index.min(view.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
