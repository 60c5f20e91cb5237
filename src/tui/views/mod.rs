//! TUI Views module
//!
//! Contains the header, the search and filter controls, the budget gauge,
//! the expense list, the category chart and the status bar.

pub mod expense_list;
pub mod header;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.palette();
    let area = frame.area();
    frame.render_widget(
        ratatui::widgets::Block::default().style(palette.base()),
        area,
    );

    let layout = AppLayout::new(area);
    let view = app.view();

    header::render(frame, app, layout.header);
    header::render_controls(frame, app, layout.controls);
    summary::render_gauge(frame, app, &view, layout.gauge);
    expense_list::render(frame, app, &view, layout.list);
    summary::render_chart(frame, app, &view, layout.chart);
    status_bar::render(frame, app, &view, layout.status_bar);

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }

    // Toasts stay on top of dialogs
    if let Some(notification) = app.notifications.current() {
        let height = if notification.message.chars().count() > 34 { 4 } else { 3 };
        let toast_area = toast_rect(40, height, area);
        frame.render_widget(NotificationWidget::new(notification, &palette), toast_area);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::AddExpense | ActiveDialog::EditExpense(_) => {
            dialogs::expense::render(frame, app);
        }
        ActiveDialog::ConfirmDelete(id) => {
            let title = app
                .store
                .get(*id)
                .ok()
                .flatten()
                .map(|e| e.title)
                .unwrap_or_else(|| "this expense".to_string());
            let message = dialogs::confirm::delete_message(&title);
            dialogs::confirm::render(frame, &message, &app.palette());
        }
        ActiveDialog::None => {}
    }
}
