//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, InputMode};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::ExportFinished(result) => {
            app.finish_export(result);
            Ok(())
        }
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases as well
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    // Check if we're in a dialog first
    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Search => handle_search_key(app, key),
        // Editing without a dialog means the dialog was closed elsewhere
        InputMode::Editing => {
            app.input_mode = InputMode::Normal;
            handle_normal_key(app, key)
        }
    }
    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        // Help
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_index = app.view().len().saturating_sub(1);
        }

        // Expense actions
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),

        // Filtering
        KeyCode::Char('/') => app.focus_search(),
        KeyCode::Char('f') | KeyCode::Tab | KeyCode::Right => app.next_filter(),
        KeyCode::Char('F') | KeyCode::BackTab | KeyCode::Left => app.prev_filter(),
        KeyCode::Esc => {
            if !app.search_input.value().is_empty() {
                app.search_input.clear();
                app.search_changed();
            }
        }

        // Theme and export
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('p') => app.start_pdf_export(),

        _ => {}
    }
}

/// Handle keys while typing into the search box
fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down => app.blur_search(),
        KeyCode::Backspace => {
            app.search_input.backspace();
            app.search_changed();
        }
        KeyCode::Delete => {
            app.search_input.delete();
            app.search_changed();
        }
        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        KeyCode::Home => app.search_input.move_start(),
        KeyCode::End => app.search_input.move_end(),
        KeyCode::Char(c) => {
            app.search_input.insert(c);
            app.search_changed();
        }
        _ => {}
    }
}

/// Handle keys when a dialog is active
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog.clone() {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::AddExpense | ActiveDialog::EditExpense(_) => {
            dialogs::expense::handle_key(app, key);
        }
        ActiveDialog::ConfirmDelete(id) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(id),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::None => {}
    }
}
