//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Every change to the expense list goes through the owned [`ExpenseStore`].

use std::path::PathBuf;
use std::sync::mpsc::Sender;

use crate::config::{ExpensePaths, Settings};
use crate::export::{spawn_pdf_export, PdfReport, PDF_FILE_NAME};
use crate::models::{CategoryFilter, Expense, ExpenseId};
use crate::services::{project, ExpenseStore, ExpenseView, ViewFilter};
use crate::storage::Storage;

use super::dialogs::expense::ExpenseFormState;
use super::event::Event;
use super::theme::Palette;
use super::widgets::{Notification, NotificationQueue, TextInput};

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the search box
    Search,
    /// Typing into a dialog form
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    EditExpense(ExpenseId),
    ConfirmDelete(ExpenseId),
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Owner of the expense list
    pub store: ExpenseStore<'a>,

    /// Paths configuration
    pub paths: &'a ExpensePaths,

    /// Application settings (the theme toggle writes back to disk)
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Title search box
    pub search_input: TextInput,

    /// Category filter
    pub category_filter: CategoryFilter,

    /// Selected row in the filtered list
    pub selected_index: usize,

    /// Add/edit form state
    pub expense_form: ExpenseFormState,

    /// Pending toasts
    pub notifications: NotificationQueue,

    /// Whether a PDF export is running
    pub export_in_progress: bool,

    /// Channel used by background exports to report back
    event_sender: Option<Sender<Event>>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: Settings, paths: &'a ExpensePaths) -> Self {
        Self {
            store: ExpenseStore::new(storage),
            paths,
            settings,
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            search_input: TextInput::new()
                .label("Search")
                .placeholder("Search by title (press /)"),
            category_filter: CategoryFilter::All,
            selected_index: 0,
            expense_form: ExpenseFormState::new(),
            notifications: NotificationQueue::new(),
            export_in_progress: false,
            event_sender: None,
        }
    }

    /// Route background results through the event loop
    pub fn set_event_sender(&mut self, sender: Sender<Event>) {
        self.event_sender = Some(sender);
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Colours for the current theme
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.settings.theme)
    }

    /// Current search and category inputs
    pub fn view_filter(&self) -> ViewFilter {
        ViewFilter::new(self.search_input.value(), self.category_filter)
    }

    /// The filtered list and its total
    pub fn view(&self) -> ExpenseView {
        let expenses = self.store.list().unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to read expenses");
            Vec::new()
        });
        project(&expenses, &self.view_filter())
    }

    /// The expense under the cursor
    pub fn selected_expense(&self) -> Option<Expense> {
        self.view().expenses.get(self.selected_index).cloned()
    }

    /// Push a toast
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        let len = self.view().len();
        if self.selected_index < len.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the filtered list
    pub fn clamp_selection(&mut self) {
        let len = self.view().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Show the next category
    pub fn next_filter(&mut self) {
        self.category_filter = self.category_filter.next();
        self.selected_index = 0;
    }

    /// Show the previous category
    pub fn prev_filter(&mut self) {
        self.category_filter = self.category_filter.prev();
        self.selected_index = 0;
    }

    /// Start typing into the search box
    pub fn focus_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.search_input.focused = true;
        self.search_input.move_end();
    }

    /// Stop typing into the search box, keeping its text
    pub fn blur_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.search_input.focused = false;
    }

    /// The search text changed
    pub fn search_changed(&mut self) {
        self.selected_index = 0;
    }

    /// Switch between light and dark and remember the choice
    pub fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
        if let Err(e) = self.settings.save(self.paths) {
            tracing::warn!(error = %e, "failed to save theme");
            self.notify(Notification::warning(format!("Theme not saved: {}", e)));
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::AddExpense => {
                self.store.cancel_edit();
                self.expense_form = ExpenseFormState::new();
                self.input_mode = InputMode::Editing;
            }
            ActiveDialog::EditExpense(id) => match self.store.begin_edit_by_id(*id) {
                Ok(draft) => {
                    self.expense_form = ExpenseFormState::from_draft(&draft);
                    self.input_mode = InputMode::Editing;
                }
                Err(e) => {
                    self.notify(Notification::error(e.to_string()));
                    return;
                }
            },
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Edit the selected expense
    pub fn edit_selected(&mut self) {
        if let Some(expense) = self.selected_expense() {
            self.open_dialog(ActiveDialog::EditExpense(expense.id));
        }
    }

    /// Ask before deleting the selected expense
    pub fn request_delete(&mut self) {
        if let Some(expense) = self.selected_expense() {
            self.open_dialog(ActiveDialog::ConfirmDelete(expense.id));
        }
    }

    /// Abandon the form
    pub fn cancel_form(&mut self) {
        self.store.cancel_edit();
        self.close_dialog();
    }

    /// Save the form through the store
    pub fn submit_form(&mut self) {
        let draft = self.expense_form.to_draft();

        match self.store.save(draft) {
            Ok(outcome) => {
                self.notify(Notification::success(outcome.message()));
                self.close_dialog();
                let id = outcome.expense().id;
                if let Some(pos) = self.view().expenses.iter().position(|e| e.id == id) {
                    self.selected_index = pos;
                }
            }
            Err(e) if e.is_validation() => {
                let missing = self.expense_form.to_draft().missing_fields();
                self.expense_form.set_missing(&missing);
                self.notify(Notification::error("Please fill all fields!"));
            }
            Err(e) => {
                self.notify(Notification::error(e.to_string()));
                self.store.cancel_edit();
                self.close_dialog();
                self.clamp_selection();
            }
        }
    }

    /// Delete after confirmation
    pub fn confirm_delete(&mut self, id: ExpenseId) {
        match self.store.remove(id) {
            Ok(_) => self.notify(Notification::info("Expense Deleted")),
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
        self.close_dialog();
        self.clamp_selection();
    }

    /// Export the current view to PDF
    ///
    /// With an event channel the export runs on a worker thread and the
    /// result arrives as [`Event::ExportFinished`]; without one it runs inline.
    pub fn start_pdf_export(&mut self) {
        if self.export_in_progress {
            self.notify(Notification::warning("Export already running"));
            return;
        }

        let report = PdfReport::new(self.view(), &self.view_filter(), &self.settings, self.paths);
        let output = self.paths.export_dir().join(PDF_FILE_NAME);

        match self.event_sender.clone() {
            Some(sender) => {
                self.export_in_progress = true;
                spawn_pdf_export(report, output, move |result| {
                    let _ = sender.send(Event::ExportFinished(
                        result.map_err(|e| e.to_string()),
                    ));
                });
            }
            None => {
                let result = report.write_to(&output).map_err(|e| e.to_string());
                self.finish_export(result);
            }
        }
    }

    /// Report the outcome of an export
    pub fn finish_export(&mut self, result: Result<PathBuf, String>) {
        self.export_in_progress = false;
        match result {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "export finished");
                self.notify(Notification::success("Exported to PDF!"));
            }
            Err(e) => self.notify(Notification::error(e)),
        }
    }
}
