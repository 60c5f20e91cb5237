//! Expense entry/edit dialog
//!
//! Modal dialog for adding or editing an expense with form fields,
//! tab navigation, validation, and save/cancel functionality.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Category, DraftField, ExpenseDraft};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::theme::Palette;
use crate::tui::widgets::input::TextInput;

/// Shown while no category is chosen
pub const CATEGORY_PLACEHOLDER: &str = "Choose category";

const LABEL_WIDTH: usize = 8;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Amount,
    Category,
}

impl FormField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Title,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Category,
            Self::Amount => Self::Title,
            Self::Category => Self::Amount,
        }
    }
}

/// State for the expense form dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: FormField,

    /// Title input
    pub title_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Selected category, `None` while on the placeholder
    pub category: Option<Category>,

    /// Date of the record being edited
    pub date: Option<String>,

    /// Whether this is an edit (vs new expense)
    pub is_edit: bool,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create an empty form
    pub fn new() -> Self {
        let mut state = Self {
            focused_field: FormField::Title,
            title_input: TextInput::new().label("Title").placeholder("Expense title"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            category: None,
            date: None,
            is_edit: false,
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Create form state pre-populated from a draft
    pub fn from_draft(draft: &ExpenseDraft) -> Self {
        let mut state = Self::new();
        state.is_edit = true;
        state.title_input = TextInput::new().label("Title").content(&draft.title);
        state.amount_input = TextInput::new()
            .label("Amount")
            .content(draft.amount.map(format_amount_input).unwrap_or_default());
        state.category = draft.category;
        state.date = draft.date.clone();
        state.update_focus();
        state
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    /// Update which input has focus
    fn update_focus(&mut self) {
        self.title_input.focused = self.focused_field == FormField::Title;
        self.amount_input.focused = self.focused_field == FormField::Amount;
    }

    /// Get the focused text input, if the focused field is one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Title => Some(&mut self.title_input),
            FormField::Amount => Some(&mut self.amount_input),
            FormField::Category => None,
        }
    }

    /// Cycle forward through the placeholder and the five categories
    pub fn next_category(&mut self) {
        self.category = match self.category {
            None => Some(Category::ALL[0]),
            Some(c) => Category::ALL.get(c.index() + 1).copied(),
        };
    }

    /// Cycle backward through the placeholder and the five categories
    pub fn prev_category(&mut self) {
        self.category = match self.category {
            None => Category::ALL.last().copied(),
            Some(c) if c.index() == 0 => None,
            Some(c) => Category::ALL.get(c.index() - 1).copied(),
        };
    }

    /// Current values as a draft
    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            title: self.title_input.value().to_string(),
            amount: ExpenseDraft::parse_amount(self.amount_input.value()),
            category: self.category,
            date: self.date.clone(),
        }
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Show which fields still need a value
    pub fn set_missing(&mut self, fields: &[DraftField]) {
        let names: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
        self.error_message = Some(format!("Missing: {}", names.join(", ")));
    }
}

fn format_amount_input(amount: f64) -> String {
    if amount.is_finite() {
        amount.to_string()
    } else {
        String::new()
    }
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.palette();
    let area = centered_rect_fixed(56, 11, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let form = &app.expense_form;
    let title = if form.is_edit {
        " Edit Expense "
    } else {
        " Add Expense "
    };

    let block = Block::default()
        .title(title)
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(true))
        .style(palette.base());

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(form.title_input.line(LABEL_WIDTH, &palette)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(form.amount_input.line(LABEL_WIDTH, &palette)),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(category_line(form, &palette)),
        chunks[2],
    );

    if let Some(date) = &form.date {
        let line = Line::from(vec![
            Span::styled(
                format!("{:>width$}: ", "Date", width = LABEL_WIDTH),
                Style::default().fg(palette.accent),
            ),
            Span::styled(date.clone(), Style::default().fg(palette.muted)),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[3]);
    }

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(palette.danger),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[5]);
    }

    let save_label = if form.is_edit { " Update  " } else { " Save  " };
    let hints = Line::from(vec![
        Span::styled("[Tab]", palette.key()),
        Span::raw(" Next  "),
        Span::styled("[←/→]", palette.key()),
        Span::raw(" Category  "),
        Span::styled("[Enter]", Style::default().fg(palette.success)),
        Span::raw(save_label),
        Span::styled("[Esc]", Style::default().fg(palette.danger)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}

/// Render the category selector line
fn category_line(form: &ExpenseFormState, palette: &Palette) -> Line<'static> {
    let focused = form.focused_field == FormField::Category;
    let label_style = if focused {
        Style::default()
            .fg(palette.focus)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.accent)
    };

    let (value, value_style) = match form.category {
        Some(category) => (category.to_string(), Style::default().fg(palette.text)),
        None => (
            CATEGORY_PLACEHOLDER.to_string(),
            Style::default().fg(palette.muted),
        ),
    };

    let mut spans = vec![Span::styled(
        format!("{:>width$}: ", "Category", width = LABEL_WIDTH),
        label_style,
    )];
    if focused {
        spans.push(Span::styled("‹ ", palette.key()));
        spans.push(Span::styled(value, value_style.add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(" ›", palette.key()));
    } else {
        spans.push(Span::styled(value, value_style));
    }

    Line::from(spans)
}

/// Handle key input for the expense dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => {
            app.cancel_form();
            return true;
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.prev_field();
            } else {
                form.next_field();
            }
            return true;
        }

        KeyCode::BackTab => {
            form.prev_field();
            return true;
        }

        KeyCode::Down => {
            form.next_field();
            return true;
        }

        KeyCode::Up => {
            form.prev_field();
            return true;
        }

        KeyCode::Enter => {
            app.submit_form();
            return true;
        }

        _ => {}
    }

    if form.focused_field == FormField::Category {
        return match key.code {
            KeyCode::Right | KeyCode::Char(' ') => {
                form.clear_error();
                form.next_category();
                true
            }
            KeyCode::Left => {
                form.clear_error();
                form.prev_category();
                true
            }
            KeyCode::Backspace | KeyCode::Delete => {
                form.category = None;
                true
            }
            KeyCode::Char(c) => {
                let wanted = c.to_ascii_lowercase();
                if let Some(category) = Category::ALL
                    .iter()
                    .find(|cat| cat.as_str().to_ascii_lowercase().starts_with(wanted))
                {
                    form.clear_error();
                    form.category = Some(*category);
                }
                true
            }
            _ => false,
        };
    }

    let Some(input) = form.focused_input() else {
        return false;
    };

    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) => input.insert(c),
        _ => return false,
    }
    form.clear_error();
    true
}
