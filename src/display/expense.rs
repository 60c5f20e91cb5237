//! Expense display formatting
//!
//! Provides utilities for formatting the expense list, a single expense and
//! the budget summary for terminal display.

use crate::config::Settings;
use crate::models::Expense;
use crate::services::ExpenseView;

const BAR_WIDTH: usize = 30;

/// Format a single expense for display (list row)
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{:>15} {:10} {:24} {:9} {:>12}",
        expense.id,
        expense.date,
        truncate(&expense.title, 24),
        expense.category,
        settings.format_amount(expense.amount)
    )
}

/// Format a filtered view as a list with its total
pub fn format_expense_list(view: &ExpenseView, settings: &Settings) -> String {
    if view.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>15} {:10} {:24} {:9} {:>12}\n",
        "ID", "Date", "Title", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(74));
    output.push('\n');

    for expense in &view.expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output.push_str(&"-".repeat(74));
    output.push('\n');
    output.push_str(&format!(
        "{:>61} {:>12}\n",
        "Total:",
        settings.format_amount(view.total)
    ));

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!("Title:    {}\n", expense.title));
    output.push_str(&format!("Amount:   {}\n", settings.format_amount(expense.amount)));
    output.push_str(&format!("Category: {}\n", expense.category));
    output.push_str(&format!("Date:     {}\n", expense.date));

    output
}

/// Text progress bar for `total / max_budget`
///
/// The bar is capped at full width while the percentage is shown unclamped.
pub fn format_budget_bar(ratio: f64) -> String {
    let filled = if ratio.is_finite() {
        ((ratio.clamp(0.0, 1.0)) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };

    format!(
        "[{}{}] {:.1}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        ratio * 100.0
    )
}

/// Format the budget summary of a view
pub fn format_summary(view: &ExpenseView, settings: &Settings) -> String {
    let mut output = String::new();
    let ratio = view.progress_ratio(settings.max_budget);

    output.push_str(&format!(
        "Total: {} / {}\n",
        settings.format_amount(view.total),
        settings.format_amount(settings.max_budget)
    ));
    output.push_str(&format_budget_bar(ratio));
    output.push('\n');
    if ratio > 1.0 {
        output.push_str("Over budget!\n");
    }

    let slices = view.chart_slices();
    if slices.is_empty() {
        output.push_str("\nNo expenses found.\n");
        return output;
    }

    output.push_str("\nBy category:\n");
    for slice in slices {
        output.push_str(&format!(
            "  {:9} {:>12} {:>5.1}%\n",
            slice.category,
            settings.format_amount(slice.value),
            slice.share * 100.0
        ));
    }

    output
}

/// Pad or shorten to `max_len` characters
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
