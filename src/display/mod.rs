//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and budget usage for the
//! non-interactive commands.

pub mod expense;

pub use expense::{
    format_budget_bar, format_expense_details, format_expense_list, format_expense_row,
    format_summary, truncate,
};
