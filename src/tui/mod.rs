//! Terminal User Interface module
//!
//! This module provides the interactive expense tracker using ratatui:
//! a searchable, filterable expense list with a budget gauge, a category
//! chart, and dialogs for adding, editing, and deleting expenses.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod theme;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
