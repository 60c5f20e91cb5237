//! Core data models for the expense tracker
//!
//! This module contains the expense record, its identifier, the fixed
//! category set and the unsaved draft used by forms.

pub mod category;
pub mod draft;
pub mod expense;
pub mod ids;

pub use category::{Category, CategoryFilter, CategoryParseError};
pub use draft::{DraftField, DraftValidationError, ExpenseDraft, ValidDraft};
pub use expense::{today, Expense, DATE_FORMAT};
pub use ids::ExpenseId;
