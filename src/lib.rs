//! Expense Tracker - terminal expense tracking with budget progress
//!
//! This library provides the core functionality behind the `expenses`
//! binary: an owned store of expense records persisted to a local key/value
//! file, a projector that filters the list and derives totals, and the CLI,
//! TUI, and export front ends built on them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expense, category, draft)
//! - `storage`: JSON file storage layer
//! - `services`: The expense store and the view projector
//! - `export`: PDF, CSV and JSON export
//! - `cli`, `display`, `tui`: Front ends
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::models::{Category, ExpenseDraft};
//! use expense_tracker::services::ExpenseStore;
//! use expense_tracker::storage::Storage;
//!
//! let storage = Storage::new(ExpensePaths::new()?)?;
//! storage.load_all()?;
//! let mut store = ExpenseStore::new(&storage);
//! store.save(ExpenseDraft::new("Coffee", 5.0, Category::Food))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::ExpenseError;
