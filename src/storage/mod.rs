//! Storage layer for the expense tracker
//!
//! A small file-backed key/value store: each key maps to one JSON file in the
//! data directory, written atomically.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseRepository, EXPENSES_KEY};
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.store_file(EXPENSES_KEY)),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), ExpenseError> {
        self.expenses.load()
    }
}
