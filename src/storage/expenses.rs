//! Expense repository for JSON storage
//!
//! Holds the canonical ordered list of expenses and mirrors it to the
//! `expenses` key of the local store. The list is always replaced as a whole.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use serde_json::Value;

use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Key under which the expense list is persisted
pub const EXPENSES_KEY: &str = "expenses";

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load expenses from disk
    ///
    /// A missing file or unreadable content yields an empty list. The failure
    /// is logged and never returned. Records that cannot be decoded are
    /// skipped one by one, and the original file is copied next to itself as
    /// `expenses.json.unreadable` before anything overwrites it.
    pub fn load(&self) -> Result<(), ExpenseError> {
        let loaded = match read_json::<Vec<Value>, _>(&self.path) {
            Ok(Some(values)) => {
                let total = values.len();
                let expenses = decode_records(values);
                if expenses.len() < total {
                    self.keep_unreadable_copy();
                }
                expenses
            }
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "no persisted expenses");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "persisted expenses unreadable, starting empty"
                );
                self.keep_unreadable_copy();
                Vec::new()
            }
        };

        tracing::info!(count = loaded.len(), "loaded expenses");
        self.replace_all(loaded)
    }

    /// Where a file that failed to load is copied
    pub fn unreadable_copy_path(&self) -> PathBuf {
        self.path.with_extension("json.unreadable")
    }

    fn keep_unreadable_copy(&self) {
        let copy = self.unreadable_copy_path();
        match fs::copy(&self.path, &copy) {
            Ok(_) => tracing::warn!(copy = %copy.display(), "kept a copy of the unreadable file"),
            Err(e) => tracing::error!(error = %e, "failed to copy the unreadable file"),
        }
    }

    /// Get all expenses in list order
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Replace the whole list in one step
    pub fn replace_all(&self, expenses: Vec<Expense>) -> Result<(), ExpenseError> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = expenses;
        Ok(())
    }

    /// Persist a new list, then make it the current one
    ///
    /// The in-memory list only changes once the write has succeeded.
    pub fn commit(&self, expenses: Vec<Expense>) -> Result<(), ExpenseError> {
        write_json_atomic(&self.path, &expenses)?;
        self.replace_all(expenses)
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}

/// Decode records one at a time, skipping the ones that do not fit
fn decode_records(values: Vec<Value>) -> Vec<Expense> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<Expense>(value) {
            Ok(expense) => Some(expense),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping unreadable expense record");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn sample(id: i64, title: &str) -> Expense {
        Expense::new(ExpenseId::from_raw(id), title, 10.0, Category::Food)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(temp_dir.path().join("expenses.json"), "{ not json").unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_bad_record_does_not_hide_the_others() {
        let (temp_dir, repo) = create_test_repo();
        let path = temp_dir.path().join("expenses.json");
        std::fs::write(
            &path,
            r#"[
                {"id":1,"title":"Rent","amount":900,"category":"Bills","date":"2024-01-01"},
                {"id":2,"title":"Gift","amount":20,"category":"Misc","date":"2024-01-02"},
                {"title":"No id","amount":1,"category":"Food","date":"2024-01-03"}
            ]"#,
        )
        .unwrap();

        repo.load().unwrap();
        let loaded = repo.get_all().unwrap();
        let titles: Vec<_> = loaded.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Rent", "Gift"]);
        assert_eq!(loaded[1].category, Category::Others);

        // The next write keeps the readable records and the original survives
        let mut next = loaded.clone();
        next.insert(0, sample(3, "Tea"));
        repo.commit(next).unwrap();

        let reloaded = ExpenseRepository::new(path.clone());
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 3);
        let original = std::fs::read_to_string(repo.unreadable_copy_path()).unwrap();
        assert!(original.contains("No id"));
    }

    #[test]
    fn test_corrupt_file_is_kept_aside() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(temp_dir.path().join("expenses.json"), "{ not json").unwrap();

        repo.load().unwrap();
        repo.commit(vec![sample(1, "Tea")]).unwrap();

        let kept = std::fs::read_to_string(repo.unreadable_copy_path()).unwrap();
        assert_eq!(kept, "{ not json");
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(temp_dir.path().join("expenses.json"), r#"{"expenses": 3}"#).unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_commit_and_reload_preserves_order() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let expenses = vec![sample(3, "Lunch"), sample(1, "Taxi"), sample(2, "Books")];
        repo.commit(expenses.clone()).unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.get_all().unwrap(), expenses);
    }

    #[test]
    fn test_file_is_a_json_array() {
        let (temp_dir, repo) = create_test_repo();
        repo.commit(vec![sample(1, "Lunch")]).unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("expenses.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["title"], "Lunch");
    }

    #[test]
    fn test_commit_writes_before_swapping() {
        let (temp_dir, repo) = create_test_repo();
        repo.commit(vec![sample(1, "Lunch")]).unwrap();

        assert_eq!(repo.count().unwrap(), 1);
        assert!(temp_dir.path().join("expenses.json").exists());

        let bad = ExpenseRepository::new(temp_dir.path().join("missing").join("\0bad.json"));
        assert!(bad.commit(vec![sample(2, "Taxi")]).is_err());
        assert_eq!(bad.count().unwrap(), 0);
    }

    #[test]
    fn test_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.replace_all(vec![sample(1, "Lunch"), sample(2, "Taxi")]).unwrap();

        assert_eq!(repo.get(ExpenseId::from_raw(2)).unwrap().unwrap().title, "Taxi");
        assert!(repo.get(ExpenseId::from_raw(9)).unwrap().is_none());
    }
}
