//! Expense store
//!
//! Owns the expense lifecycle: create, update, delete and the single
//! "currently editing" reference. Every successful mutation persists the
//! whole list before it becomes visible.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseDraft, ExpenseId};
use crate::storage::Storage;

/// Result of a successful save
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Created(Expense),
    Updated(Expense),
}

impl SaveOutcome {
    /// The stored record
    pub fn expense(&self) -> &Expense {
        match self {
            Self::Created(e) | Self::Updated(e) => e,
        }
    }

    /// User-facing confirmation
    pub fn message(&self) -> &'static str {
        match self {
            Self::Created(_) => "Expense Added!",
            Self::Updated(_) => "Expense Updated!",
        }
    }
}

/// Store for expense records
pub struct ExpenseStore<'a> {
    storage: &'a Storage,
    editing: Option<Expense>,
}

impl<'a> ExpenseStore<'a> {
    /// Create a new expense store
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            editing: None,
        }
    }

    /// Load the persisted list; unreadable data starts an empty list
    pub fn load(&self) -> ExpenseResult<()> {
        self.storage.expenses.load()
    }

    /// All expenses, newest first
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Number of expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        self.storage.expenses.count()
    }

    /// The record currently being edited, if any
    pub fn editing(&self) -> Option<&Expense> {
        self.editing.as_ref()
    }

    /// Whether a save will update instead of create
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Start editing a record and return a draft pre-filled from it
    pub fn begin_edit(&mut self, expense: Expense) -> ExpenseDraft {
        tracing::debug!(id = %expense.id, "begin edit");
        let draft = ExpenseDraft::from_expense(&expense);
        self.editing = Some(expense);
        draft
    }

    /// Start editing the record with the given id
    pub fn begin_edit_by_id(&mut self, id: ExpenseId) -> ExpenseResult<ExpenseDraft> {
        let expense = self
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;
        Ok(self.begin_edit(expense))
    }

    /// Drop the editing reference without touching the list
    pub fn cancel_edit(&mut self) {
        if let Some(expense) = self.editing.take() {
            tracing::debug!(id = %expense.id, "edit cancelled");
        }
    }

    /// Validate and store a draft
    ///
    /// Creates a new record at the head of the list, or replaces the record
    /// being edited in place. Nothing changes when validation fails.
    pub fn save(&mut self, draft: ExpenseDraft) -> ExpenseResult<SaveOutcome> {
        let valid = draft.validated().map_err(|e| {
            tracing::debug!(error = %e, "draft rejected");
            ExpenseError::Validation(e.to_string())
        })?;

        let mut expenses = self.storage.expenses.get_all()?;

        if let Some(editing) = self.editing.take() {
            let position = expenses
                .iter()
                .position(|e| e.id == editing.id)
                .ok_or_else(|| ExpenseError::expense_not_found(editing.id))?;

            let updated = Expense {
                id: editing.id,
                title: valid.title,
                amount: valid.amount,
                category: valid.category,
                date: valid.date.unwrap_or(editing.date),
            };
            expenses[position] = updated.clone();

            self.storage.expenses.commit(expenses)?;
            tracing::info!(id = %updated.id, "expense updated");
            Ok(SaveOutcome::Updated(updated))
        } else {
            let id = ExpenseId::generate(expenses.iter().map(|e| e.id));
            let created = Expense::new(id, valid.title, valid.amount, valid.category);
            expenses.insert(0, created.clone());

            self.storage.expenses.commit(expenses)?;
            tracing::info!(id = %created.id, "expense created");
            Ok(SaveOutcome::Created(created))
        }
    }

    /// Remove the record with the given id
    ///
    /// Returns whether a record was removed. An unknown id is not an error;
    /// the list is persisted either way.
    pub fn remove(&mut self, id: ExpenseId) -> ExpenseResult<bool> {
        let mut expenses = self.storage.expenses.get_all()?;
        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        let removed = expenses.len() < before;

        if self.editing.as_ref().map(|e| e.id) == Some(id) {
            self.editing = None;
        }

        self.storage.expenses.commit(expenses)?;
        if removed {
            tracing::info!(id = %id, "expense removed");
        } else {
            tracing::debug!(id = %id, "remove ignored, no such expense");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::models::{today, Category};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_prepends() {
        let (_temp_dir, storage) = create_test_storage();
        let mut store = ExpenseStore::new(&storage);

        store.save(ExpenseDraft::new("Coffee", 5.0, Category::Food)).unwrap();
        let outcome = store
            .save(ExpenseDraft::new("Bus", 3.0, Category::Travel))
            .unwrap();

        assert!(matches!(outcome, SaveOutcome::Created(_)));
        assert_eq!(outcome.message(), "Expense Added!");

        let list = store.list().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].title, "Bus");
        assert_eq!(list[1].title, "Coffee");
        assert_eq!(list[0].date, today());
    }

    #[test]
    fn test_ids_are_unique() {
        let (_temp_dir, storage) = create_test_storage();
        let mut store = ExpenseStore::new(&storage);

        for i in 0..20 {
            store
                .save(ExpenseDraft::new(format!("Item {}", i), 1.0, Category::Others))
                .unwrap();
        }

        let mut ids: Vec<_> = store.list().unwrap().iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_invalid_draft_changes_nothing() {
        let (temp_dir, storage) = create_test_storage();
        let mut store = ExpenseStore::new(&storage);

        let err = store
            .save(ExpenseDraft {
                title: "Coffee".into(),
                amount: None,
                category: Some(Category::Food),
                date: None,
            })
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(store.count().unwrap(), 0);
        assert!(!temp_dir.path().join("data").join("expenses.json").exists());
    }

    #[test]
    fn test_invalid_draft_keeps_edit_reference() {
        let (_temp_dir, storage) = create_test_storage();
        let mut store = ExpenseStore::new(&storage);

        let created = store
            .save(ExpenseDraft::new("Coffee", 5.0, Category::Food))
            .unwrap();
        store.begin_edit(created.expense().clone());

        let mut draft = ExpenseDraft::from_expense(created.expense());
        draft.title.clear();
        assert!(store.save(draft).unwrap_err().is_validation());
        assert!(store.is_editing());
    }

    #[test]
    fn test_update_in_place() {
        let (_temp_dir, storage) = create_test_storage();
        let mut store = ExpenseStore::new(&storage);

        store.save(ExpenseDraft::new("A", 1.0, Category::Food)).unwrap();
        store.save(ExpenseDraft::new("B", 2.0, Category::Bills)).unwrap();
        store.save(ExpenseDraft::new("C", 3.0, Category::Travel)).unwrap();

        let middle = store.list().unwrap()[1].clone();
        let mut draft = store.begin_edit(middle.clone());
        draft.title = "B2".into();
        draft.amount = Some(20.0);
        draft.category = Some(Category::Shopping);

        let outcome = store.save(draft).unwrap();
        assert_eq!(outcome.message(), "Expense Updated!");
        assert!(!store.is_editing());

        let list = store.list().unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[1].id, middle.id);
        assert_eq!(list[1].title, "B2");
        assert_eq!(list[1].amount, 20.0);
        assert_eq!(list[1].category, Category::Shopping);
        assert_eq!(list[1].date, middle.date);
    }

    #[test]
    fn test_update_keeps_original_date_when_draft_has_none() {
        let (_temp_dir, storage) = create_test_storage();
        let mut store = ExpenseStore::new(&storage);

        let mut old = Expense::new(ExpenseId::from_raw(1), "Rent", 900.0, Category::Bills);
        old.date = "2020-01-01".into();
        storage.expenses.commit(vec![old.clone()]).unwrap();

        store.begin_edit(old);
        store
            .save(ExpenseDraft::new("Rent", 950.0, Category::Bills))
            .unwrap();

        assert_eq!(store.list().unwrap()[0].date, "2020-01-01");
    }

    #[test]
    fn test_update_of_missing_record_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let mut store = ExpenseStore::new(&storage);

        let ghost = Expense::new(ExpenseId::from_raw(77), "Ghost", 1.0, Category::Others);
        store.begin_edit(ghost);

        let err = store
            .save(ExpenseDraft::new("Ghost", 2.0, Category::Others))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(!store.is_editing());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_cancel_edit() {
        let (_temp_dir, storage) = create_test_storage();
        let mut store = ExpenseStore::new(&storage);

        let created = store
            .save(ExpenseDraft::new("Coffee", 5.0, Category::Food))
            .unwrap();
        store.begin_edit(created.expense().clone());
        assert!(store.is_editing());

        store.cancel_edit();
        assert!(!store.is_editing());

        let outcome = store
            .save(ExpenseDraft::new("Tea", 2.0, Category::Food))
            .unwrap();
        assert!(matches!(outcome, SaveOutcome::Created(_)));
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, storage) = create_test_storage();
        let mut store = ExpenseStore::new(&storage);

        let a = store
            .save(ExpenseDraft::new("A", 1.0, Category::Food))
            .unwrap();
        store.save(ExpenseDraft::new("B", 2.0, Category::Food)).unwrap();

        assert!(store.remove(a.expense().id).unwrap());
        assert_eq!(store.count().unwrap(), 1);

        assert!(!store.remove(ExpenseId::from_raw(1)).unwrap());
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_remove_edited_record_clears_reference() {
        let (_temp_dir, storage) = create_test_storage();
        let mut store = ExpenseStore::new(&storage);

        let a = store
            .save(ExpenseDraft::new("A", 1.0, Category::Food))
            .unwrap();
        store.begin_edit(a.expense().clone());
        store.remove(a.expense().id).unwrap();

        assert!(!store.is_editing());
    }

    #[test]
    fn test_persist_and_reload_round_trip() {
        let (temp_dir, storage) = create_test_storage();
        let mut store = ExpenseStore::new(&storage);

        store.save(ExpenseDraft::new("A", 1.5, Category::Food)).unwrap();
        store.save(ExpenseDraft::new("B", 2.25, Category::Bills)).unwrap();
        store.save(ExpenseDraft::new("C", 3.0, Category::Travel)).unwrap();
        let before = store.list().unwrap();

        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let reopened = Storage::new(paths).unwrap();
        let store2 = ExpenseStore::new(&reopened);
        store2.load().unwrap();

        assert_eq!(store2.list().unwrap(), before);
    }

    #[test]
    fn test_coffee_and_bus_walkthrough() {
        use crate::models::CategoryFilter;
        use crate::services::projector::{project, ViewFilter};

        let (_temp_dir, storage) = create_test_storage();
        let mut store = ExpenseStore::new(&storage);
        let all = ViewFilter::default();

        let coffee = store
            .save(ExpenseDraft::new("Coffee", 5.0, Category::Food))
            .unwrap()
            .expense()
            .clone();
        assert_eq!(project(&store.list().unwrap(), &all).total, 5.0);

        let mut draft = store.begin_edit_by_id(coffee.id).unwrap();
        draft.amount = Some(7.0);
        store.save(draft).unwrap();

        let list = store.list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].amount, 7.0);
        assert_eq!(list[0].date, coffee.date);

        store.save(ExpenseDraft::new("Bus", 3.0, Category::Travel)).unwrap();
        let view = project(&store.list().unwrap(), &all);
        let titles: Vec<_> = view.expenses.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Bus", "Coffee"]);
        assert_eq!(view.total, 10.0);

        let food = project(
            &store.list().unwrap(),
            &ViewFilter::new("", CategoryFilter::Only(Category::Food)),
        );
        assert_eq!(food.len(), 1);
        assert_eq!(food.expenses[0].title, "Coffee");
        assert_eq!(food.total, 7.0);

        store.remove(coffee.id).unwrap();
        let view = project(&store.list().unwrap(), &all);
        assert_eq!(view.len(), 1);
        assert_eq!(view.expenses[0].title, "Bus");
        assert_eq!(view.total, 3.0);
    }

    #[test]
    fn test_begin_edit_by_id_unknown() {
        let (_temp_dir, storage) = create_test_storage();
        let mut store = ExpenseStore::new(&storage);

        let err = store.begin_edit_by_id(ExpenseId::from_raw(5)).unwrap_err();
        assert!(err.is_not_found());
        assert!(!store.is_editing());
    }
}
