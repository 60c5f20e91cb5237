//! Expense CLI commands
//!
//! Implements the non-interactive commands for managing expenses.

use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::display::expense::{format_expense_details, format_expense_list, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, CategoryFilter, ExpenseDraft, ExpenseId};
use crate::services::{project, ExpenseStore, ExpenseView, ViewFilter};
use crate::storage::Storage;

/// Search and category options shared by the read commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive title search
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category to show (Food, Travel, Shopping, Bills, Others or All)
    #[arg(short, long, default_value = "All")]
    pub category: CategoryFilter,
}

impl FilterArgs {
    /// The view filter these options describe
    pub fn to_filter(&self) -> ViewFilter {
        ViewFilter::new(self.search.clone(), self.category)
    }

    /// Project the current store through these options
    pub fn view(&self, storage: &Storage) -> ExpenseResult<ExpenseView> {
        let store = ExpenseStore::new(storage);
        Ok(project(&store.list()?, &self.to_filter()))
    }
}

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Short label
        title: String,
        /// Amount (e.g. "12.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category (Food, Travel, Shopping, Bills, Others)
        category: Category,
    },
    /// Edit an expense
    Edit {
        /// Expense ID
        id: ExpenseId,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New amount
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: ExpenseId,
    },
    /// List expenses
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show the total against the budget and a per-category breakdown
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let mut store = ExpenseStore::new(storage);

    match cmd {
        ExpenseCommands::Add {
            title,
            amount,
            category,
        } => {
            let draft = ExpenseDraft {
                title,
                amount: ExpenseDraft::parse_amount(&amount),
                category: Some(category),
                date: None,
            };

            let outcome = store.save(draft)?;
            println!("{}", outcome.message());
            print!("{}", format_expense_details(outcome.expense(), settings));
        }

        ExpenseCommands::Edit {
            id,
            title,
            amount,
            category,
        } => {
            if title.is_none() && amount.is_none() && category.is_none() {
                return Err(ExpenseError::Validation(
                    "Nothing to change: pass --title, --amount or --category".into(),
                ));
            }

            let mut draft = store.begin_edit_by_id(id)?;
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(amount) = amount {
                draft.amount = ExpenseDraft::parse_amount(&amount);
            }
            if let Some(category) = category {
                draft.category = Some(category);
            }

            let outcome = store.save(draft)?;
            println!("{}", outcome.message());
            print!("{}", format_expense_details(outcome.expense(), settings));
        }

        ExpenseCommands::Delete { id } => match store.get(id)? {
            Some(existing) => {
                store.remove(id)?;
                println!("Expense Deleted: {} ({})", existing.title, existing.id);
            }
            None => println!("No expense with ID {}, nothing deleted.", id),
        },

        ExpenseCommands::List { filter } => {
            let view = filter.view(storage)?;
            print!("{}", format_expense_list(&view, settings));
        }

        ExpenseCommands::Summary { filter } => {
            let view = filter.view(storage)?;
            println!("{}", filter.to_filter().describe());
            print!("{}", format_summary(&view, settings));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_then_edit() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        handle_expense_command(
            &storage,
            &settings,
            ExpenseCommands::Add {
                title: "Coffee".into(),
                amount: "5".into(),
                category: Category::Food,
            },
        )
        .unwrap();

        let id = storage.expenses.get_all().unwrap()[0].id;
        handle_expense_command(
            &storage,
            &settings,
            ExpenseCommands::Edit {
                id,
                title: None,
                amount: Some("7".into()),
                category: None,
            },
        )
        .unwrap();

        let expense = storage.expenses.get(id).unwrap().unwrap();
        assert_eq!(expense.amount, 7.0);
        assert_eq!(expense.title, "Coffee");
    }

    #[test]
    fn test_add_with_bad_amount_is_rejected() {
        let (_temp_dir, storage) = create_test_storage();

        let err = handle_expense_command(
            &storage,
            &Settings::default(),
            ExpenseCommands::Add {
                title: "Coffee".into(),
                amount: "five".into(),
                category: Category::Food,
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_unknown_is_a_no_op() {
        let (_temp_dir, storage) = create_test_storage();
        let mut store = ExpenseStore::new(&storage);
        store.save(ExpenseDraft::new("Coffee", 5.0, Category::Food)).unwrap();

        handle_expense_command(
            &storage,
            &Settings::default(),
            ExpenseCommands::Delete {
                id: ExpenseId::from_raw(3),
            },
        )
        .unwrap();

        assert_eq!(storage.expenses.count().unwrap(), 1);
    }

    #[test]
    fn test_filter_args_view() {
        let (_temp_dir, storage) = create_test_storage();
        let mut store = ExpenseStore::new(&storage);
        store.save(ExpenseDraft::new("Coffee", 5.0, Category::Food)).unwrap();
        store.save(ExpenseDraft::new("Bus", 3.0, Category::Travel)).unwrap();

        let args = FilterArgs {
            search: String::new(),
            category: CategoryFilter::Only(Category::Travel),
        };
        let view = args.view(&storage).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view.total, 3.0);
    }
}
