//! Unsaved expense input
//!
//! A draft is what the form or the command line hands to the store before it
//! has been validated.

use std::fmt;

use super::category::Category;
use super::expense::Expense;

/// A required draft field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Amount,
    Category,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Amount => write!(f, "amount"),
            Self::Category => write!(f, "category"),
        }
    }
}

/// Unvalidated expense input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: Option<f64>,
    pub category: Option<Category>,
    /// Carried over from the edited record; new records are dated on save
    pub date: Option<String>,
}

impl ExpenseDraft {
    /// Create a draft from complete values
    pub fn new(title: impl Into<String>, amount: f64, category: Category) -> Self {
        Self {
            title: title.into(),
            amount: Some(amount),
            category: Some(category),
            date: None,
        }
    }

    /// Pre-fill a draft from an existing record
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            title: expense.title.clone(),
            amount: Some(expense.amount),
            category: Some(expense.category),
            date: Some(expense.date.clone()),
        }
    }

    /// Parse amount text from a form; blank or non-numeric input is absent
    pub fn parse_amount(text: &str) -> Option<f64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        text.parse::<f64>().ok()
    }

    /// Fields that are missing or empty
    ///
    /// An amount of zero or a non-finite amount counts as missing.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();

        if self.title.trim().is_empty() {
            missing.push(DraftField::Title);
        }
        match self.amount {
            Some(amount) if amount != 0.0 && amount.is_finite() => {}
            _ => missing.push(DraftField::Amount),
        }
        if self.category.is_none() {
            missing.push(DraftField::Category);
        }

        missing
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DraftValidationError::MissingFields(missing))
        }
    }

    /// Validate and split the draft into its required values
    pub fn validated(self) -> Result<ValidDraft, DraftValidationError> {
        self.validate()?;
        match (self.amount, self.category) {
            (Some(amount), Some(category)) => Ok(ValidDraft {
                title: self.title.trim().to_string(),
                amount,
                category,
                date: self.date,
            }),
            _ => Err(DraftValidationError::MissingFields(self.missing_fields())),
        }
    }
}

/// A draft whose required fields are known to be present
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub title: String,
    pub amount: f64,
    pub category: Category,
    pub date: Option<String>,
}

/// Validation errors for drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValidationError {
    MissingFields(Vec<DraftField>),
}

impl fmt::Display for DraftValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                let names: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
                write!(f, "Please fill all fields! (missing: {})", names.join(", "))
            }
        }
    }
}

impl std::error::Error for DraftValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    #[test]
    fn test_complete_draft_is_valid() {
        let draft = ExpenseDraft::new("Coffee", 5.0, Category::Food);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let err = ExpenseDraft::default().validate().unwrap_err();
        assert_eq!(
            err,
            DraftValidationError::MissingFields(vec![
                DraftField::Title,
                DraftField::Amount,
                DraftField::Category
            ])
        );
        assert_eq!(
            err.to_string(),
            "Please fill all fields! (missing: title, amount, category)"
        );
    }

    #[test]
    fn test_blank_title_is_missing() {
        let draft = ExpenseDraft::new("   ", 5.0, Category::Food);
        assert_eq!(draft.missing_fields(), vec![DraftField::Title]);
    }

    #[test]
    fn test_zero_and_nan_amounts_are_missing() {
        let mut draft = ExpenseDraft::new("Coffee", 0.0, Category::Food);
        assert_eq!(draft.missing_fields(), vec![DraftField::Amount]);

        draft.amount = Some(f64::NAN);
        assert_eq!(draft.missing_fields(), vec![DraftField::Amount]);
    }

    #[test]
    fn test_negative_amount_is_accepted() {
        let draft = ExpenseDraft::new("Refund", -4.0, Category::Shopping);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(ExpenseDraft::parse_amount("12.5"), Some(12.5));
        assert_eq!(ExpenseDraft::parse_amount("  7 "), Some(7.0));
        assert_eq!(ExpenseDraft::parse_amount(""), None);
        assert_eq!(ExpenseDraft::parse_amount("abc"), None);
    }

    #[test]
    fn test_from_expense_keeps_date() {
        let mut expense = Expense::new(ExpenseId::from_raw(9), "Bus", 3.0, Category::Travel);
        expense.date = "2023-05-06".into();

        let draft = ExpenseDraft::from_expense(&expense);
        assert_eq!(draft.title, "Bus");
        assert_eq!(draft.amount, Some(3.0));
        assert_eq!(draft.category, Some(Category::Travel));
        assert_eq!(draft.date.as_deref(), Some("2023-05-06"));
    }
}
