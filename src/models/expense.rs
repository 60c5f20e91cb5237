//! Expense record model
//!
//! An expense is the persisted unit of the tracker. Its JSON shape is
//! `{id, title, amount, category, date}`.

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::ExpenseId;

/// Format used for expense dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, fixed at creation
    pub id: ExpenseId,

    /// Short label
    pub title: String,

    /// Amount in currency units
    #[serde(with = "lenient_amount")]
    pub amount: f64,

    /// Spending category
    #[serde(deserialize_with = "lenient_category")]
    pub category: Category,

    /// Creation date, preserved across edits
    pub date: String,
}

impl Expense {
    /// Create a record dated today
    pub fn new(id: ExpenseId, title: impl Into<String>, amount: f64, category: Category) -> Self {
        Self {
            id,
            title: title.into(),
            amount,
            category,
            date: today(),
        }
    }

    /// Check whether the title contains a lowercase needle
    pub fn title_contains(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
    }
}

/// Today's date in [`DATE_FORMAT`]
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Unknown or empty category names load as [`Category::Others`]
fn lenient_category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = value.as_str().and_then(|name| name.parse::<Category>().ok());
    Ok(parsed.unwrap_or_else(|| {
        tracing::warn!(category = %value, "unknown category, using Others");
        Category::Others
    }))
}

/// Amount (de)serialization that never rejects a record
///
/// Numbers pass through, numeric strings are parsed and anything else becomes
/// `NaN` so a corrupted amount shows up in totals. `NaN` is written as `null`.
mod lenient_amount {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if amount.is_finite() {
            serializer.serialize_f64(*amount)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
            _ => f64::NAN,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_dated_today() {
        let expense = Expense::new(ExpenseId::from_raw(1), "Coffee", 5.0, Category::Food);
        assert_eq!(expense.date, today());
        assert_eq!(expense.title, "Coffee");
    }

    #[test]
    fn test_persisted_shape() {
        let expense = Expense {
            id: ExpenseId::from_raw(1700000000000),
            title: "Bus".into(),
            amount: 3.0,
            category: Category::Travel,
            date: "2024-01-02".into(),
        };

        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["id"], 1700000000000i64);
        assert_eq!(value["title"], "Bus");
        assert_eq!(value["amount"], 3.0);
        assert_eq!(value["category"], "Travel");
        assert_eq!(value["date"], "2024-01-02");
    }

    #[test]
    fn test_amount_from_numeric_string() {
        let json = r#"{"id":1,"title":"Tea","amount":"12.5","category":"Food","date":"2024-01-01"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount, 12.5);
    }

    #[test]
    fn test_non_numeric_amount_becomes_nan() {
        let json = r#"{"id":1,"title":"Tea","amount":"lots","category":"Food","date":"2024-01-01"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert!(expense.amount.is_nan());
    }

    #[test]
    fn test_unknown_category_becomes_others() {
        let json = r#"{"id":1,"title":"Gift","amount":20,"category":"Misc","date":"2024-01-01"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.category, Category::Others);

        let json = r#"{"id":2,"title":"Tea","amount":2,"category":"","date":"2024-01-01"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.category, Category::Others);

        let json = r#"{"id":3,"title":"Tea","amount":2,"category":"food","date":"2024-01-01"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.category, Category::Food);
    }

    #[test]
    fn test_nan_written_as_null() {
        let mut expense = Expense::new(ExpenseId::from_raw(1), "Tea", 1.0, Category::Food);
        expense.amount = f64::NAN;

        let value = serde_json::to_value(&expense).unwrap();
        assert!(value["amount"].is_null());

        let back: Expense = serde_json::from_value(value).unwrap();
        assert!(back.amount.is_nan());
    }

    #[test]
    fn test_title_contains_is_case_insensitive() {
        let expense = Expense::new(ExpenseId::from_raw(1), "Morning Coffee", 5.0, Category::Food);
        assert!(expense.title_contains("coffee"));
        assert!(expense.title_contains(""));
        assert!(!expense.title_contains("tea"));
    }
}
