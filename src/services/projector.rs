//! View projection
//!
//! Pure derivation of the visible list, its total and the chart data from the
//! canonical list and the current search/filter inputs.

use crate::models::{Category, CategoryFilter, Expense};

/// Chart colours, cycled by slice index
pub const CHART_PALETTE: [(u8, u8, u8); 5] = [
    (0x00, 0x88, 0xFE),
    (0x00, 0xC4, 0x9F),
    (0xFF, 0xBB, 0x28),
    (0xFF, 0x80, 0x42),
    (0xFF, 0x66, 0xCC),
];

/// Search and category inputs of the list view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    pub search: String,
    pub category: CategoryFilter,
}

impl ViewFilter {
    /// Create a filter
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// Check whether a record passes the filter
    pub fn matches(&self, expense: &Expense) -> bool {
        self.passes(expense, &self.search.to_lowercase())
    }

    fn passes(&self, expense: &Expense, needle_lower: &str) -> bool {
        self.category.matches(expense.category) && expense.title_contains(needle_lower)
    }

    /// Short human-readable description
    pub fn describe(&self) -> String {
        if self.search.is_empty() {
            format!("Category: {}", self.category)
        } else {
            format!("Category: {}, search: \"{}\"", self.category, self.search)
        }
    }
}

/// The filtered records and their total
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseView {
    pub expenses: Vec<Expense>,
    pub total: f64,
}

impl ExpenseView {
    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Number of matching records
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Share of the budget used by this view's total
    pub fn progress_ratio(&self, max_budget: f64) -> f64 {
        progress_ratio(self.total, max_budget)
    }

    /// Per-category chart data
    pub fn chart_slices(&self) -> Vec<ChartSlice> {
        chart_slices(self)
    }
}

/// Filter records in list order and sum their amounts
pub fn project(records: &[Expense], filter: &ViewFilter) -> ExpenseView {
    let needle = filter.search.to_lowercase();
    let expenses: Vec<Expense> = records
        .iter()
        .filter(|e| filter.passes(e, &needle))
        .cloned()
        .collect();

    let total = expenses.iter().map(|e| e.amount).sum();

    ExpenseView { expenses, total }
}

/// `total / max_budget`, not clamped
pub fn progress_ratio(total: f64, max_budget: f64) -> f64 {
    total / max_budget
}

/// One sector of the category chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub category: Category,
    pub value: f64,
    /// Fraction of the view total, 0 when the total is zero
    pub share: f64,
    pub color_index: usize,
}

impl ChartSlice {
    /// RGB colour of this slice
    pub fn rgb(&self) -> (u8, u8, u8) {
        CHART_PALETTE[self.color_index % CHART_PALETTE.len()]
    }
}

/// Group the view by category in order of first appearance
pub fn chart_slices(view: &ExpenseView) -> Vec<ChartSlice> {
    let mut sums: Vec<(Category, f64)> = Vec::new();
    for expense in &view.expenses {
        match sums.iter_mut().find(|(c, _)| *c == expense.category) {
            Some((_, sum)) => *sum += expense.amount,
            None => sums.push((expense.category, expense.amount)),
        }
    }

    sums.into_iter()
        .enumerate()
        .map(|(index, (category, value))| ChartSlice {
            category,
            value,
            share: if view.total == 0.0 {
                0.0
            } else {
                value / view.total
            },
            color_index: index % CHART_PALETTE.len(),
        })
        .collect()
}
