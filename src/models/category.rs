//! Expense categories and the category filter
//!
//! The category set is fixed. The filter adds the "All" sentinel on top of it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Bills,
    Others,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Bills,
        Category::Others,
    ];

    /// Name as stored and displayed
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Others => "Others",
        }
    }

    /// Position in [`Category::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CategoryParseError(wanted.to_string()))
    }
}

/// Error for unknown category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}' (expected one of: Food, Travel, Shopping, Bills, Others)",
            self.0
        )
    }
}

impl std::error::Error for CategoryParseError {}

/// Category filter applied to the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,
    /// Only records of one category
    Only(Category),
}

impl CategoryFilter {
    /// Every filter value in selector order
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.iter().copied().map(CategoryFilter::Only))
            .collect()
    }

    /// Check whether a category passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }

    /// Next filter value (wraps around)
    pub fn next(self) -> Self {
        let options = Self::options();
        let idx = options.iter().position(|f| *f == self).unwrap_or(0);
        options[(idx + 1) % options.len()]
    }

    /// Previous filter value (wraps around)
    pub fn prev(self) -> Self {
        let options = Self::options();
        let idx = options.iter().position(|f| *f == self).unwrap_or(0);
        options[(idx + options.len() - 1) % options.len()]
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.parse()?))
        }
    }
}
