//! Expense identifiers
//!
//! Ids are integers derived from the creation timestamp in milliseconds. They
//! are never reassigned and never reused within a list.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a single expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a raw id value
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Generate a fresh id from the current time
    ///
    /// Ids are monotonic-ish: when the clock does not advance past the largest
    /// existing id, the next integer is used instead.
    pub fn generate<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = ExpenseId>,
    {
        Self::generate_at(Utc::now().timestamp_millis(), existing)
    }

    /// Generate an id for a given clock value in milliseconds
    pub fn generate_at<I>(now_millis: i64, existing: I) -> Self
    where
        I: IntoIterator<Item = ExpenseId>,
    {
        let existing: Vec<ExpenseId> = existing.into_iter().collect();
        let next = match existing.iter().max() {
            Some(max) if max.0 >= now_millis => max.0.checked_add(1),
            _ => Some(now_millis),
        };

        match next {
            Some(raw) => Self(raw),
            // Nothing left above the largest id: take the closest free one below the clock
            None => {
                let mut raw = now_millis;
                while existing.iter().any(|id| id.0 == raw) {
                    raw = raw.saturating_sub(1);
                }
                Self(raw)
            }
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uses_clock_when_ahead() {
        let existing = vec![ExpenseId::from_raw(100), ExpenseId::from_raw(200)];
        assert_eq!(ExpenseId::generate_at(500, existing).as_i64(), 500);
    }

    #[test]
    fn test_generate_bumps_past_existing() {
        let existing = vec![ExpenseId::from_raw(500), ExpenseId::from_raw(499)];
        assert_eq!(ExpenseId::generate_at(500, existing).as_i64(), 501);
    }

    #[test]
    fn test_generate_at_max_id_does_not_overflow() {
        let existing = vec![ExpenseId::from_raw(i64::MAX), ExpenseId::from_raw(500)];
        let id = ExpenseId::generate_at(500, existing.clone());
        assert_eq!(id.as_i64(), 499);
        assert!(!existing.contains(&id));
    }

    #[test]
    fn test_generate_on_empty_list() {
        assert_eq!(ExpenseId::generate_at(42, Vec::new()).as_i64(), 42);
    }

    #[test]
    fn test_serializes_as_number() {
        let id = ExpenseId::from_raw(1_700_000_000_000);
        assert_eq!(serde_json::to_string(&id).unwrap(), "1700000000000");
    }

    #[test]
    fn test_parse() {
        assert_eq!("123".parse::<ExpenseId>().unwrap(), ExpenseId::from_raw(123));
        assert_eq!("#77".parse::<ExpenseId>().unwrap(), ExpenseId::from_raw(77));
        assert!("abc".parse::<ExpenseId>().is_err());
    }
}
