//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! the expense store (validation and mutation) and the view projector
//! (filtering and aggregates).

pub mod expense;
pub mod projector;

pub use expense::{ExpenseStore, SaveOutcome};
pub use projector::{
    chart_slices, progress_ratio, project, ChartSlice, ExpenseView, ViewFilter, CHART_PALETTE,
};
