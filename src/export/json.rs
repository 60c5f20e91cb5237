//! JSON Export functionality
//!
//! Writes the filtered records in the same shape as the persisted store, so an
//! export can be dropped in as an `expenses.json` file.

use crate::error::{ExpenseError, ExpenseResult};
use crate::services::ExpenseView;
use std::io::Write;

/// Export the records of a view to JSON
pub fn export_expenses_json<W: Write>(
    view: &ExpenseView,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &view.expenses)
    } else {
        serde_json::to_writer(&mut *writer, &view.expenses)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))
}
