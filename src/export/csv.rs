//! CSV Export functionality
//!
//! Exports the filtered expense view to a spreadsheet-compatible file.

use crate::error::{ExpenseError, ExpenseResult};
use crate::services::ExpenseView;
use std::io::Write;

/// Column header of the expense CSV
pub const CSV_HEADER: [&str; 5] = ["ID", "Title", "Amount", "Category", "Date"];

/// Export the records of a view to CSV, in list order
pub fn export_expenses_csv<W: Write>(view: &ExpenseView, writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(CSV_HEADER).map_err(export_error)?;

    for expense in &view.expenses {
        let amount = if expense.amount.is_finite() {
            format!("{:.2}", expense.amount)
        } else {
            String::new()
        };

        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.title.clone(),
                amount,
                expense.category.to_string(),
                expense.date.clone(),
            ])
            .map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

fn export_error(e: csv::Error) -> ExpenseError {
    ExpenseError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, ExpenseId};

    fn view() -> ExpenseView {
        let mut lunch = Expense::new(ExpenseId::from_raw(2), "Lunch, with team", 12.5, Category::Food);
        lunch.date = "2024-03-01".into();
        let mut bus = Expense::new(ExpenseId::from_raw(1), "Bus", 3.0, Category::Travel);
        bus.date = "2024-02-28".into();

        ExpenseView {
            total: 15.5,
            expenses: vec![lunch, bus],
        }
    }

    #[test]
    fn test_export_expenses_csv() {
        let mut output = Vec::new();
        export_expenses_csv(&view(), &mut output).unwrap();

        let csv_str = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv_str.lines().collect();

        assert_eq!(lines[0], "ID,Title,Amount,Category,Date");
        assert_eq!(lines[1], "2,\"Lunch, with team\",12.50,Food,2024-03-01");
        assert_eq!(lines[2], "1,Bus,3.00,Travel,2024-02-28");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_empty_view_has_header_only() {
        let mut output = Vec::new();
        export_expenses_csv(&ExpenseView::default(), &mut output).unwrap();

        let csv_str = String::from_utf8(output).unwrap();
        assert_eq!(csv_str.trim_end(), "ID,Title,Amount,Category,Date");
    }

    #[test]
    fn test_nan_amount_is_blank() {
        let mut v = view();
        v.expenses[1].amount = f64::NAN;

        let mut output = Vec::new();
        export_expenses_csv(&v, &mut output).unwrap();

        let csv_str = String::from_utf8(output).unwrap();
        assert!(csv_str.contains("1,Bus,,Travel,2024-02-28"));
    }
}
