//! Export module for the expense tracker
//!
//! Renders the current filtered view in several formats:
//! - PDF: a printable one-page report (rendered off the UI thread in the TUI)
//! - CSV: for spreadsheets
//! - JSON: the records in their persisted shape

pub mod csv;
pub mod json;
pub mod pdf;

pub use csv::{export_expenses_csv, CSV_HEADER};
pub use json::export_expenses_json;
pub use pdf::{spawn_pdf_export, PdfReport, PDF_FILE_NAME};
