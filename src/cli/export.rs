//! CLI commands for data export
//!
//! Writes the filtered expense view to a PDF, CSV or JSON file.

use crate::config::{ExpensePaths, Settings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{csv, json, PdfReport};
use crate::storage::Storage;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use super::expense::FilterArgs;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One-page PDF report
    Pdf,
    /// CSV format (spreadsheet-compatible)
    Csv,
    /// JSON format (same shape as the data file)
    Json,
}

impl ExportFormat {
    /// Default file name for this format
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Pdf => crate::export::PDF_FILE_NAME,
            Self::Csv => "expenses.csv",
            Self::Json => "expenses.json",
        }
    }
}

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (defaults to the exports directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

impl ExportArgs {
    /// Where the export will be written
    pub fn output_path(&self, paths: &ExpensePaths) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| paths.export_dir().join(self.format.default_file_name()))
    }
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> ExpenseResult<()> {
    let view = args.filter.view(storage)?;
    let output = args.output_path(storage.paths());

    match args.format {
        ExportFormat::Pdf => {
            let report = PdfReport::new(view, &args.filter.to_filter(), settings, storage.paths());
            report.write_to(&output)?;
            println!("Exported to PDF: {}", output.display());
        }
        ExportFormat::Csv => {
            let writer = create_output(&output)?;
            csv::export_expenses_csv(&view, writer)?;
            println!("Exported {} expenses to: {}", view.len(), output.display());
        }
        ExportFormat::Json => {
            let mut writer = create_output(&output)?;
            json::export_expenses_json(&view, &mut writer, true)?;
            println!("Exported {} expenses to: {}", view.len(), output.display());
        }
    }

    Ok(())
}

fn create_output(output: &Path) -> ExpenseResult<BufWriter<File>> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Export(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryFilter, ExpenseDraft};
    use crate::services::ExpenseStore;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_csv_export_defaults_to_exports_dir() {
        let (temp_dir, storage) = create_test_storage();
        let mut store = ExpenseStore::new(&storage);
        store.save(ExpenseDraft::new("Coffee", 5.0, Category::Food)).unwrap();
        store.save(ExpenseDraft::new("Bus", 3.0, Category::Travel)).unwrap();

        handle_export_command(
            &storage,
            &Settings::default(),
            ExportArgs {
                format: ExportFormat::Csv,
                output: None,
                filter: FilterArgs {
                    search: String::new(),
                    category: CategoryFilter::Only(Category::Food),
                },
            },
        )
        .unwrap();

        let path = temp_dir.path().join("exports").join("expenses.csv");
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("ID,Title,Amount,Category,Date"));
        assert!(contents.contains("Coffee"));
        assert!(!contents.contains("Bus"));
    }

    #[test]
    fn test_pdf_export_without_fonts_fails() {
        let (temp_dir, storage) = create_test_storage();

        let err = handle_export_command(
            &storage,
            &Settings::default(),
            ExportArgs {
                format: ExportFormat::Pdf,
                output: Some(temp_dir.path().join("out.pdf")),
                filter: FilterArgs::default(),
            },
        )
        .unwrap_err();

        assert!(matches!(err, ExpenseError::Export(_)));
    }
}
