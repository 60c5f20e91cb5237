//! PDF Export functionality
//!
//! Renders the filtered expense view into a single document: heading, filter
//! description, budget usage, the expense table and a per-category breakdown.
//! Rendering needs a TrueType family. Each font directory is searched for
//! `<Family>-Regular.ttf`, `-Bold.ttf`, `-Italic.ttf`, `-BoldItalic.ttf`, or
//! the `<Family>.ttf`, `-Oblique.ttf` naming used by system font packages.

use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use genpdf::fonts::{FontData, FontFamily};
use genpdf::elements::{
    Break, FrameCellDecorator, PaddedElement, Paragraph, StyledElement, TableLayout,
};
use genpdf::style::{Color, Style};
use genpdf::{Alignment, Document, Element, Margins, SimplePageDecorator};

use crate::config::{settings::format_amount, ExpensePaths, Settings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::{ExpenseView, ViewFilter};

/// Default file name of the PDF export
pub const PDF_FILE_NAME: &str = "expenses.pdf";

/// Regular, bold, italic and bold-italic file suffixes, per naming scheme
const FACE_SUFFIXES: [[&str; 4]; 2] = [
    ["-Regular", "-Bold", "-Italic", "-BoldItalic"],
    ["", "-Bold", "-Oblique", "-BoldOblique"],
];

/// Owned snapshot of everything a PDF export needs
///
/// Built on the caller's thread so later store mutations cannot leak into a
/// running export.
#[derive(Debug, Clone)]
pub struct PdfReport {
    pub view: ExpenseView,
    pub filter_description: String,
    pub max_budget: f64,
    pub currency_symbol: String,
    pub font_dirs: Vec<PathBuf>,
    pub font_family: String,
    pub generated_on: String,
}

impl PdfReport {
    /// Snapshot a view with the current settings
    pub fn new(
        view: ExpenseView,
        filter: &ViewFilter,
        settings: &Settings,
        paths: &ExpensePaths,
    ) -> Self {
        Self {
            view,
            filter_description: filter.describe(),
            max_budget: settings.max_budget,
            currency_symbol: settings.currency_symbol.clone(),
            font_dirs: settings.font_dirs(paths),
            font_family: settings.pdf_font_family.clone(),
            generated_on: crate::models::today(),
        }
    }

    /// `Total: X / Y (Z%)`
    pub fn total_line(&self) -> String {
        format!(
            "Total: {} / {} ({:.1}%)",
            self.money(self.view.total),
            self.money(self.max_budget),
            self.view.progress_ratio(self.max_budget) * 100.0
        )
    }

    fn money(&self, amount: f64) -> String {
        format_amount(&self.currency_symbol, amount)
    }

    /// Load the first complete font family found in the font directories
    fn load_fonts(&self) -> ExpenseResult<FontFamily<FontData>> {
        for dir in &self.font_dirs {
            for suffixes in FACE_SUFFIXES {
                let face = |suffix: &str| dir.join(format!("{}{}.ttf", self.font_family, suffix));
                if !face(suffixes[0]).is_file() {
                    continue;
                }

                let load = |suffix: &str| {
                    let path = face(suffix);
                    FontData::load(&path, None).map_err(|e| {
                        ExpenseError::Export(format!(
                            "Failed to load font {}: {}",
                            path.display(),
                            e
                        ))
                    })
                };
                let family = FontFamily {
                    regular: load(suffixes[0])?,
                    bold: load(suffixes[1])?,
                    italic: load(suffixes[2])?,
                    bold_italic: load(suffixes[3])?,
                };

                tracing::debug!(dir = %dir.display(), family = %self.font_family, "pdf fonts loaded");
                return Ok(family);
            }
        }

        let searched: Vec<String> = self
            .font_dirs
            .iter()
            .map(|d| d.display().to_string())
            .collect();
        Err(ExpenseError::Export(format!(
            "Font family {} not found in: {}",
            self.font_family,
            searched.join(", ")
        )))
    }

    /// Build the document
    fn document(&self) -> ExpenseResult<Document> {
        let font_family = self.load_fonts()?;

        let mut doc = Document::new(font_family);
        doc.set_title("Expense Tracker");

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(Margins::trbl(15, 15, 15, 15));
        doc.set_page_decorator(decorator);

        let s_title = Style::new().with_font_size(18).bold();
        let s_normal = Style::new().with_font_size(10);
        let s_bold = Style::new().with_font_size(10).bold();
        let s_muted = Style::new()
            .with_font_size(9)
            .with_color(Color::Greyscale(110));

        doc.push(Paragraph::new("Expense Tracker").styled(s_title));
        doc.push(Paragraph::new(format!("Generated on {}", self.generated_on)).styled(s_muted));
        doc.push(Paragraph::new(self.filter_description.as_str()).styled(s_muted));
        doc.push(Break::new(1.0));
        doc.push(Paragraph::new(self.total_line()).styled(s_bold));
        doc.push(Break::new(1.0));

        if self.view.is_empty() {
            doc.push(Paragraph::new("No expenses found.").styled(s_normal));
            return Ok(doc);
        }

        let mut table = TableLayout::new(vec![4, 2, 2, 2]);
        table.set_cell_decorator(FrameCellDecorator::new(true, true, false));
        table
            .row()
            .element(cell("Title", s_bold))
            .element(cell("Category", s_bold))
            .element(cell("Date", s_bold))
            .element(cell_right("Amount", s_bold))
            .push()
            .map_err(table_error)?;

        for expense in &self.view.expenses {
            table
                .row()
                .element(cell(expense.title.as_str(), s_normal))
                .element(cell(expense.category.as_str(), s_normal))
                .element(cell(expense.date.as_str(), s_normal))
                .element(cell_right(self.money(expense.amount), s_normal))
                .push()
                .map_err(table_error)?;
        }
        doc.push(table);
        doc.push(Break::new(1.5));

        doc.push(Paragraph::new("By category").styled(s_bold));
        let mut breakdown = TableLayout::new(vec![3, 2, 1]);
        breakdown.set_cell_decorator(FrameCellDecorator::new(false, false, false));
        for slice in self.view.chart_slices() {
            let (r, g, b) = slice.rgb();
            breakdown
                .row()
                .element(cell(slice.category.as_str(), s_bold.with_color(Color::Rgb(r, g, b))))
                .element(cell_right(self.money(slice.value), s_normal))
                .element(cell_right(format!("{:.0}%", slice.share * 100.0), s_normal))
                .push()
                .map_err(table_error)?;
        }
        doc.push(breakdown);

        Ok(doc)
    }

    /// Render the document into memory
    pub fn render(&self) -> ExpenseResult<Vec<u8>> {
        let doc = self.document()?;
        let mut buffer = Vec::new();
        doc.render(&mut buffer)
            .map_err(|e| ExpenseError::Export(format!("Failed to render PDF: {}", e)))?;
        Ok(buffer)
    }

    /// Render and write the document to `output`
    pub fn write_to(&self, output: &Path) -> ExpenseResult<PathBuf> {
        let bytes = self.render()?;

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
        std::fs::write(output, bytes).map_err(|e| {
            ExpenseError::Export(format!("Failed to write {}: {}", output.display(), e))
        })?;

        tracing::info!(path = %output.display(), records = self.view.len(), "pdf exported");
        Ok(output.to_path_buf())
    }
}

fn cell(text: impl Into<String>, style: Style) -> PaddedElement<StyledElement<Paragraph>> {
    Paragraph::new(text.into()).styled(style).padded(Margins::trbl(1, 2, 1, 2))
}

fn cell_right(text: impl Into<String>, style: Style) -> PaddedElement<StyledElement<Paragraph>> {
    Paragraph::new(text.into())
        .aligned(Alignment::Right)
        .styled(style)
        .padded(Margins::trbl(1, 2, 1, 2))
}

fn table_error(e: genpdf::error::Error) -> ExpenseError {
    ExpenseError::Export(format!("Failed to lay out table: {}", e))
}

/// Export a report on a worker thread
///
/// `on_done` runs on the worker once with the written path or the failure.
pub fn spawn_pdf_export<F>(report: PdfReport, output: PathBuf, on_done: F) -> JoinHandle<()>
where
    F: FnOnce(ExpenseResult<PathBuf>) + Send + 'static,
{
    thread::spawn(move || {
        let result = report.write_to(&output);
        if let Err(e) = &result {
            tracing::error!(error = %e, "pdf export failed");
        }
        on_done(result);
    })
}
