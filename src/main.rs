use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_expense_command, handle_export_command, ExpenseCommands, ExportArgs,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::logging;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal expense tracker",
    long_about = "Track expenses by title, amount and category, search and filter \
                  them, watch the running total against your budget, and export \
                  the current view to PDF, CSV or JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Export the filtered expenses
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths, logging and settings
    let paths = ExpensePaths::new()?;
    logging::init(&paths)?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tui) => {
            expense_tracker::tui::run_tui(&storage, settings, &paths)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, &settings, args)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Max budget:      {}",
                settings.format_amount(settings.max_budget)
            );
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Theme:           {}", settings.theme);
            println!("  PDF font family: {}", settings.pdf_font_family);
            for dir in settings.font_dirs(&paths) {
                println!("    searched in:   {}", dir.display());
            }
        }
        None => {
            println!("Expense Tracker - track expenses against a budget");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
