//! User settings for the expense tracker
//!
//! Manages the budget ceiling, currency symbol, theme and PDF font location.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Default budget ceiling used by the progress indicator
pub const DEFAULT_MAX_BUDGET: f64 = 10_000.0;

/// Light or dark presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Budget ceiling the running total is compared against
    #[serde(default = "default_max_budget")]
    pub max_budget: f64,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Presentation theme
    #[serde(default)]
    pub theme: Theme,

    /// Directory holding the TrueType files for PDF export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_font_dir: Option<PathBuf>,

    /// Font family name, looked up in each of [`Settings::font_dirs`]
    #[serde(default = "default_font_family")]
    pub pdf_font_family: String,
}

fn default_max_budget() -> f64 {
    DEFAULT_MAX_BUDGET
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_font_family() -> String {
    "DejaVuSans".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_budget: default_max_budget(),
            currency_symbol: default_currency(),
            theme: Theme::default(),
            pdf_font_dir: None,
            pdf_font_family: default_font_family(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the font directory, falling back to `<base>/fonts`
    pub fn font_dir(&self, paths: &ExpensePaths) -> PathBuf {
        self.pdf_font_dir.clone().unwrap_or_else(|| paths.font_dir())
    }

    /// Directories searched for the PDF font family, in order
    ///
    /// The configured (or per-user) directory comes first, then the fonts
    /// shipped with the crate, then common system locations.
    pub fn font_dirs(&self, paths: &ExpensePaths) -> Vec<PathBuf> {
        let mut dirs = vec![self.font_dir(paths), bundled_font_dir()];
        dirs.extend(SYSTEM_FONT_DIRS.iter().map(PathBuf::from));
        dirs
    }

    /// Format an amount with the configured currency symbol
    pub fn format_amount(&self, amount: f64) -> String {
        format_amount(&self.currency_symbol, amount)
    }
}

/// System directories that commonly hold DejaVu Sans
pub const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/TTF",
    "/usr/local/share/fonts",
    "/Library/Fonts",
];

/// Fonts shipped in the crate's `fonts/` directory
pub fn bundled_font_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fonts")
}

/// Format an amount with a currency symbol, keeping `NaN` visible
pub fn format_amount(symbol: &str, amount: f64) -> String {
    if amount.is_nan() {
        return format!("{}NaN", symbol);
    }
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.max_budget, 10_000.0);
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.pdf_font_family, "DejaVuSans");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.theme = Theme::Dark;
        settings.max_budget = 2500.0;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.theme, Theme::Dark);
        assert_eq!(loaded.max_budget, 2500.0);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"theme": "dark"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.theme, Theme::Dark);
        assert_eq!(loaded.max_budget, DEFAULT_MAX_BUDGET);
    }

    #[test]
    fn test_font_dir_fallback() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        assert_eq!(settings.font_dir(&paths), temp_dir.path().join("fonts"));

        settings.pdf_font_dir = Some(PathBuf::from("/usr/share/fonts/dejavu"));
        assert_eq!(
            settings.font_dir(&paths),
            PathBuf::from("/usr/share/fonts/dejavu")
        );
    }

    #[test]
    fn test_font_dirs_order() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        let dirs = settings.font_dirs(&paths);
        assert_eq!(dirs[0], temp_dir.path().join("fonts"));
        assert_eq!(dirs[1], bundled_font_dir());
        assert!(bundled_font_dir().join("DejaVuSans-Regular.ttf").is_file());
        assert_eq!(dirs.len(), 2 + SYSTEM_FONT_DIRS.len());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("₹", 5.0), "₹5.00");
        assert_eq!(format_amount("$", -3.5), "-$3.50");
        assert_eq!(format_amount("₹", f64::NAN), "₹NaN");
    }
}
