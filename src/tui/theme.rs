//! Light and dark colour palettes

use ratatui::style::{Color, Modifier, Style};

use crate::config::Theme;

/// Colours used by every view and dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub focus: Color,
    pub highlight_bg: Color,
    pub success: Color,
    pub danger: Color,
    pub warning: Color,
}

impl Palette {
    /// Palette for a theme
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(0xF5, 0xF5, 0xF5),
                text: Color::Rgb(0x22, 0x22, 0x22),
                muted: Color::Rgb(0x77, 0x77, 0x77),
                accent: Color::Rgb(0x00, 0x66, 0xCC),
                border: Color::Rgb(0xAA, 0xAA, 0xAA),
                focus: Color::Rgb(0x00, 0x66, 0xCC),
                highlight_bg: Color::Rgb(0xD6, 0xE8, 0xFA),
                success: Color::Rgb(0x1E, 0x8E, 0x3E),
                danger: Color::Rgb(0xC6, 0x28, 0x28),
                warning: Color::Rgb(0xB2, 0x6A, 0x00),
            },
            Theme::Dark => Self {
                background: Color::Rgb(0x1E, 0x1E, 0x1E),
                text: Color::Rgb(0xEE, 0xEE, 0xEE),
                muted: Color::Rgb(0x99, 0x99, 0x99),
                accent: Color::Cyan,
                border: Color::DarkGray,
                focus: Color::Cyan,
                highlight_bg: Color::Rgb(0x33, 0x33, 0x44),
                success: Color::Green,
                danger: Color::Red,
                warning: Color::Yellow,
            },
        }
    }

    /// Base style for text on the background
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Style for section titles
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style, brighter when focused
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style for key names in hints
    pub fn key(&self) -> Style {
        Style::default().fg(self.warning)
    }
}

/// Chart colour for a palette index
pub fn chart_color(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
