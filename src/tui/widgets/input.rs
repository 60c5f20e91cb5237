//! Text input widget
//!
//! A single-line text field with a cursor. The cursor counts characters, not
//! bytes, so non-ASCII titles edit correctly.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::tui::theme::Palette;

/// A simple text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_len();
        self
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Label, value and cursor as one line
    pub fn line(&self, label_width: usize, palette: &Palette) -> Line<'static> {
        let label_style = if self.focused {
            Style::default()
                .fg(palette.focus)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.accent)
        };

        let mut spans = Vec::new();
        if !self.label.is_empty() {
            spans.push(Span::styled(
                format!("{:>width$}: ", self.label, width = label_width),
                label_style,
            ));
        }

        if self.content.is_empty() && !self.focused {
            spans.push(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(palette.muted),
            ));
            return Line::from(spans);
        }

        let value_style = Style::default().fg(palette.text);
        if !self.focused {
            spans.push(Span::styled(self.content.clone(), value_style));
            return Line::from(spans);
        }

        let split = self.byte_index(self.cursor);
        let (before, after) = self.content.split_at(split);
        let mut rest = after.chars();
        let cursor_char = rest.next().unwrap_or(' ');

        spans.push(Span::styled(before.to_string(), value_style));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(palette.background).bg(palette.focus),
        ));
        spans.push(Span::styled(rest.as_str().to_string(), value_style));

        Line::from(spans)
    }
}
