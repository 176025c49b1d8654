//! Text input widget
//!
//! A single-line text input with cursor editing. The cursor is tracked as a
//! character index so that editing non-ASCII names works.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// A simple text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position in characters
    cursor: usize,
    /// Placeholder text shown while empty and unfocused
    pub placeholder: String,
}

impl TextInput {
    /// Create a new empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the content, moving the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.chars().count();
        self
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Number of characters in the content
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte offset of the cursor within the content
    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index();
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to the start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }
}

/// Render a labeled input line, highlighting the cursor when focused
pub fn render_field(frame: &mut Frame, area: Rect, label: &str, input: &TextInput, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let value_style = Style::default().fg(Color::White);
    let mut spans = vec![Span::styled(format!("{}: ", label), label_style)];

    if input.value().is_empty() && !focused {
        spans.push(Span::styled(
            input.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    } else if focused {
        let chars: Vec<char> = input.value().chars().collect();
        let cursor = input.cursor.min(chars.len());

        let before: String = chars[..cursor].iter().collect();
        let at = chars.get(cursor).copied().unwrap_or(' ');
        let after: String = chars.get(cursor + 1..).map(|c| c.iter().collect()).unwrap_or_default();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            at.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        if !after.is_empty() {
            spans.push(Span::styled(after, value_style));
        }
    } else {
        spans.push(Span::styled(input.value().to_string(), value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
