//! Text input widget for single-line text entry.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

/// Style of the character under the cursor
pub(crate) fn cursor_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::White)
}

/// Border style for a form widget
pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Build the text line for a value with an optional block cursor
pub(crate) fn cursor_line<'a>(value: &'a str, cursor: Option<usize>, style: Style) -> Line<'a> {
    let Some(cursor) = cursor else {
        return Line::from(Span::styled(value, style));
    };

    let split = byte_offset(value, cursor);
    let (before, rest) = value.split_at(split);
    let mut chars = rest.chars();
    let under = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let after = chars.as_str();

    Line::from(vec![
        Span::styled(before, style),
        Span::styled(under, cursor_style()),
        Span::styled(after, style),
    ])
}

/// Byte offset of the `char_idx`-th character, or the string length
fn byte_offset(value: &str, char_idx: usize) -> usize {
    value
        .char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

/// Single-line text input widget
pub struct TextInputWidget<'a> {
    /// Current input value
    value: &'a str,
    /// Cursor position (character index)
    cursor: usize,
    /// Placeholder text when empty
    placeholder: &'a str,
    /// Label shown in the border
    title: &'a str,
    /// Whether the input is focused
    focused: bool,
}

impl<'a> TextInputWidget<'a> {
    /// Create a new text input widget
    pub fn new(value: &'a str, cursor: usize) -> Self {
        Self {
            value,
            cursor,
            placeholder: "",
            title: "Input",
            focused: false,
        }
    }

    /// Set placeholder text
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set title
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(self.focused))
            .title(format!(" {} ", self.title));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let line = if self.value.is_empty() {
            let mut spans = Vec::new();
            if self.focused {
                spans.push(Span::styled(" ", cursor_style()));
            }
            spans.push(Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray),
            ));
            Line::from(spans)
        } else {
            let cursor = self.focused.then_some(self.cursor);
            cursor_line(self.value, cursor, Style::default())
        };

        buf.set_line(inner.x, inner.y, &line, inner.width);
    }
}

/// State for text input
#[derive(Debug, Default, Clone)]
pub struct TextInputState {
    /// Current value
    pub value: String,
    /// Cursor position (character index)
    pub cursor: usize,
}

impl TextInputState {
    /// Create a new text input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> TextInputAction {
        match key.code {
            KeyCode::Char(c) => {
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    return TextInputAction::None;
                }
                let at = byte_offset(&self.value, self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
                TextInputAction::Changed
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = byte_offset(&self.value, self.cursor);
                    self.value.remove(at);
                    TextInputAction::Changed
                } else {
                    TextInputAction::None
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.len() {
                    let at = byte_offset(&self.value, self.cursor);
                    self.value.remove(at);
                    TextInputAction::Changed
                } else {
                    TextInputAction::None
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                TextInputAction::None
            }
            KeyCode::Right => {
                if self.cursor < self.len() {
                    self.cursor += 1;
                }
                TextInputAction::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                TextInputAction::None
            }
            KeyCode::End => {
                self.cursor = self.len();
                TextInputAction::None
            }
            KeyCode::Enter => TextInputAction::Submit,
            _ => TextInputAction::None,
        }
    }

    /// Get the current value
    pub fn value(&self) -> &str {
        &self.value
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }
}

/// Actions that can result from text input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputAction {
    /// No action
    None,
    /// Value changed
    Changed,
    /// User submitted (Enter)
    Submit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn typed(text: &str) -> TextInputState {
        let mut state = TextInputState::new();
        for c in text.chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
        state
    }

    #[test]
    fn test_text_input_state() {
        let mut state = TextInputState::new();
        assert_eq!(state.value(), "");

        assert_eq!(state.handle_key(key(KeyCode::Char('h'))), TextInputAction::Changed);
        state.handle_key(key(KeyCode::Char('i')));
        assert_eq!(state.value(), "hi");
        assert_eq!(state.cursor, 2);

        state.handle_key(key(KeyCode::Backspace));
        assert_eq!(state.value(), "h");
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_text_input_navigation() {
        let mut state = typed("Nashik");
        assert_eq!(state.cursor, 6);

        state.handle_key(key(KeyCode::Home));
        assert_eq!(state.cursor, 0);

        state.handle_key(key(KeyCode::End));
        assert_eq!(state.cursor, 6);

        state.handle_key(key(KeyCode::Left));
        assert_eq!(state.cursor, 5);

        state.handle_key(key(KeyCode::Delete));
        assert_eq!(state.value(), "Nashi");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut state = typed("गेहूं");
        assert_eq!(state.cursor, 5);
        state.handle_key(key(KeyCode::Home));
        state.handle_key(key(KeyCode::Char('x')));
        assert_eq!(state.value(), "xगेहूं");

        state.handle_key(key(KeyCode::End));
        state.handle_key(key(KeyCode::Backspace));
        assert_eq!(state.value(), "xगेहू");
    }

    #[test]
    fn test_control_chars_ignored() {
        let mut state = TextInputState::new();
        let action = state.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(action, TextInputAction::None);
        assert_eq!(state.value(), "");
    }

    #[test]
    fn test_text_input_actions() {
        let mut state = TextInputState::new();
        assert_eq!(state.handle_key(key(KeyCode::Enter)), TextInputAction::Submit);
        assert_eq!(state.handle_key(key(KeyCode::Esc)), TextInputAction::None);
        assert_eq!(state.handle_key(key(KeyCode::Backspace)), TextInputAction::None);
    }

    #[test]
    fn test_render_shows_label_and_value() {
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        TextInputWidget::new("Wheat", 5)
            .title("Crop Name")
            .render(area, &mut buf);

        let top: String = (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        let middle: String = (0..area.width).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(top.contains("Crop Name"));
        assert!(middle.contains("Wheat"));
    }
}
