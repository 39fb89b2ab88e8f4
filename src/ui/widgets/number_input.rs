//! Numeric stepper widget with a lower bound.
//!
//! The value is edited through a text buffer that only accepts digits.
//! An edit that would leave a number under the minimum in the buffer is
//! refused, so the widget never shows one. The buffer is committed back
//! into the value when the widget loses focus or the form is submitted; an
//! empty buffer restores the last committed value.

use super::text_input::{border_style, cursor_line};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

/// State for a bounded integer input
#[derive(Debug, Clone)]
pub struct NumberInputState {
    /// Last committed value, never below `min`
    value: u32,
    /// Lower bound
    min: u32,
    /// Text being edited
    buffer: String,
    /// Cursor position in the buffer
    cursor: usize,
}

impl NumberInputState {
    /// Create a state starting at its minimum
    pub fn new(min: u32) -> Self {
        Self::with_value(min, min)
    }

    /// Create a state with an initial value (clamped to `min`)
    pub fn with_value(min: u32, value: u32) -> Self {
        let value = value.max(min);
        let buffer = value.to_string();
        let cursor = buffer.len();
        Self {
            value,
            min,
            buffer,
            cursor,
        }
    }

    /// Committed value
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Lower bound
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Text currently shown in the widget
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in the buffer
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Set the value, clamping to the minimum. Returns the stored value.
    pub fn set(&mut self, value: u32) -> u32 {
        self.value = value.max(self.min);
        self.buffer = self.value.to_string();
        self.cursor = self.buffer.len();
        self.value
    }

    /// Parse the edit buffer into the value.
    ///
    /// Returns true if the committed value changed.
    pub fn commit(&mut self) -> bool {
        let before = self.value;
        match Self::parse_buffer(&self.buffer) {
            Some(v) => self.set(v) != before,
            None => {
                self.set(before);
                false
            }
        }
    }

    /// Digits only, so the only parse failure is overflow
    fn parse_buffer(buffer: &str) -> Option<u32> {
        if buffer.is_empty() {
            None
        } else {
            Some(buffer.parse::<u32>().unwrap_or(u32::MAX))
        }
    }

    /// Replace the buffer unless the result would read as a number under `min`
    fn try_edit(&mut self, candidate: String, cursor: usize) -> NumberInputAction {
        match Self::parse_buffer(&candidate) {
            Some(v) if v < self.min => {
                tracing::debug!("Rejected edit {:?}, minimum is {}", candidate, self.min);
                NumberInputAction::None
            }
            _ => {
                self.buffer = candidate;
                self.cursor = cursor;
                NumberInputAction::Edited
            }
        }
    }

    /// Step the value up by one
    pub fn increment(&mut self) -> bool {
        self.commit();
        let before = self.value;
        self.set(before.saturating_add(1)) != before
    }

    /// Step the value down by one, stopping at the minimum
    pub fn decrement(&mut self) -> bool {
        self.commit();
        let before = self.value;
        self.set(before.saturating_sub(1)) != before
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> NumberInputAction {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return NumberInputAction::None;
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let mut candidate = self.buffer.clone();
                candidate.insert(self.cursor, c);
                self.try_edit(candidate, self.cursor + 1)
            }
            KeyCode::Char('+') | KeyCode::Up => {
                if self.increment() {
                    NumberInputAction::Changed
                } else {
                    NumberInputAction::None
                }
            }
            KeyCode::Char('-') | KeyCode::Down => {
                if self.decrement() {
                    NumberInputAction::Changed
                } else {
                    NumberInputAction::None
                }
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let mut candidate = self.buffer.clone();
                    candidate.remove(self.cursor - 1);
                    self.try_edit(candidate, self.cursor - 1)
                } else {
                    NumberInputAction::None
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.buffer.len() {
                    let mut candidate = self.buffer.clone();
                    candidate.remove(self.cursor);
                    self.try_edit(candidate, self.cursor)
                } else {
                    NumberInputAction::None
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                NumberInputAction::None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.buffer.len());
                NumberInputAction::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                NumberInputAction::None
            }
            KeyCode::End => {
                self.cursor = self.buffer.len();
                NumberInputAction::None
            }
            KeyCode::Enter => NumberInputAction::Submit,
            // Letters, signs and separators are rejected
            _ => NumberInputAction::None,
        }
    }
}

/// Actions that can result from number input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberInputAction {
    /// Nothing changed
    None,
    /// Edit buffer changed, value not yet committed
    Edited,
    /// Committed value changed (stepper)
    Changed,
    /// User submitted (Enter)
    Submit,
}

/// Widget for a bounded integer input with stepper hints
pub struct NumberInputWidget<'a> {
    state: &'a NumberInputState,
    title: &'a str,
    focused: bool,
}

impl<'a> NumberInputWidget<'a> {
    pub fn new(state: &'a NumberInputState) -> Self {
        Self {
            state,
            title: "Number",
            focused: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for NumberInputWidget<'_> {
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

        // Unfocused widgets always show the committed value
        let line = if self.focused {
            cursor_line(self.state.buffer(), Some(self.state.cursor()), Style::default())
        } else {
            Line::from(self.state.value().to_string())
        };
        buf.set_line(inner.x, inner.y, &line, inner.width);

        let stepper = Line::from(vec![
            Span::styled("−", step_style(self.state.value() > self.state.min())),
            Span::raw(" "),
            Span::styled("+", step_style(true)),
        ]);
        let stepper_width = stepper.width() as u16;
        if inner.width > stepper_width + 2 {
            buf.set_line(
                inner.x + inner.width - stepper_width,
                inner.y,
                &stepper,
                stepper_width,
            );
        }
    }
}

fn step_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
