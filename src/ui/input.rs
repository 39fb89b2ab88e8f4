//! Keyboard input handling for the form page.

use crate::domain::FormField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input mode, derived from the focused form element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Typing into a text field
    #[default]
    Text,
    /// Editing a numeric stepper (arrows step the value)
    Number,
    /// Submit button focused; letter keys act as shortcuts
    Button,
}

impl InputMode {
    pub fn for_field(field: FormField) -> Self {
        match field {
            FormField::CropName | FormField::Location => InputMode::Text,
            FormField::Quantity | FormField::Price => InputMode::Number,
            FormField::Submit => InputMode::Button,
        }
    }
}

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    NextField,
    PreviousField,

    // Form
    Submit,

    // Misc
    Help,
    Quit,
}

/// Input handler for processing keyboard events.
///
/// Keys that map to no action are left for the focused widget.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Handle a key event and return the corresponding action
    pub fn handle_key(&self, key: KeyEvent, mode: InputMode) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('s') => Some(Action::Submit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Tab => return Some(Action::NextField),
            KeyCode::BackTab => return Some(Action::PreviousField),
            KeyCode::F(1) => return Some(Action::Help),
            KeyCode::Esc => return Some(Action::Quit),
            _ => {}
        }

        match mode {
            InputMode::Text => self.handle_text_key(key),
            InputMode::Number => None,
            InputMode::Button => self.handle_button_key(key),
        }
    }

    /// Arrows move between fields while typing text
    fn handle_text_key(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Down => Some(Action::NextField),
            KeyCode::Up => Some(Action::PreviousField),
            _ => None,
        }
    }

    fn handle_button_key(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Submit),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::NextField),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::PreviousField),
            KeyCode::Char('?') => Some(Action::Help),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }
}
