//! The farmer section: crop form inputs and the submit button.

use super::number_input::{NumberInputAction, NumberInputState, NumberInputWidget};
use super::text_input::{TextInputAction, TextInputState, TextInputWidget};
use crate::domain::{CropSubmission, FormField, MIN_PRICE_PER_KG, MIN_QUANTITY_KG};
use crossterm::event::KeyEvent;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Height of one bordered input row
pub const FIELD_HEIGHT: u16 = 3;

/// Total height needed to draw the form
pub const FORM_HEIGHT: u16 = FIELD_HEIGHT * 5;

/// What a key press did to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Nothing to react to
    None,
    /// A field value changed
    Edited,
    /// Enter pressed on a field, focus should advance
    FocusMoved,
}

/// Widget state of the farmer section
#[derive(Debug, Clone)]
pub struct FarmerFormState {
    pub focus: FormField,
    pub crop_name: TextInputState,
    pub quantity: NumberInputState,
    pub price: NumberInputState,
    pub location: TextInputState,
}

impl Default for FarmerFormState {
    fn default() -> Self {
        Self {
            focus: FormField::default(),
            crop_name: TextInputState::new(),
            quantity: NumberInputState::new(MIN_QUANTITY_KG),
            price: NumberInputState::new(MIN_PRICE_PER_KG),
            location: TextInputState::new(),
        }
    }
}

impl FarmerFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move focus to the next element, committing a numeric field on blur
    pub fn focus_next(&mut self) -> bool {
        let changed = self.blur();
        self.focus = self.focus.next();
        changed
    }

    /// Move focus to the previous element, committing a numeric field on blur
    pub fn focus_previous(&mut self) -> bool {
        let changed = self.blur();
        self.focus = self.focus.previous();
        changed
    }

    /// Commit the focused numeric buffer. Returns true if its value changed.
    fn blur(&mut self) -> bool {
        match self.focus {
            FormField::Quantity => self.quantity.commit(),
            FormField::Price => self.price.commit(),
            _ => false,
        }
    }

    /// Route a key to the focused element
    pub fn handle_key(&mut self, key: KeyEvent) -> FormEvent {
        match self.focus {
            FormField::CropName => Self::text_event(self.crop_name.handle_key(key)),
            FormField::Location => Self::text_event(self.location.handle_key(key)),
            FormField::Quantity => Self::number_event(self.quantity.handle_key(key)),
            FormField::Price => Self::number_event(self.price.handle_key(key)),
            FormField::Submit => FormEvent::None,
        }
    }

    fn text_event(action: TextInputAction) -> FormEvent {
        match action {
            TextInputAction::Changed => FormEvent::Edited,
            TextInputAction::Submit => FormEvent::FocusMoved,
            TextInputAction::None => FormEvent::None,
        }
    }

    fn number_event(action: NumberInputAction) -> FormEvent {
        match action {
            NumberInputAction::Edited | NumberInputAction::Changed => FormEvent::Edited,
            NumberInputAction::Submit => FormEvent::FocusMoved,
            NumberInputAction::None => FormEvent::None,
        }
    }

    /// Commit pending numeric edits and take a snapshot of the form
    pub fn submission(&mut self) -> CropSubmission {
        self.quantity.commit();
        self.price.commit();
        CropSubmission {
            crop_name: self.crop_name.value().to_string(),
            quantity_kg: self.quantity.value(),
            price_per_kg: self.price.value(),
            location: self.location.value().to_string(),
        }
    }
}

/// Widget drawing the four inputs and the submit button
pub struct FarmerFormWidget<'a> {
    state: &'a FarmerFormState,
}

impl<'a> FarmerFormWidget<'a> {
    pub fn new(state: &'a FarmerFormState) -> Self {
        Self { state }
    }
}

impl Widget for FarmerFormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(FIELD_HEIGHT); 5])
            .split(area);

        let state = self.state;
        let focus = state.focus;

        TextInputWidget::new(state.crop_name.value(), state.crop_name.cursor)
            .title(FormField::CropName.label())
            .placeholder("e.g. Wheat")
            .focused(focus == FormField::CropName)
            .render(rows[0], buf);

        NumberInputWidget::new(&state.quantity)
            .title(FormField::Quantity.label())
            .focused(focus == FormField::Quantity)
            .render(rows[1], buf);

        NumberInputWidget::new(&state.price)
            .title(FormField::Price.label())
            .focused(focus == FormField::Price)
            .render(rows[2], buf);

        TextInputWidget::new(state.location.value(), state.location.cursor)
            .title(FormField::Location.label())
            .placeholder("e.g. Nashik")
            .focused(focus == FormField::Location)
            .render(rows[3], buf);

        render_button(rows[4], buf, focus == FormField::Submit);
    }
}

fn render_button(area: Rect, buf: &mut Buffer, focused: bool) {
    let label = format!(" {} ", FormField::Submit.label());
    let width = (Line::from(label.as_str()).width() as u16 + 2).min(area.width);
    let button_area = Rect { width, ..area };

    let (border, text) = if focused {
        (
            Style::default().fg(Color::Green),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::White),
        )
    };

    Paragraph::new(Span::styled(label, text))
        .block(Block::default().borders(Borders::ALL).border_style(border))
        .render(button_area, buf);
}
