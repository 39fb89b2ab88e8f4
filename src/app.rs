//! Application state and main event loop.

use crate::config::AppConfig;
use crate::domain::CropSubmission;
use crate::error::{AppError, Result};
use crate::ui::input::{Action, InputHandler, InputMode};
use crate::ui::widgets::farmer_form::{FarmerFormState, FormEvent};
use crate::ui::widgets::help::HelpViewState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

/// Application view state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    /// The page with the farmer form
    #[default]
    Form,
    /// Keybinding overlay on top of the form
    Help,
}

/// Main application state
pub struct App {
    /// Loaded configuration
    pub config: AppConfig,
    /// Current view
    pub view: AppView,
    /// Farmer section widgets
    pub form: FarmerFormState,
    /// Snapshot of the last submission, shown until the form changes
    pub last_submission: Option<CropSubmission>,
    /// State for help view (scroll position)
    pub help_view_state: HelpViewState,
    /// Should quit the application
    pub should_quit: bool,

    input_handler: InputHandler,
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            view: AppView::Form,
            form: FarmerFormState::new(),
            last_submission: None,
            help_view_state: HelpViewState::new(),
            should_quit: false,
            input_handler: InputHandler::new(),
        }
    }

    /// Whether the success banner is visible
    pub fn show_success(&self) -> bool {
        self.last_submission.is_some()
    }

    /// Current input mode
    pub fn input_mode(&self) -> InputMode {
        InputMode::for_field(self.form.focus)
    }

    /// Activate the submit button
    pub fn submit(&mut self) {
        let submission = self.form.submission();
        tracing::info!(
            submission = %submission,
            total_value = submission.total_value(),
            "Crop details submitted"
        );
        self.last_submission = Some(submission);
    }

    /// A form value changed, so the previous acknowledgment no longer applies
    fn form_changed(&mut self) {
        if self.last_submission.take().is_some() {
            tracing::debug!("Form edited, hiding success message");
        }
    }

    /// Open help view
    pub fn open_help(&mut self) {
        self.help_view_state = HelpViewState::new();
        self.view = AppView::Help;
    }

    /// Close help view
    pub fn close_help(&mut self) {
        self.view = AppView::Form;
    }

    fn focus_next(&mut self) {
        if self.form.focus_next() {
            self.form_changed();
        }
    }

    fn focus_previous(&mut self) {
        if self.form.focus_previous() {
            self.form_changed();
        }
    }

    /// Handle keyboard input and return true if should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.view == AppView::Help {
            return self.handle_help_key(key);
        }

        if let Some(action) = self.input_handler.handle_key(key, self.input_mode()) {
            match action {
                Action::NextField => self.focus_next(),
                Action::PreviousField => self.focus_previous(),
                Action::Submit => self.submit(),
                Action::Help => self.open_help(),
                Action::Quit => self.should_quit = true,
            }
            return self.should_quit;
        }

        match self.form.handle_key(key) {
            FormEvent::Edited => self.form_changed(),
            FormEvent::FocusMoved => self.focus_next(),
            FormEvent::None => {}
        }

        self.should_quit
    }

    /// Handle keys in help view
    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return true;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1) => {
                self.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => self.help_view_state.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.help_view_state.scroll_down(1),
            KeyCode::PageUp => self.help_view_state.scroll_up(10),
            KeyCode::PageDown => self.help_view_state.scroll_down(10),
            _ => {}
        }
        false
    }

    /// Main event loop, reading crossterm events
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.run_with(terminal, read_terminal_event).await
    }

    /// Event loop over an arbitrary event source.
    ///
    /// `next_event` waits at most the given timeout and returns `None` when
    /// nothing arrived.
    pub async fn run_with<B, F>(&mut self, terminal: &mut Terminal<B>, mut next_event: F) -> Result<()>
    where
        B: Backend,
        F: FnMut(Duration) -> Result<Option<Event>>,
    {
        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| crate::ui::layout::draw(f, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());

            match next_event(timeout)? {
                // Ignore release/repeat reports on terminals that send them
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        break;
                    }
                }
                Some(Event::Resize(width, height)) => {
                    tracing::debug!("Terminal resized to {}x{}", width, height);
                }
                _ => {}
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
            }

            // Polling blocks the thread, so hand control back to let the
            // runtime see Ctrl+C and other tasks
            tokio::task::yield_now().await;
        }

        Ok(())
    }
}

/// Wait up to `timeout` for a terminal event
fn read_terminal_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout).map_err(|e| AppError::Terminal(e.to_string()))? {
        event::read()
            .map(Some)
            .map_err(|e| AppError::Terminal(e.to_string()))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormField;
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app() -> App {
        App::new(AppConfig::default())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(width, height)).unwrap()
    }

    #[test]
    fn test_wheat_scenario() {
        let mut app = app();
        type_text(&mut app, "Wheat");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Backspace));
        type_text(&mut app, "50");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Backspace));
        type_text(&mut app, "20");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "Nashik");
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.form.focus, FormField::Submit);

        assert!(!app.handle_key(key(KeyCode::Enter)));
        assert!(app.show_success());
        assert_eq!(
            app.last_submission,
            Some(CropSubmission {
                crop_name: "Wheat".to_string(),
                quantity_kg: 50,
                price_per_kg: 20,
                location: "Nashik".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_form_still_submits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(app.show_success());
        let submission = app.last_submission.as_ref().unwrap();
        assert!(submission.crop_name.is_empty());
        assert_eq!(submission.quantity_kg, 1);
        assert_eq!(submission.price_per_kg, 1);
    }

    #[test]
    fn test_zero_quantity_is_refused() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Backspace));
        type_text(&mut app, "0");
        assert_eq!(app.form.quantity.buffer(), "");
        app.handle_key(ctrl('s'));
        assert_eq!(app.last_submission.as_ref().unwrap().quantity_kg, 1);
        assert_eq!(app.form.quantity.value(), 1);
    }

    #[test]
    fn test_zero_price_is_refused() {
        let mut app = app();
        app.form.focus = FormField::Price;
        app.handle_key(key(KeyCode::Backspace));
        type_text(&mut app, "0");
        assert_eq!(app.form.price.buffer(), "");

        // Blur by Tab restores the committed minimum
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.form.price.value(), 1);
        assert_eq!(app.form.price.buffer(), "1");

        // Ctrl+S with the Price buffer emptied
        app.form.focus = FormField::Price;
        app.handle_key(key(KeyCode::Backspace));
        type_text(&mut app, "00");
        app.handle_key(ctrl('s'));
        assert_eq!(app.last_submission.as_ref().unwrap().price_per_kg, 1);
    }

    #[test]
    fn test_submit_commits_uncommitted_price() {
        let mut app = app();
        app.form.focus = FormField::Price;
        app.handle_key(key(KeyCode::Backspace));
        type_text(&mut app, "35");
        assert_eq!(app.form.price.value(), 1);

        app.handle_key(ctrl('s'));
        assert_eq!(app.form.focus, FormField::Price);
        assert_eq!(app.last_submission.as_ref().unwrap().price_per_kg, 35);
        assert_eq!(app.form.price.value(), 35);
    }

    #[test]
    fn test_back_tab_commits_numeric_fields() {
        let mut app = app();
        app.form.focus = FormField::Location;
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.form.focus, FormField::Price);
        app.handle_key(key(KeyCode::Backspace));
        type_text(&mut app, "20");

        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.form.focus, FormField::Quantity);
        assert_eq!(app.form.price.value(), 20);
        app.handle_key(key(KeyCode::Backspace));
        type_text(&mut app, "50");

        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.form.focus, FormField::CropName);
        assert_eq!(app.form.quantity.value(), 50);
    }

    #[test]
    fn test_blur_commit_hides_success() {
        let mut app = app();
        app.form.focus = FormField::Price;
        app.submit();
        app.handle_key(key(KeyCode::Backspace));
        type_text(&mut app, "7");
        assert!(!app.show_success());

        app.submit();
        assert!(app.show_success());
        // Nothing pending, so leaving the field keeps the banner
        app.handle_key(key(KeyCode::BackTab));
        assert!(app.show_success());
    }

    #[test]
    fn test_edit_hides_success_but_focus_does_not() {
        let mut app = app();
        app.submit();
        app.handle_key(key(KeyCode::Tab));
        assert!(app.show_success());

        app.handle_key(key(KeyCode::Up));
        assert!(!app.show_success());
        assert_eq!(app.form.quantity.value(), 2);
    }

    #[test]
    fn test_enter_advances_through_fields() {
        let mut app = app();
        for expected in [FormField::Quantity, FormField::Price, FormField::Location, FormField::Submit] {
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.form.focus, expected);
        }
        assert!(!app.show_success());
        app.handle_key(key(KeyCode::Enter));
        assert!(app.show_success());
    }

    #[test]
    fn test_help_opens_and_closes() {
        let mut app = app();
        app.handle_key(key(KeyCode::F(1)));
        assert_eq!(app.view, AppView::Help);
        assert!(!app.handle_key(key(KeyCode::Esc)));
        assert_eq!(app.view, AppView::Form);

        app.open_help();
        assert!(app.handle_key(ctrl('q')));
    }

    #[test]
    fn test_help_scrolls_after_draw() {
        let mut app = app();
        let mut terminal = terminal(80, 20);
        app.open_help();
        terminal.draw(|f| crate::ui::layout::draw(f, &mut app)).unwrap();
        assert!(app.help_view_state.total_lines > app.help_view_state.visible_height);

        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.help_view_state.scroll_offset, 1);
        app.handle_key(key(KeyCode::PageDown));
        assert!(app.help_view_state.scroll_offset > 1);
        let max = app.help_view_state.total_lines - app.help_view_state.visible_height;
        assert!(app.help_view_state.scroll_offset <= max);

        app.handle_key(key(KeyCode::PageUp));
        assert_eq!(app.help_view_state.scroll_offset, 0);
    }

    #[tokio::test]
    async fn test_run_with_scripted_events() {
        let mut app = app();
        let mut terminal = terminal(90, 40);
        let mut events: VecDeque<Event> = "Wheat"
            .chars()
            .map(|c| Event::Key(key(KeyCode::Char(c))))
            .chain([
                Event::Resize(90, 40),
                Event::Key(ctrl('s')),
                Event::Key(key(KeyCode::Esc)),
            ])
            .collect();

        app.run_with(&mut terminal, |_| Ok(events.pop_front()))
            .await
            .unwrap();

        assert!(app.should_quit);
        assert_eq!(
            app.last_submission.as_ref().map(|s| s.crop_name.as_str()),
            Some("Wheat")
        );
    }

    #[tokio::test]
    async fn test_run_yields_to_other_branches() {
        let mut app = app();
        let mut terminal = terminal(90, 40);

        // An idle event source that blocks briefly like a terminal poll
        let idle = |_: Duration| -> Result<Option<Event>> {
            std::thread::sleep(Duration::from_millis(1));
            Ok(None)
        };

        let interrupted = tokio::select! {
            res = app.run_with(&mut terminal, idle) => {
                res.unwrap();
                false
            }
            _ = tokio::time::sleep(Duration::from_millis(20)) => true,
        };
        assert!(interrupted);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));

        let mut app = self::app();
        type_text(&mut app, "q");
        assert!(!app.should_quit);
        assert_eq!(app.form.crop_name.value(), "q");
        assert!(app.handle_key(key(KeyCode::Esc)));
    }
}
