//! Help overlay listing the keybindings.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Help categories
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Moving Between Fields",
        &[
            ("Tab", "Next field"),
            ("Shift+Tab", "Previous field"),
            ("↓/↑", "Next / previous (text fields, button)"),
            ("Enter", "Next field"),
        ],
    ),
    (
        "Quantity & Price",
        &[
            ("0-9", "Type a value"),
            ("↑/+", "Increase by 1"),
            ("↓/-", "Decrease by 1 (never below 1)"),
        ],
    ),
    (
        "Submitting",
        &[
            ("Enter/Space", "Submit (on the button)"),
            ("Ctrl+S", "Submit from any field"),
        ],
    ),
    (
        "General",
        &[
            ("F1 / ?", "Show this help"),
            ("Esc", "Close help / Quit"),
            ("Ctrl+C, Ctrl+Q", "Quit"),
        ],
    ),
];

/// State for the help view
#[derive(Debug, Default, Clone)]
pub struct HelpViewState {
    /// Current scroll offset (in lines)
    pub scroll_offset: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Visible height
    pub visible_height: usize,
}

impl HelpViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(n);
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        let max_offset = self.total_lines.saturating_sub(self.visible_height);
        self.scroll_offset = (self.scroll_offset + n).min(max_offset);
    }
}

/// Help view widget
pub struct HelpWidget<'a> {
    state: &'a mut HelpViewState,
}

impl<'a> HelpWidget<'a> {
    pub fn new(state: &'a mut HelpViewState) -> Self {
        Self { state }
    }

    /// Build help text lines
    fn build_lines() -> Vec<Line<'static>> {
        let mut lines = vec![Line::from("")];

        for (section_name, bindings) in HELP_SECTIONS {
            lines.push(Line::from(Span::styled(
                format!("─── {} ───", section_name),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));

            for (key, description) in *bindings {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:16}", key), Style::default().fg(Color::Green)),
                    Span::raw(*description),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("  Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Green)),
            Span::styled(" to close help", Style::default().fg(Color::DarkGray)),
        ]));

        lines
    }
}

impl Widget for HelpWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let lines = Self::build_lines();

        self.state.total_lines = lines.len();
        self.state.visible_height = area.height.saturating_sub(2) as usize;
        let offset = self
            .state
            .scroll_offset
            .min(self.state.total_lines.saturating_sub(self.state.visible_height));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help ");

        let inner = block.inner(area);
        block.render(area, buf);

        let visible_lines: Vec<Line> = lines
            .into_iter()
            .skip(offset)
            .take(inner.height as usize)
            .collect();
        Paragraph::new(visible_lines).render(inner, buf);

        if self.state.total_lines > self.state.visible_height {
            let mut scrollbar_state = ScrollbarState::new(self.state.total_lines).position(offset);
            let scrollbar_area = Rect {
                x: area.x + area.width.saturating_sub(1),
                y: area.y + 1,
                width: 1,
                height: area.height.saturating_sub(2),
            };
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .render(scrollbar_area, buf, &mut scrollbar_state);
        }
    }
}
