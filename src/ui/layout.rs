//! Page layout rendering for the TUI.
//!
//! The whole page is redrawn top to bottom on every event: header,
//! description, divider, farmer section, optional success banner, footer.

use crate::app::{App, AppView};
use crate::config::PageLayout;
use crate::domain::page;
use crate::ui::widgets::farmer_form::{FarmerFormWidget, FORM_HEIGHT};
use crate::ui::widgets::help::HelpWidget;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Draw the main application UI.
///
/// Takes the app mutably because the help overlay records its scroll bounds.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = content_area(frame.area(), app);
    draw_page(frame, app, area);

    if app.view == AppView::Help {
        draw_help(frame, app, frame.area());
    }
}

/// Column the page is drawn into, depending on the configured layout
fn content_area(area: Rect, app: &App) -> Rect {
    match app.config.page.layout {
        PageLayout::Wide => area,
        PageLayout::Centered => {
            let width = app.config.ui.content_width.min(area.width);
            Rect {
                x: area.x + (area.width - width) / 2,
                width,
                ..area
            }
        }
    }
}

fn draw_page(frame: &mut Frame, app: &App, area: Rect) {
    let banner_height = if app.show_success() { 3 } else { 0 };
    let description_height = page::BENEFITS.len() as u16 + 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                  // Title + subtitle
            Constraint::Length(description_height), // Description
            Constraint::Length(1),                  // Divider
            Constraint::Length(2),                  // Section header
            Constraint::Length(FORM_HEIGHT),        // Form
            Constraint::Length(banner_height),      // Success banner
            Constraint::Min(0),                     // Spacer
            Constraint::Length(1),                  // Footer
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    draw_description(frame, chunks[1]);

    let divider = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(divider, chunks[2]);

    let section = Paragraph::new(page::FARMER_SECTION)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(section, chunks[3]);

    frame.render_widget(FarmerFormWidget::new(&app.form), chunks[4]);

    if app.show_success() {
        draw_success_banner(frame, chunks[5]);
    }

    let footer_text = " Tab: Next | ↑/↓: Step | Ctrl+S: Submit | F1: Help | Esc: Quit ";
    let footer = Paragraph::new(footer_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[7]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            app.config.page.heading(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            page::SUBTITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_description(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from(page::INTRO)];
    lines.extend(
        page::BENEFITS
            .iter()
            .map(|item| Line::from(format!("  • {}", item))),
    );
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_success_banner(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(page::SUCCESS_MESSAGE)
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(banner, area);
}

/// Draw help view showing all keybindings
fn draw_help(frame: &mut Frame, app: &mut App, area: Rect) {
    let popup_area = centered_rect(70, 80, area);
    frame.render_widget(HelpWidget::new(&mut app.help_view_state), popup_area);
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
