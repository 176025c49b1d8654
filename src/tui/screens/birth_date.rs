//! Date of birth entry screen

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::FlowLayout;
use crate::tui::widgets::input::render_field;

/// Render the birth-date form body
pub fn render(frame: &mut Frame, app: &mut App, layout: &FlowLayout) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Date field
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Format note
            Constraint::Min(0),
        ])
        .split(layout.body);

    render_field(frame, chunks[1], "Date of birth", &app.birth_date_input, true);

    let note = Paragraph::new(Line::from(format!(
        "Format: {}. You must be at least {} years old.",
        app.settings.date_hint(),
        app.settings.minimum_age_years
    )))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(note, chunks[3]);
}
