//! Email entry screen

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

/// Render the email form body
pub fn render(frame: &mut Frame, app: &mut App, layout: &FlowLayout) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Email field
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Note
            Constraint::Min(0),
        ])
        .split(layout.body);

    render_field(frame, chunks[1], "Email", &app.email_input, true);

    let note = Paragraph::new(Line::from("We won't send you anything."))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(note, chunks[3]);
}
