//! Name entry screen
//!
//! Two text fields with Tab/arrow focus cycling.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::tui::app::{App, NameField};
use crate::tui::layout::FlowLayout;
use crate::tui::widgets::input::render_field;

/// Render the name form body
pub fn render(frame: &mut Frame, app: &mut App, layout: &FlowLayout) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // First name
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Last name
            Constraint::Min(0),
        ])
        .split(layout.body);

    render_field(
        frame,
        chunks[1],
        "First name",
        &app.first_name_input,
        app.name_focus == NameField::First,
    );
    render_field(
        frame,
        chunks[3],
        "Last name",
        &app.last_name_input,
        app.name_focus == NameField::Last,
    );
}
