//! Confirmation screen
//!
//! Shows the draft's four values for a final review before finishing.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::FlowLayout;

/// Render the confirmation body
pub fn render(frame: &mut Frame, app: &mut App, layout: &FlowLayout) {
    let draft = app.controller.draft();

    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<16}", label), Style::default().fg(Color::Yellow)),
            Span::styled(
                value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    };

    let birth_date = draft
        .date_of_birth()
        .map(|dob| dob.format(&app.settings.date_format).to_string())
        .unwrap_or_default();

    let lines = vec![
        Line::from(""),
        row("First name", draft.first_name().unwrap_or_default().trim().to_string()),
        row("Last name", draft.last_name().unwrap_or_default().trim().to_string()),
        row("Email", draft.email().unwrap_or_default().trim().to_string()),
        row("Date of birth", birth_date),
    ];

    frame.render_widget(Paragraph::new(lines), layout.body);
}
