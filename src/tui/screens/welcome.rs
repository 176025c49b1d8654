//! Welcome screen

use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::FlowLayout;

/// Render the welcome body
pub fn render(frame: &mut Frame, _app: &mut App, layout: &FlowLayout) {
    let lines = vec![
        Line::from(""),
        Line::from("Let's get you set up."),
        Line::from(""),
        Line::from("We'll ask for your name, your email address, and your"),
        Line::from("date of birth. It only takes a minute, and nothing is"),
        Line::from("stored after you leave."),
    ];

    let body = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false })
        .centered();
    frame.render_widget(body, layout.body);
}
