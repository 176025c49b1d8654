//! Flow screens
//!
//! One render function per step, plus the chrome shared by all of them:
//! card border, progress indicator, step title, inline error, key hints.

pub mod birth_date;
pub mod confirm;
pub mod email;
pub mod name;
pub mod welcome;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::flow::FlowStep;
use crate::tui::app::App;
use crate::tui::layout::FlowLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let (card, layout) = FlowLayout::new(frame.area());

    frame.render_widget(Clear, card);

    let block = Block::default()
        .title(" Solo ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, card);

    let step = app.controller.step();

    // Progress dots for form steps; the welcome screen sits before the form
    if let Some(current) = step.form_index() {
        let dots: String = (0..FlowStep::FORM_STEPS)
            .map(|i| if i <= current { "● " } else { "○ " })
            .collect();
        let progress = Paragraph::new(Line::from(Span::styled(
            dots.trim_end().to_string(),
            Style::default().fg(Color::Cyan),
        )))
        .centered();
        frame.render_widget(progress, layout.progress);
    }

    // Step title
    let title = Paragraph::new(Line::from(Span::styled(
        step.title(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .centered();
    frame.render_widget(title, layout.title);

    // Step body
    match step {
        FlowStep::Welcome => welcome::render(frame, app, &layout),
        FlowStep::Name => name::render(frame, app, &layout),
        FlowStep::Email => email::render(frame, app, &layout),
        FlowStep::BirthDate => birth_date::render(frame, app, &layout),
        FlowStep::Confirmation => confirm::render(frame, app, &layout),
    }

    // Inline error
    if let Some(ref error) = app.error_message {
        let line = Paragraph::new(Line::from(Span::styled(
            format!("! {}", error),
            Style::default().fg(Color::Red),
        )))
        .centered();
        frame.render_widget(line, layout.error);
    }

    // Key hints
    frame.render_widget(Paragraph::new(hints_line(step)).centered(), layout.hints);
}

/// Key-hint footer for a step
fn hints_line(step: FlowStep) -> Line<'static> {
    let hint = |k: &'static str, label: &'static str| {
        vec![
            Span::styled(k, Style::default().fg(Color::Green)),
            Span::raw(label),
        ]
    };

    let mut spans = Vec::new();
    match step {
        FlowStep::Welcome => {
            spans.extend(hint("[Enter]", " Proceed  "));
            spans.extend(hint("[Q]", " Quit"));
        }
        FlowStep::Name => {
            spans.extend(hint("[Tab]", " Switch field  "));
            spans.extend(hint("[Enter]", " Continue  "));
            spans.extend(hint("[Esc]", " Back"));
        }
        FlowStep::Email | FlowStep::BirthDate => {
            spans.extend(hint("[Enter]", " Continue  "));
            spans.extend(hint("[Esc]", " Back"));
        }
        FlowStep::Confirmation => {
            spans.extend(hint("[Enter]", " Confirm  "));
            spans.extend(hint("[Esc]", " Back  "));
            spans.extend(hint("[Q]", " Quit"));
        }
    }
    Line::from(spans)
}
