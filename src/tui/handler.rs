//! Event handler for the TUI
//!
//! Routes keyboard events to the flow based on the current step: editing
//! keys go to the focused input, Enter consults the gate, Esc walks back.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::flow::FlowStep;
use crate::tui::app::App;
use crate::tui::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => {
            handle_key_event(app, key);
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
        Event::Tick => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ctrl+C abandons the flow from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.controller.step() {
        FlowStep::Welcome => handle_welcome_key(app, key),
        FlowStep::Name => handle_name_key(app, key),
        FlowStep::Email | FlowStep::BirthDate => handle_single_field_key(app, key),
        FlowStep::Confirmation => handle_confirmation_key(app, key),
    }
}

/// Welcome screen: proceed or leave
fn handle_welcome_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('p') => app.try_advance(),
        KeyCode::Esc | KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

/// Name step: two fields with Tab/arrow focus cycling. Enter moves from the
/// first field to the second, then submits.
fn handle_name_key(app: &mut App, key: KeyEvent) {
    use crate::tui::app::NameField;

    match key.code {
        KeyCode::Esc => app.go_back(),
        KeyCode::Tab | KeyCode::Down => {
            app.name_focus = app.name_focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.name_focus = app.name_focus.prev();
        }
        KeyCode::Enter => {
            if app.name_focus == NameField::First {
                app.name_focus = NameField::Last;
            } else {
                app.try_advance();
            }
        }
        _ => {
            handle_edit_key(app, key);
        }
    }
}

/// Email and birth-date steps: one input, Enter submits
fn handle_single_field_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.go_back(),
        KeyCode::Enter => app.try_advance(),
        _ => {
            handle_edit_key(app, key);
        }
    }
}

/// Confirmation step: finish, go back to edit, or abandon
fn handle_confirmation_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') => app.finish(),
        KeyCode::Esc => app.go_back(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

/// Forward an editing key to the focused input and sync the draft.
/// Returns false when the key was not an editing key.
fn handle_edit_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    let handled = {
        let Some(input) = app.focused_input() else {
            return false;
        };
        match key.code {
            KeyCode::Backspace => {
                input.backspace();
                true
            }
            KeyCode::Delete => {
                input.delete();
                true
            }
            KeyCode::Left => {
                input.move_left();
                true
            }
            KeyCode::Right => {
                input.move_right();
                true
            }
            KeyCode::Home => {
                input.move_start();
                true
            }
            KeyCode::End => {
                input.move_end();
                true
            }
            KeyCode::Char(c) => {
                input.insert(c);
                true
            }
            _ => false,
        }
    };

    if handled {
        app.error_message = None;
        app.apply_edits();
    }
    handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::tui::app::NameField;
    use chrono::Datelike;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key_event(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = App::new(Settings::default());
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
        assert!(app.outcome.is_none());
    }

    #[test]
    fn test_key_driven_walk_to_confirmation() {
        let mut app = App::new(Settings::default());

        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.controller.step(), FlowStep::Name);

        type_text(&mut app, "Jane");
        handle_key_event(&mut app, key(KeyCode::Enter)); // focus moves to last name
        assert_eq!(app.name_focus, NameField::Last);
        type_text(&mut app, "Doe");
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.controller.step(), FlowStep::Email);

        type_text(&mut app, "jane@doe.com");
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.controller.step(), FlowStep::BirthDate);

        let today = chrono::Local::now().date_naive();
        type_text(&mut app, &format!("{:04}-{:02}-01", today.year() - 25, today.month()));
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.controller.step(), FlowStep::Confirmation);

        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.should_quit);
        assert_eq!(app.outcome.unwrap().full_name(), "Jane Doe");
    }

    #[test]
    fn test_invalid_email_blocks_enter() {
        let mut app = App::new(Settings::default());
        handle_key_event(&mut app, key(KeyCode::Enter));
        type_text(&mut app, "Jane");
        handle_key_event(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "Doe");
        handle_key_event(&mut app, key(KeyCode::Enter));

        type_text(&mut app, "jane@doe");
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.controller.step(), FlowStep::Email);
        assert!(app.error_message.is_some());

        // typing again clears the inline error
        type_text(&mut app, ".com");
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_esc_walks_back() {
        let mut app = App::new(Settings::default());
        handle_key_event(&mut app, key(KeyCode::Enter));
        type_text(&mut app, "Jane");
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.controller.step(), FlowStep::Welcome);
        // abandoning back to welcome discards the draft
        assert_eq!(app.controller.draft().first_name(), None);
    }
}
