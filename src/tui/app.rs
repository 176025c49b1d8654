//! Application state for the TUI
//!
//! The App struct holds everything needed for rendering and event handling:
//! the flow controller, one text input per field, focus tracking for the
//! two-field name step, and the transient inline error.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::flow::{FlowController, FlowStep, Profile};
use crate::tui::widgets::TextInput;

/// Which field is focused on the name step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameField {
    #[default]
    First,
    Last,
}

impl NameField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::First => Self::Last,
            Self::Last => Self::First,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        // Two fields, so forward and backward cycling coincide
        self.next()
    }
}

/// Main application state
pub struct App {
    /// Runtime settings
    pub settings: Settings,

    /// The flow state machine
    pub controller: FlowController,

    /// First name input
    pub first_name_input: TextInput,

    /// Last name input
    pub last_name_input: TextInput,

    /// Email input
    pub email_input: TextInput,

    /// Date of birth input (free text, parsed per the configured format)
    pub birth_date_input: TextInput,

    /// Focused field on the name step
    pub name_focus: NameField,

    /// Inline error shown under the form
    pub error_message: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// The completed profile, set when the user confirms the final step
    pub outcome: Option<Profile>,
}

impl App {
    /// Create a new App at the welcome screen
    pub fn new(settings: Settings) -> Self {
        let controller = FlowController::start(settings.minimum_age_years);
        let date_hint = settings.date_hint();
        Self {
            settings,
            controller,
            first_name_input: TextInput::new().placeholder("First name"),
            last_name_input: TextInput::new().placeholder("Last name"),
            email_input: TextInput::new().placeholder("name@example.com"),
            birth_date_input: TextInput::new().placeholder(date_hint),
            name_focus: NameField::default(),
            error_message: None,
            should_quit: false,
            outcome: None,
        }
    }

    /// Request to quit, abandoning the flow
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The text input receiving keystrokes on the current step
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.controller.step() {
            FlowStep::Name => Some(match self.name_focus {
                NameField::First => &mut self.first_name_input,
                NameField::Last => &mut self.last_name_input,
            }),
            FlowStep::Email => Some(&mut self.email_input),
            FlowStep::BirthDate => Some(&mut self.birth_date_input),
            FlowStep::Welcome | FlowStep::Confirmation => None,
        }
    }

    /// Push the current step's edited inputs into the draft.
    ///
    /// Each call builds a fresh draft value through the pure update
    /// functions and replaces the controller's copy.
    pub fn apply_edits(&mut self) {
        let draft = self.controller.draft().clone();
        let draft = match self.controller.step() {
            FlowStep::Name => draft
                .with_first_name(self.first_name_input.value())
                .with_last_name(self.last_name_input.value()),
            FlowStep::Email => draft.with_email(self.email_input.value()),
            FlowStep::BirthDate => draft.with_date_of_birth(self.parsed_birth_date()),
            FlowStep::Welcome | FlowStep::Confirmation => draft,
        };
        self.controller.replace_draft(draft);
    }

    /// Parse the birth-date input per the configured format
    pub fn parsed_birth_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.birth_date_input.value().trim(), &self.settings.date_format)
            .ok()
    }

    /// Advance if the current gate passes, otherwise surface an inline
    /// message and stay put
    pub fn try_advance(&mut self) {
        if self.controller.can_advance() {
            self.error_message = None;
            // gate just checked, so this cannot fail
            if let Err(err) = self.controller.advance() {
                self.error_message = Some(err.to_string());
            }
        } else {
            self.error_message = Some(self.gate_message());
        }
    }

    /// Why the current gate fails, phrased for the user
    fn gate_message(&self) -> String {
        match self.controller.step() {
            FlowStep::Name => "Both first and last name are required".to_string(),
            FlowStep::Email => "Enter a valid email address, like name@example.com".to_string(),
            FlowStep::BirthDate => {
                if self.parsed_birth_date().is_none() {
                    format!("Enter your date of birth as {}", self.settings.date_hint())
                } else {
                    format!(
                        "You must be at least {} years old to continue",
                        self.settings.minimum_age_years
                    )
                }
            }
            FlowStep::Welcome | FlowStep::Confirmation => String::new(),
        }
    }

    /// Go back one step. Values stay in place, except that backing out of
    /// the first form step abandons the draft entirely.
    pub fn go_back(&mut self) {
        self.error_message = None;
        if self.controller.back() == FlowStep::Welcome {
            self.first_name_input.clear();
            self.last_name_input.clear();
            self.email_input.clear();
            self.birth_date_input.clear();
            self.name_focus = NameField::default();
        }
    }

    /// Confirm the final step, handing the completed profile back to main
    pub fn finish(&mut self) {
        match self.controller.finish() {
            Ok(profile) => {
                self.outcome = Some(profile);
                self.should_quit = true;
            }
            Err(err) => {
                self.error_message = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn app() -> App {
        App::new(Settings::default())
    }

    fn adult_dob_text() -> String {
        let today = chrono::Local::now().date_naive();
        format!("{:04}-{:02}-01", today.year() - 25, today.month())
    }

    #[test]
    fn test_starts_on_welcome() {
        let app = app();
        assert_eq!(app.controller.step(), FlowStep::Welcome);
        assert!(app.outcome.is_none());
    }

    #[test]
    fn test_try_advance_blocks_on_empty_name() {
        let mut app = app();
        app.try_advance();
        assert_eq!(app.controller.step(), FlowStep::Name);

        app.apply_edits();
        app.try_advance();
        assert_eq!(app.controller.step(), FlowStep::Name);
        assert_eq!(
            app.error_message.as_deref(),
            Some("Both first and last name are required")
        );
    }

    #[test]
    fn test_keystrokes_flow_into_draft() {
        let mut app = app();
        app.try_advance();
        app.first_name_input = TextInput::new().content("Jane");
        app.last_name_input = TextInput::new().content("Doe");
        app.apply_edits();
        assert_eq!(app.controller.draft().first_name(), Some("Jane"));
        assert_eq!(app.controller.draft().last_name(), Some("Doe"));
    }

    #[test]
    fn test_unparseable_date_message() {
        let mut app = full_walk_to_birth_date();
        app.birth_date_input = TextInput::new().content("febuary 1st");
        app.apply_edits();
        app.try_advance();
        assert_eq!(app.controller.step(), FlowStep::BirthDate);
        assert_eq!(
            app.error_message.as_deref(),
            Some("Enter your date of birth as YYYY-MM-DD")
        );
    }

    #[test]
    fn test_underage_message() {
        let mut app = full_walk_to_birth_date();
        let today = chrono::Local::now().date_naive();
        app.birth_date_input =
            TextInput::new().content(format!("{:04}-{:02}-01", today.year() - 5, today.month()));
        app.apply_edits();
        app.try_advance();
        assert_eq!(
            app.error_message.as_deref(),
            Some("You must be at least 13 years old to continue")
        );
    }

    #[test]
    fn test_full_walk_to_outcome() {
        let mut app = full_walk_to_birth_date();
        app.birth_date_input = TextInput::new().content(adult_dob_text());
        app.apply_edits();
        app.try_advance();
        assert_eq!(app.controller.step(), FlowStep::Confirmation);

        app.finish();
        assert!(app.should_quit);
        let profile = app.outcome.expect("profile completed");
        assert_eq!(profile.full_name(), "Jane Doe");
        assert_eq!(profile.email, "jane@doe.com");
    }

    #[test]
    fn test_back_to_welcome_clears_inputs() {
        let mut app = app();
        app.try_advance();
        app.first_name_input = TextInput::new().content("Jane");
        app.apply_edits();

        app.go_back();
        assert_eq!(app.controller.step(), FlowStep::Welcome);
        assert_eq!(app.first_name_input.value(), "");
        assert_eq!(app.controller.draft().first_name(), None);
    }

    #[test]
    fn test_back_from_email_keeps_names() {
        let mut app = app();
        app.try_advance();
        app.first_name_input = TextInput::new().content("Jane");
        app.last_name_input = TextInput::new().content("Doe");
        app.apply_edits();
        app.try_advance();
        assert_eq!(app.controller.step(), FlowStep::Email);

        app.go_back();
        assert_eq!(app.controller.step(), FlowStep::Name);
        assert_eq!(app.first_name_input.value(), "Jane");
        assert_eq!(app.controller.draft().last_name(), Some("Doe"));
    }

    fn full_walk_to_birth_date() -> App {
        let mut app = app();
        app.try_advance();
        app.first_name_input = TextInput::new().content("Jane");
        app.last_name_input = TextInput::new().content("Doe");
        app.apply_edits();
        app.try_advance();
        app.email_input = TextInput::new().content("jane@doe.com");
        app.apply_edits();
        app.try_advance();
        assert_eq!(app.controller.step(), FlowStep::BirthDate);
        app
    }
}
