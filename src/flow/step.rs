//! Flow step enumeration
//!
//! The onboarding flow is a fixed linear sequence. Rather than one "am I
//! visible" flag per screen, the current position is a single explicit enum
//! consumed by the controller.

use std::fmt;

/// A position in the onboarding flow
///
/// `Welcome` is the entry state and `Confirmation` the terminal state;
/// neither has a validation gate. The form steps in between each gate
/// advancement on a slice of the profile draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowStep {
    /// Welcome screen, shown before any data entry
    #[default]
    Welcome,
    /// First and last name entry
    Name,
    /// Email address entry
    Email,
    /// Date of birth entry
    BirthDate,
    /// Review of the completed profile
    Confirmation,
}

/// All steps in flow order
pub const STEP_ORDER: &[FlowStep] = &[
    FlowStep::Welcome,
    FlowStep::Name,
    FlowStep::Email,
    FlowStep::BirthDate,
    FlowStep::Confirmation,
];

impl FlowStep {
    /// Get the next step in the sequence
    ///
    /// The terminal step has no successor and returns itself.
    pub fn next(self) -> Self {
        match self {
            Self::Welcome => Self::Name,
            Self::Name => Self::Email,
            Self::Email => Self::BirthDate,
            Self::BirthDate => Self::Confirmation,
            Self::Confirmation => Self::Confirmation,
        }
    }

    /// Get the previous step in the sequence
    ///
    /// The entry step has no predecessor and returns itself.
    pub fn prev(self) -> Self {
        match self {
            Self::Welcome => Self::Welcome,
            Self::Name => Self::Welcome,
            Self::Email => Self::Name,
            Self::BirthDate => Self::Email,
            Self::Confirmation => Self::BirthDate,
        }
    }

    /// Whether this is the terminal step
    pub fn is_terminal(self) -> bool {
        self == Self::Confirmation
    }

    /// Whether this step collects form input
    pub fn is_form(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::BirthDate)
    }

    /// Zero-based position of a form step, for the progress indicator.
    /// The welcome screen sits before the form and has no position.
    pub fn form_index(self) -> Option<usize> {
        match self {
            Self::Welcome => None,
            Self::Name => Some(0),
            Self::Email => Some(1),
            Self::BirthDate => Some(2),
            Self::Confirmation => Some(3),
        }
    }

    /// Number of form positions shown in the progress indicator
    pub const FORM_STEPS: usize = 4;

    /// Screen title for this step
    pub fn title(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome!",
            Self::Name => "Enter Your Name",
            Self::Email => "Enter Your Email",
            Self::BirthDate => "Enter Your Date of Birth",
            Self::Confirmation => "Confirm Your Details",
        }
    }
}

impl fmt::Display for FlowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Welcome => "Welcome",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::BirthDate => "BirthDate",
            Self::Confirmation => "Confirmation",
        };
        write!(f, "{}", name)
    }
}
