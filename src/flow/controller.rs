//! Flow controller
//!
//! Owns the current step and the profile draft, and enforces the linear
//! ordering: a step's gate must pass before the flow moves forward.

use crate::error::{SoloError, SoloResult};
use crate::flow::draft::{Profile, ProfileDraft};
use crate::flow::step::FlowStep;
use crate::flow::validate;

/// The gate for a single step: does `draft` satisfy everything the step
/// collects?
///
/// `Welcome` and `Confirmation` carry no gate and always pass. Gates are
/// pure; calling this any number of times with the same inputs yields the
/// same answer.
pub fn step_passes(step: FlowStep, draft: &ProfileDraft, minimum_age_years: u32) -> bool {
    match step {
        FlowStep::Welcome | FlowStep::Confirmation => true,
        FlowStep::Name => {
            draft.first_name().is_some_and(validate::is_non_empty)
                && draft.last_name().is_some_and(validate::is_non_empty)
        }
        FlowStep::Email => draft.email().is_some_and(validate::is_valid_email),
        FlowStep::BirthDate => draft
            .date_of_birth()
            .is_some_and(|dob| validate::is_valid_age(dob, minimum_age_years)),
    }
}

/// Sequences the onboarding steps and carries the draft between them
#[derive(Debug)]
pub struct FlowController {
    step: FlowStep,
    draft: ProfileDraft,
    minimum_age_years: u32,
}

impl FlowController {
    /// Start a new flow at the welcome screen with an empty draft
    pub fn start(minimum_age_years: u32) -> Self {
        Self {
            step: FlowStep::Welcome,
            draft: ProfileDraft::new(),
            minimum_age_years,
        }
    }

    /// The current step
    pub fn step(&self) -> FlowStep {
        self.step
    }

    /// The current draft
    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// The minimum age enforced by the birth-date gate
    pub fn minimum_age_years(&self) -> u32 {
        self.minimum_age_years
    }

    /// Replace the draft with an edited copy. The presentation layer builds
    /// the new value through the draft's pure update functions.
    pub fn replace_draft(&mut self, draft: ProfileDraft) {
        self.draft = draft;
    }

    /// Whether the current step's gate passes on the current draft
    pub fn can_advance(&self) -> bool {
        step_passes(self.step, &self.draft, self.minimum_age_years)
    }

    /// Whether the flow has reached its terminal step
    pub fn is_terminal(&self) -> bool {
        self.step.is_terminal()
    }

    /// Move to the next step.
    ///
    /// Fails with [`SoloError::Precondition`] when the current gate does not
    /// pass; callers are expected to consult [`Self::can_advance`] first. At
    /// the terminal step this is a no-op. The draft is carried forward
    /// unchanged.
    pub fn advance(&mut self) -> SoloResult<FlowStep> {
        if !self.can_advance() {
            return Err(SoloError::precondition(self.step));
        }
        self.step = self.step.next();
        Ok(self.step)
    }

    /// Move to the previous step without revalidating anything; entered
    /// values stay in the draft for editing. Backing out of the first form
    /// step abandons the flow: the draft is discarded and the welcome
    /// screen starts fresh.
    pub fn back(&mut self) -> FlowStep {
        self.step = self.step.prev();
        if self.step == FlowStep::Welcome {
            self.draft = ProfileDraft::new();
        }
        self.step
    }

    /// Restart the flow with an empty draft
    pub fn reset(&mut self) {
        self.step = FlowStep::Welcome;
        self.draft = ProfileDraft::new();
    }

    /// Convert the draft into a completed profile.
    ///
    /// Only valid at the terminal step, once every gate has passed.
    pub fn finish(&self) -> SoloResult<Profile> {
        if !self.is_terminal() {
            return Err(SoloError::precondition(self.step));
        }
        self.draft.complete(self.minimum_age_years)
    }
}
