//! Onboarding flow core
//!
//! The wizard state machine behind the TUI: step sequencing, the validation
//! gates between steps, and the profile draft carried forward. Everything
//! here is synchronous, pure computation over in-memory values; the
//! presentation layer owns rendering and input.

pub mod controller;
pub mod draft;
pub mod step;
pub mod validate;

pub use controller::{step_passes, FlowController};
pub use draft::{Profile, ProfileDraft};
pub use step::FlowStep;
