//! Solo - Terminal-based guided onboarding flow
//!
//! This library implements a linear onboarding wizard: a welcome screen
//! followed by name, email, and date-of-birth entry, ending in a
//! confirmation of the collected profile. Entered data lives only in
//! memory for the duration of the flow.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Runtime settings (minimum age, date format)
//! - `error`: Custom error types
//! - `flow`: The wizard state machine: steps, validators, draft, controller
//! - `tui`: The ratatui presentation layer
//!
//! # Example
//!
//! ```rust
//! use solo_cli::flow::{FlowController, FlowStep};
//!
//! let mut flow = FlowController::start(13);
//! assert_eq!(flow.step(), FlowStep::Welcome);
//! assert!(flow.can_advance());
//! flow.advance().unwrap();
//! assert_eq!(flow.step(), FlowStep::Name);
//! ```

pub mod config;
pub mod error;
pub mod flow;
pub mod tui;

pub use error::{SoloError, SoloResult};
