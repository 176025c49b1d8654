//! Terminal User Interface module
//!
//! The presentation layer for the onboarding flow, built on ratatui. It
//! renders one screen per flow step, captures field edits into the draft,
//! and consults the flow controller to gate progression.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Screens
pub mod screens;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_flow;
