//! Configuration for Solo

pub mod settings;

pub use settings::Settings;
