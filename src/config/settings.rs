//! Runtime settings for Solo
//!
//! Everything is derived from command-line arguments and environment
//! variables; nothing is read from or written to disk.

use serde::Serialize;

/// Default minimum age for the birth-date gate
pub const DEFAULT_MINIMUM_AGE: u32 = 13;

/// Default strftime format for date entry
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Effective runtime settings
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    /// Minimum age (whole years) accepted at the birth-date step
    pub minimum_age_years: u32,

    /// strftime format used to parse and display the date of birth
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            minimum_age_years: DEFAULT_MINIMUM_AGE,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Settings {
    /// Build settings from CLI overrides
    pub fn new(minimum_age_years: u32, date_format: String) -> Self {
        Self {
            minimum_age_years,
            date_format,
        }
    }

    /// Human-readable hint for the date entry field, e.g. "YYYY-MM-DD"
    pub fn date_hint(&self) -> String {
        self.date_format
            .replace("%Y", "YYYY")
            .replace("%m", "MM")
            .replace("%d", "DD")
    }
}
