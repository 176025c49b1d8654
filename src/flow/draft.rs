//! Profile draft and completed profile
//!
//! `ProfileDraft` accumulates the user's answers as the flow progresses.
//! Edits never mutate a draft in place: each update function consumes the
//! current value and returns a new one, and the controller replaces its
//! draft wholesale. Both types hold personal data and wipe their string
//! contents when dropped.

use chrono::NaiveDate;
use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{SoloError, SoloResult};
use crate::flow::validate;

/// In-progress onboarding answers
///
/// A field is unset until its owning step has been visited; it may hold
/// partially typed (and therefore invalid) text while the user edits. The
/// step gates decide when the draft is good enough to advance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ProfileDraft {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    #[zeroize(skip)]
    date_of_birth: Option<NaiveDate>,
}

impl ProfileDraft {
    /// Create an empty draft, as handed out when the flow starts
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the first name
    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    /// Replace the last name
    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    /// Replace the email address
    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    /// Replace the date of birth. `None` records that the entered text did
    /// not parse as a date.
    pub fn with_date_of_birth(mut self, value: Option<NaiveDate>) -> Self {
        self.date_of_birth = value;
        self
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    /// Convert the draft into a completed profile, validating every field.
    ///
    /// The gated flow path only calls this once each step has passed, so a
    /// failure here means the caller skipped the gates.
    pub fn complete(&self, minimum_age_years: u32) -> SoloResult<Profile> {
        let first_name = self
            .first_name()
            .filter(|v| validate::is_non_empty(v))
            .ok_or_else(|| SoloError::invalid_field("first name"))?;
        let last_name = self
            .last_name()
            .filter(|v| validate::is_non_empty(v))
            .ok_or_else(|| SoloError::invalid_field("last name"))?;
        let email = self
            .email()
            .filter(|v| validate::is_valid_email(v))
            .ok_or_else(|| SoloError::invalid_field("email"))?;
        let date_of_birth = self
            .date_of_birth
            .filter(|&dob| validate::is_valid_age(dob, minimum_age_years))
            .ok_or_else(|| SoloError::invalid_field("date of birth"))?;

        Ok(Profile {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_string(),
            date_of_birth,
        })
    }
}

/// A fully validated onboarding profile
///
/// Can only be constructed through [`ProfileDraft::complete`], so holding a
/// `Profile` is proof that every field passed its validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[zeroize(skip)]
    pub date_of_birth: NaiveDate,
}

impl Profile {
    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn adult_dob() -> NaiveDate {
        let today = chrono::Local::now().date_naive();
        NaiveDate::from_ymd_opt(today.year() - 25, today.month(), 1).unwrap()
    }

    fn valid_draft() -> ProfileDraft {
        ProfileDraft::new()
            .with_first_name("Jane")
            .with_last_name("Doe")
            .with_email("jane@doe.com")
            .with_date_of_birth(Some(adult_dob()))
    }

    #[test]
    fn test_updates_are_pure() {
        let empty = ProfileDraft::new();
        let named = empty.clone().with_first_name("Jane");
        assert_eq!(empty.first_name(), None);
        assert_eq!(named.first_name(), Some("Jane"));
    }

    #[test]
    fn test_update_preserves_other_fields() {
        let draft = valid_draft().with_email("other@example.org");
        assert_eq!(draft.first_name(), Some("Jane"));
        assert_eq!(draft.last_name(), Some("Doe"));
        assert_eq!(draft.email(), Some("other@example.org"));
        assert_eq!(draft.date_of_birth(), Some(adult_dob()));
    }

    #[test]
    fn test_complete_valid_draft() {
        let profile = valid_draft().complete(13).unwrap();
        assert_eq!(profile.first_name, "Jane");
        assert_eq!(profile.last_name, "Doe");
        assert_eq!(profile.email, "jane@doe.com");
        assert_eq!(profile.date_of_birth, adult_dob());
        assert_eq!(profile.full_name(), "Jane Doe");
    }

    #[test]
    fn test_complete_trims_whitespace() {
        let profile = valid_draft()
            .with_first_name("  Jane ")
            .complete(13)
            .unwrap();
        assert_eq!(profile.first_name, "Jane");
    }

    #[test]
    fn test_complete_rejects_missing_fields() {
        let err = ProfileDraft::new().complete(13).unwrap_err();
        assert!(matches!(err, SoloError::Validation(_)));

        let err = valid_draft().with_email("jane@doe").complete(13).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: field 'email' is missing or invalid"
        );
    }

    #[test]
    fn test_complete_rejects_underage() {
        let today = chrono::Local::now().date_naive();
        let five_years_ago =
            NaiveDate::from_ymd_opt(today.year() - 5, today.month(), 1).unwrap();
        let err = valid_draft()
            .with_date_of_birth(Some(five_years_ago))
            .complete(13)
            .unwrap_err();
        assert!(matches!(err, SoloError::Validation(_)));
    }

    #[test]
    fn test_profile_serializes() {
        let profile = valid_draft().complete(13).unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"first_name\":\"Jane\""));
        assert!(json.contains("\"date_of_birth\""));
    }
}
