//! Field validators
//!
//! Pure, total predicates over draft fields. Invalid input yields `false`,
//! never an error; the controller turns these booleans into UI gating.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Syntactic email pattern: `localpart@domain.tld`, where the top-level
/// segment is 2-64 alphabetic characters. No DNS lookup, no deliverability
/// check.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$")
        .expect("email pattern is valid")
});

/// True iff the string contains any non-whitespace character
pub fn is_non_empty(s: &str) -> bool {
    !s.trim().is_empty()
}

/// True iff the string is syntactically an email address
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_PATTERN.is_match(s)
}

/// True iff the person born on `dob` is at least `minimum_years` old today
pub fn is_valid_age(dob: NaiveDate, minimum_years: u32) -> bool {
    is_valid_age_on(dob, chrono::Local::now().date_naive(), minimum_years)
}

/// Deterministic variant of [`is_valid_age`] with an explicit reference date
pub fn is_valid_age_on(dob: NaiveDate, today: NaiveDate, minimum_years: u32) -> bool {
    whole_years_between(dob, today) >= minimum_years as i32
}

/// Whole calendar years elapsed from `from` to `to`.
/// Negative when `to` precedes `from`.
fn whole_years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_non_empty() {
        assert!(is_non_empty("Jane"));
        assert!(is_non_empty("  J  "));
        assert!(!is_non_empty(""));
        assert!(!is_non_empty("   "));
        assert!(!is_non_empty("\t\n"));
    }

    #[test]
    fn test_non_empty_matches_trim() {
        for s in ["", " ", "a", " a ", "\u{00A0}x", "  \t"] {
            assert_eq!(is_non_empty(s), !s.trim().is_empty(), "input: {:?}", s);
        }
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("jane.doe+tag@sub.example.co"));
        assert!(is_valid_email("JANE@EXAMPLE.COM"));
        assert!(is_valid_email("user_name%x@host-name.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("jane@doe")); // missing TLD
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("jane@example.c")); // TLD too short
        assert!(!is_valid_email("jane@example.c0m")); // TLD not alphabetic
        assert!(!is_valid_email("jane doe@example.com"));
    }

    #[test]
    fn test_age_boundaries() {
        let today = date(2025, 6, 15);
        // 13th birthday is today: exactly 13
        assert!(is_valid_age_on(date(2012, 6, 15), today, 13));
        // 13th birthday is tomorrow: still 12
        assert!(!is_valid_age_on(date(2012, 6, 16), today, 13));
        // 20 years ago passes, 5 years ago does not
        assert!(is_valid_age_on(date(2005, 6, 15), today, 13));
        assert!(!is_valid_age_on(date(2020, 6, 15), today, 13));
    }

    #[test]
    fn test_future_dob_fails() {
        let today = date(2025, 6, 15);
        assert!(!is_valid_age_on(today + Duration::days(1), today, 13));
        assert!(!is_valid_age_on(date(2100, 1, 1), today, 13));
        // zero minimum still rejects the unborn
        assert!(!is_valid_age_on(today + Duration::days(1), today, 0));
    }

    #[test]
    fn test_age_against_current_date() {
        let today = chrono::Local::now().date_naive();
        let twenty_years_ago = date(today.year() - 20, today.month(), 1);
        assert!(is_valid_age(twenty_years_ago, 13));
    }

    #[test]
    fn test_leap_day_birthday() {
        let dob = date(2012, 2, 29);
        // Feb 28 of a common year: the leap-day birthday has not occurred yet
        assert!(!is_valid_age_on(dob, date(2025, 2, 28), 13));
        // March 1: it has
        assert!(is_valid_age_on(dob, date(2025, 3, 1), 13));
    }
}
