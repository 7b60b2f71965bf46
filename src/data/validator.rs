//! Field validators, stateless and backed by fixed patterns.

use std::sync::OnceLock;

use regex::Regex;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static JOINED_DATE_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(
            r"^[_A-Za-z0-9\-+]+(\.[_A-Za-z0-9\-]+)*@[A-Za-z0-9\-]+(\.[A-Za-z0-9]+)*(\.[A-Za-z]{2,})$",
        )
        .expect("Invalid email regex pattern")
    })
}

// YYYYMMDD, years 2000-2099 only, ASCII digits
fn joined_date_regex() -> &'static Regex {
    JOINED_DATE_REGEX.get_or_init(|| {
        Regex::new(r"^(20[0-9]{2})([0-9]{2})([0-9]{2})$")
            .expect("Invalid joined date regex pattern")
    })
}

/// Validate an email address.
pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Validate a `YYYYMMDD` joined date.
///
/// Only the shape and the century are checked; whether the month and day exist
/// is left to date construction.
pub fn validate_joined_date(yyyymmdd: &str) -> bool {
    joined_date_regex().is_match(yyyymmdd)
}

/// Splits a `YYYYMMDD` joined date into year, month and day.
///
/// Returns `None` when [`validate_joined_date`] would reject the value.
pub fn joined_date_parts(yyyymmdd: &str) -> Option<(i32, u32, u32)> {
    let captures = joined_date_regex().captures(yyyymmdd)?;
    let year = captures[1].parse().ok()?;
    let month = captures[2].parse().ok()?;
    let day = captures[3].parse().ok()?;
    Some((year, month, day))
}
