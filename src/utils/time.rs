//! Time utilities: validation of the `HH:MM:SS` default time.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use regex::Regex;
use std::sync::OnceLock;

fn hms_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{2}:\d{2}:\d{2}$").expect("valid HH:MM:SS regex"))
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    if !hms_pattern().is_match(t) {
        return None;
    }
    NaiveTime::parse_from_str(t, "%H:%M:%S").ok()
}

/// Validate a default time string.
///
/// The string must be zero-padded `HH:MM:SS` and name a real time of day
/// (`24:00:00` and `12:60:00` are rejected). The original text is returned
/// unchanged so that rows carry exactly what the user typed.
pub fn validate_time(t: &str) -> AppResult<String> {
    match parse_time(t) {
        Some(_) => Ok(t.to_string()),
        None => Err(AppError::Validation(format!(
            "Invalid time format: '{t}' (expected HH:MM:SS, e.g. 09:30:00)"
        ))),
    }
}
