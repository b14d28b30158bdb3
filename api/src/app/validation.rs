//! Input validation for user writes
//!
//! Raw request strings are checked and converted here so that only well-formed
//! names and real calendar dates reach the service and the age calculation.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::domain::entities::{NewUser, DATE_FORMAT};
use crate::error::DomainError;

pub const MAX_NAME_LENGTH: usize = 255;
pub const INVALID_DATE_MESSAGE: &str = "invalid date format, use YYYY-MM-DD";
pub const FUTURE_DATE_MESSAGE: &str = "date of birth cannot be in the future";

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"))
}

/// Trim and bound-check a user name
pub fn validate_name(name: &str) -> Result<String, DomainError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(DomainError::Validation("name is required".to_string()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::Validation(format!(
            "name must be at most {} characters",
            MAX_NAME_LENGTH
        )));
    }

    Ok(name.to_string())
}

/// Parse a strict `YYYY-MM-DD` date
///
/// chrono alone accepts unpadded fields like `1990-1-5`, so the shape is
/// checked first.
pub fn parse_date_of_birth(raw: &str) -> Result<NaiveDate, DomainError> {
    if raw.is_empty() {
        return Err(DomainError::Validation("dob is required".to_string()));
    }
    if !date_pattern().is_match(raw) {
        return Err(DomainError::Validation(INVALID_DATE_MESSAGE.to_string()));
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| DomainError::Validation(INVALID_DATE_MESSAGE.to_string()))
}

/// Validate a full create/update payload against the current date
pub fn validate_user(name: &str, dob: &str, today: NaiveDate) -> Result<NewUser, DomainError> {
    let name = validate_name(name)?;
    let dob = parse_date_of_birth(dob)?;

    if dob > today {
        return Err(DomainError::Validation(FUTURE_DATE_MESSAGE.to_string()));
    }

    Ok(NewUser { name, dob })
}
