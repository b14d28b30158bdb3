//! User domain entity
//!
//! A person record. The date of birth is the only stored fact about age.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::age::compute_age;

/// Date format used on the wire and in validation messages
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Database-assigned identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i32);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>().map(UserId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub dob: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Age in whole years as of `today`
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        compute_age(self.dob, today)
    }

    /// Date of birth formatted as `YYYY-MM-DD`
    pub fn dob_string(&self) -> String {
        self.dob.format(DATE_FORMAT).to_string()
    }
}

/// Validated data for creating or replacing a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub dob: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_born(dob: NaiveDate) -> User {
        User {
            id: UserId(1),
            name: "Alice".to_string(),
            dob,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn age_on_uses_reference_date() {
        let user = user_born(NaiveDate::from_ymd_opt(1990, 5, 10).unwrap());

        assert_eq!(user.age_on(NaiveDate::from_ymd_opt(2024, 5, 9).unwrap()), 33);
        assert_eq!(user.age_on(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()), 34);
    }

    #[test]
    fn dob_string_is_zero_padded() {
        let user = user_born(NaiveDate::from_ymd_opt(2001, 2, 3).unwrap());
        assert_eq!(user.dob_string(), "2001-02-03");
    }

    #[test]
    fn user_id_parse() {
        assert_eq!("42".parse::<UserId>().unwrap(), UserId(42));
        assert!("abc".parse::<UserId>().is_err());
        assert!("99999999999".parse::<UserId>().is_err());
    }

    #[test]
    fn user_id_display() {
        assert_eq!(UserId(7).to_string(), "7");
    }
}
