//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{NaiveDate, Utc};

use crate::domain::entities::{User, UserId};

/// Reference date shared by tests that use a `FixedClock`
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 18).unwrap()
}

/// Create a test user with default values
pub fn test_user() -> User {
    test_user_born(1990, 5, 10)
}

/// Create a test user with a specific date of birth
pub fn test_user_born(year: i32, month: u32, day: u32) -> User {
    User {
        id: UserId(1),
        name: "test-user".to_string(),
        dob: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Create a test user with a specific id and name
pub fn test_user_named(id: i32, name: &str) -> User {
    User {
        id: UserId(id),
        name: name.to_string(),
        ..test_user()
    }
}
