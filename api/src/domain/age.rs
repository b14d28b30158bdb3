//! Age calculation
//!
//! Age is derived from the date of birth on every read and never stored.
//! The reference date is always passed in explicitly so the result depends
//! only on the two arguments.

use chrono::{Datelike, NaiveDate};

/// Whole years elapsed between `date_of_birth` and `today`.
///
/// The birthday counts as reached on the day itself. Comparison is done on
/// `(month, day)` pairs, so a Feb 29 birthday is not reached until Mar 1 in
/// non-leap years.
///
/// A date of birth after `today` is not rejected here and yields zero or a
/// negative number; callers validate that before storing a record.
pub fn compute_age(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - date_of_birth.year();

    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years - 1
    } else {
        years
    }
}
