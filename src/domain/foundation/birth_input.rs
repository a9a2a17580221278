//! Birth input: the validated entry point of every chart computation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Gender, ValidationError};

/// Supported year span for chart computation.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// A birth instant plus gender and calendar flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
    pub gender: Gender,
    /// True when year/month/day are lunar calendar values. Interpretation is
    /// the calendar provider's responsibility.
    #[serde(default)]
    pub is_lunar: bool,
}

impl BirthInput {
    /// Creates an input at the top of the hour.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, gender: Gender) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute: 0,
            second: 0,
            gender,
            is_lunar: false,
        }
    }

    /// Validates all ranges, failing fast on the first violation.
    ///
    /// # Edge Cases
    /// - Day is checked against the actual month length (leap years included)
    ///   for solar inputs; lunar inputs only get the coarse 1-31 check since
    ///   lunar month lengths are the calendar provider's concern.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.year < MIN_YEAR || self.year > MAX_YEAR {
            return Err(ValidationError::out_of_range(
                "year", MIN_YEAR, MAX_YEAR, self.year,
            ));
        }
        if self.month < 1 || self.month > 12 {
            return Err(ValidationError::out_of_range(
                "month", 1, 12, self.month as i32,
            ));
        }
        if self.day < 1 || self.day > 31 {
            return Err(ValidationError::out_of_range("day", 1, 31, self.day as i32));
        }
        if !self.is_lunar && NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none() {
            return Err(ValidationError::invalid_format(
                "day",
                format!("{}-{:02} has no day {}", self.year, self.month, self.day),
            ));
        }
        if self.hour > 23 {
            return Err(ValidationError::out_of_range("hour", 0, 23, self.hour as i32));
        }
        if self.minute > 59 {
            return Err(ValidationError::out_of_range(
                "minute", 0, 59, self.minute as i32,
            ));
        }
        if self.second > 59 {
            return Err(ValidationError::out_of_range(
                "second", 0, 59, self.second as i32,
            ));
        }
        Ok(())
    }
}
