//! Salary month model.
//!
//! A [`SalaryMonth`] identifies the calendar month a salary is settled for.
//! Its canonical text form is `YYYY-MM`, which is also the settlement key
//! stored alongside every salary record.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::LeaveDate;

/// A calendar month (year + month number).
///
/// # Example
///
/// ```
/// use salary_engine::models::SalaryMonth;
///
/// let month: SalaryMonth = "2024-02".parse().unwrap();
/// assert_eq!(month.days_in_month(), 29);
/// assert_eq!(month.to_string(), "2024-02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SalaryMonth {
    first_day: NaiveDate,
}

impl SalaryMonth {
    /// Creates a month, rejecting month numbers outside 1..=12 and years
    /// that do not fit the four-digit canonical form.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=9999).contains(&year) {
            return Err(EngineError::invalid_input(
                "month",
                format!("year {} is out of range", year),
            ));
        }

        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| {
                EngineError::invalid_input("month", format!("month {} is out of range", month))
            })
    }

    /// Parses the canonical `YYYY-MM` form.
    pub fn parse(value: &str) -> EngineResult<Self> {
        let malformed =
            || EngineError::invalid_input("month", format!("'{}' is not in YYYY-MM form", value));

        let (year, month) = value.split_once('-').ok_or_else(malformed)?;
        let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !digits(year) || !digits(month) {
            return Err(malformed());
        }

        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }

    /// The calendar year.
    pub fn year(self) -> i32 {
        self.first_day.year()
    }

    /// The month number, 1 through 12.
    pub fn month(self) -> u32 {
        self.first_day.month()
    }

    /// Number of calendar days in the month (28 to 31).
    pub fn days_in_month(self) -> u32 {
        // Only December can sit next to chrono's upper limit.
        self.first_day
            .checked_add_months(Months::new(1))
            .map_or(31, |next| {
                next.signed_duration_since(self.first_day).num_days() as u32
            })
    }

    /// True when the date falls inside this month.
    pub fn contains(self, date: LeaveDate) -> bool {
        let naive = date.naive();
        naive.year() == self.year() && naive.month() == self.month()
    }
}

impl fmt::Display for SalaryMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for SalaryMonth {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SalaryMonth {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SalaryMonth> for String {
    fn from(month: SalaryMonth) -> Self {
        month.to_string()
    }
}
