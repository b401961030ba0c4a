//! Day detection logic.
//!
//! This module determines the day type (weekday, Saturday, Sunday) for a
//! leave date and whether a day counts as a non-working day for the
//! sandwich-leave policy.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::{LeaveDate, PublicHolidaySet};

/// Represents the type of day in the working week.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// assert!(day_type.is_weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayType {
    /// True for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::{get_day_type, DayType};
///
/// // 2025-01-04 is a Saturday
/// assert_eq!(get_day_type("2025-01-04".parse().unwrap()), DayType::Saturday);
///
/// // 2025-01-05 is a Sunday
/// assert_eq!(get_day_type("2025-01-05".parse().unwrap()), DayType::Sunday);
///
/// // 2025-01-06 is a Monday
/// assert_eq!(get_day_type("2025-01-06".parse().unwrap()), DayType::Weekday);
/// ```
pub fn get_day_type(date: LeaveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns true when the date is a weekend day or a public holiday.
///
/// These are the days that get pulled into a leave block when they sit in a
/// short gap between two leave dates.
pub fn is_non_working_day(date: LeaveDate, public_holidays: &PublicHolidaySet) -> bool {
    get_day_type(date).is_weekend() || public_holidays.contains(&date)
}
