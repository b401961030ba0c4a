//! Public holiday models.
//!
//! This module contains the [`PublicHoliday`] and [`HolidayCalendar`] types.
//! The sandwich-leave counter only needs membership checks, so the calendar
//! can be flattened into a [`PublicHolidaySet`] with [`HolidayCalendar::dates`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::LeaveDate;

/// The set of public holiday dates, checked for membership only.
pub type PublicHolidaySet = HashSet<LeaveDate>;

/// Represents a single public holiday.
///
/// # Example
///
/// ```
/// use salary_engine::models::PublicHoliday;
///
/// let holiday = PublicHoliday {
///     date: "2025-03-23".parse().unwrap(),
///     name: "Pakistan Day".to_string(),
///     region: "national".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: LeaveDate,
    /// The name of the public holiday.
    pub name: String,
    /// The region where this holiday applies.
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    "national".to_string()
}

/// A list of public holidays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    /// The holidays, in no particular order.
    #[serde(default)]
    pub holidays: Vec<PublicHoliday>,
}

impl HolidayCalendar {
    /// Returns the holiday dates as a membership set.
    pub fn dates(&self) -> PublicHolidaySet {
        self.holidays.iter().map(|h| h.date).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(date: &str, name: &str) -> PublicHoliday {
        PublicHoliday {
            date: date.parse().unwrap(),
            name: name.to_string(),
            region: "national".to_string(),
        }
    }

    fn create_calendar() -> HolidayCalendar {
        HolidayCalendar {
            holidays: vec![
                holiday("2025-12-25", "Quaid-e-Azam Day"),
                holiday("2025-02-05", "Kashmir Solidarity Day"),
                holiday("2025-05-01", "Labour Day"),
            ],
        }
    }

    #[test]
    fn test_dates_collects_membership_set() {
        let dates = create_calendar().dates();
        assert_eq!(dates.len(), 3);
        assert!(dates.contains(&"2025-05-01".parse().unwrap()));
        assert!(!dates.contains(&"2025-02-06".parse().unwrap()));
    }

    #[test]
    fn test_dates_collapses_repeated_entries() {
        let calendar = HolidayCalendar {
            holidays: vec![
                holiday("2025-12-25", "Quaid-e-Azam Day"),
                holiday("2025-12-25", "Christmas Day"),
            ],
        };
        assert_eq!(calendar.dates().len(), 1);
    }

    #[test]
    fn test_deserialize_public_holiday_defaults_region() {
        let json = r#"{ "date": "2025-08-14", "name": "Independence Day" }"#;
        let holiday: PublicHoliday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.region, "national");
        assert_eq!(holiday.date.to_string(), "2025-08-14");
    }

    #[test]
    fn test_serialize_public_holiday() {
        let json = serde_json::to_string(&holiday("2025-12-25", "Christmas Day")).unwrap();
        assert!(json.contains("\"date\":\"2025-12-25\""));
        assert!(json.contains("\"name\":\"Christmas Day\""));
        assert!(json.contains("\"region\":\"national\""));
    }
}
