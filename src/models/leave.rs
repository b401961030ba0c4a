//! Leave date and applied leave set models.
//!
//! [`LeaveDate`] is the calendar-date value type used everywhere dates cross a
//! boundary. Its canonical text form is the ISO `YYYY-MM-DD` string, which
//! sorts lexicographically in chronological order.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::SalaryMonth;

/// A calendar date with no time component.
///
/// # Example
///
/// ```
/// use salary_engine::models::LeaveDate;
/// use chrono::Weekday;
///
/// let friday: LeaveDate = "2025-01-03".parse().unwrap();
/// let monday: LeaveDate = "2025-01-06".parse().unwrap();
///
/// assert_eq!(friday.weekday(), Weekday::Fri);
/// assert_eq!(friday.days_between(monday), 3);
/// assert_eq!(friday.add_days(1).unwrap().to_string(), "2025-01-04");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LeaveDate(NaiveDate);

impl LeaveDate {
    /// Parses the canonical `YYYY-MM-DD` form.
    ///
    /// Anything that is not exactly ten characters with zero-padded digit
    /// fields is rejected, so `"2025-1-3"` is an error rather than a silent
    /// alias.
    pub fn parse(value: &str) -> EngineResult<Self> {
        let bytes = value.as_bytes();
        let canonical = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !canonical {
            return Err(EngineError::invalid_input(
                "date",
                format!("'{}' is not in YYYY-MM-DD form", value),
            ));
        }

        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| EngineError::invalid_input("date", format!("'{}': {}", value, e)))
    }

    /// Returns the underlying chrono date.
    pub fn naive(self) -> NaiveDate {
        self.0
    }

    /// Returns the date `days` days later, or `None` past the calendar limit.
    pub fn add_days(self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Signed number of calendar days from `self` to `later`.
    ///
    /// Consecutive days are 1 apart; the same date is 0.
    pub fn days_between(self, later: LeaveDate) -> i64 {
        later.0.signed_duration_since(self.0).num_days()
    }

    /// Iterates the dates strictly between `self` and `later`.
    ///
    /// Yields nothing when `later` is not at least two days after `self`.
    pub fn days_strictly_between(self, later: LeaveDate) -> impl Iterator<Item = LeaveDate> {
        let count = usize::try_from(self.days_between(later) - 1).unwrap_or(0);
        self.0.iter_days().skip(1).take(count).map(Self)
    }
}

impl fmt::Display for LeaveDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for LeaveDate {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LeaveDate {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LeaveDate> for String {
    fn from(date: LeaveDate) -> Self {
        date.to_string()
    }
}

/// The leave dates an employee selected for one month.
///
/// Construction enforces that every date lies inside the target month and
/// that no date is given twice. Weekend dates are accepted.
///
/// # Example
///
/// ```
/// use salary_engine::models::{AppliedLeaveSet, SalaryMonth};
///
/// let month: SalaryMonth = "2025-01".parse().unwrap();
/// let leave = AppliedLeaveSet::parse(month, ["2025-01-08", "2025-01-06"]).unwrap();
///
/// let dates: Vec<String> = leave.iter().map(|d| d.to_string()).collect();
/// assert_eq!(dates, vec!["2025-01-06", "2025-01-08"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedLeaveSet {
    month: SalaryMonth,
    dates: BTreeSet<LeaveDate>,
}

impl AppliedLeaveSet {
    /// Builds a leave set, rejecting duplicates and out-of-month dates.
    pub fn new<I>(month: SalaryMonth, dates: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = LeaveDate>,
    {
        let mut set = BTreeSet::new();
        for date in dates {
            if !month.contains(date) {
                return Err(EngineError::invalid_input(
                    "leave_dates",
                    format!("{} is outside {}", date, month),
                ));
            }
            if !set.insert(date) {
                return Err(EngineError::invalid_input(
                    "leave_dates",
                    format!("duplicate date {}", date),
                ));
            }
        }

        Ok(Self { month, dates: set })
    }

    /// Parses canonical date strings and builds a leave set.
    pub fn parse<I, S>(month: SalaryMonth, dates: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = dates
            .into_iter()
            .map(|s| LeaveDate::parse(s.as_ref()))
            .collect::<EngineResult<Vec<_>>>()?;
        Self::new(month, parsed)
    }

    /// The target month.
    pub fn month(&self) -> SalaryMonth {
        self.month
    }

    /// The selected dates in ascending order.
    pub fn dates(&self) -> &BTreeSet<LeaveDate> {
        &self.dates
    }

    /// Iterates the selected dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = LeaveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Number of selected dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True when no date was selected.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> LeaveDate {
        LeaveDate::parse(s).unwrap()
    }

    fn january() -> SalaryMonth {
        SalaryMonth::new(2025, 1).unwrap()
    }

    #[test]
    fn test_parse_canonical_date() {
        let d = date("2025-01-03");
        assert_eq!(d.naive(), NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
        assert_eq!(d.to_string(), "2025-01-03");
    }

    #[test]
    fn test_parse_rejects_unpadded_date() {
        for input in [
            "2025-1-3",
            "+202-01-03",
            " 202-01-03",
            "2025- 1-03",
            "2025-01- 3",
            "2025/01/03",
        ] {
            let result = LeaveDate::parse(input);
            assert!(
                matches!(result, Err(EngineError::InvalidInput { .. })),
                "{input:?} was accepted"
            );
        }
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        assert!(LeaveDate::parse("2025-02-30").is_err());
        assert!(LeaveDate::parse("not-a-date").is_err());
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date("2025-01-03").weekday(), Weekday::Fri);
        assert_eq!(date("2025-01-04").weekday(), Weekday::Sat);
        assert_eq!(date("2024-02-29").weekday(), Weekday::Thu);
    }

    #[test]
    fn test_days_between_across_year_boundary() {
        assert_eq!(date("2024-12-31").days_between(date("2025-01-02")), 2);
        assert_eq!(date("2025-01-06").days_between(date("2025-01-06")), 0);
        assert_eq!(date("2025-01-06").days_between(date("2025-01-05")), -1);
    }

    #[test]
    fn test_add_days_crosses_month() {
        assert_eq!(date("2025-01-31").add_days(1), Some(date("2025-02-01")));
    }

    #[test]
    fn test_days_strictly_between() {
        let between: Vec<_> = date("2025-01-06")
            .days_strictly_between(date("2025-01-09"))
            .collect();
        assert_eq!(between, vec![date("2025-01-07"), date("2025-01-08")]);

        assert_eq!(
            date("2025-01-06")
                .days_strictly_between(date("2025-01-07"))
                .count(),
            0
        );
        assert_eq!(
            date("2025-01-06")
                .days_strictly_between(date("2025-01-01"))
                .count(),
            0
        );
    }

    #[test]
    fn test_lexicographic_order_matches_chronological() {
        let mut strings = vec!["2025-02-01", "2024-12-31", "2025-01-15"];
        let mut dates: Vec<_> = strings.iter().map(|s| date(s)).collect();
        strings.sort();
        dates.sort();
        let formatted: Vec<_> = dates.iter().map(|d| d.to_string()).collect();
        assert_eq!(formatted, strings);
    }

    #[test]
    fn test_serde_uses_iso_string() {
        let json = serde_json::to_string(&date("2025-01-06")).unwrap();
        assert_eq!(json, "\"2025-01-06\"");

        let parsed: LeaveDate = serde_json::from_str("\"2025-01-06\"").unwrap();
        assert_eq!(parsed, date("2025-01-06"));

        assert!(serde_json::from_str::<LeaveDate>("\"2025/01/06\"").is_err());
    }

    #[test]
    fn test_applied_set_sorts_dates() {
        let leave = AppliedLeaveSet::parse(january(), ["2025-01-09", "2025-01-02"]).unwrap();
        assert_eq!(leave.len(), 2);
        assert_eq!(leave.iter().next(), Some(date("2025-01-02")));
    }

    #[test]
    fn test_applied_set_rejects_duplicates() {
        let result = AppliedLeaveSet::parse(january(), ["2025-01-06", "2025-01-06"]);
        match result {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "leave_dates");
                assert!(message.contains("duplicate"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_applied_set_rejects_out_of_month_date() {
        let result = AppliedLeaveSet::parse(january(), ["2025-02-03"]);
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_applied_set_accepts_weekend_date() {
        let leave = AppliedLeaveSet::parse(january(), ["2025-01-04"]).unwrap();
        assert_eq!(leave.len(), 1);
    }

    #[test]
    fn test_applied_set_may_be_empty() {
        let leave = AppliedLeaveSet::new(january(), Vec::new()).unwrap();
        assert!(leave.is_empty());
    }
}
