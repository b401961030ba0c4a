//! Persisted salary record.
//!
//! A [`SalaryRecord`] is what the settlement store keeps per
//! (employee, month), and what the salary slip is rendered from. The field
//! names are part of the persisted document format and must not change.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{LeaveDate, SalaryMonth};

/// An immutable settled salary for one employee and one month.
///
/// # Example
///
/// ```
/// use salary_engine::models::SalaryRecord;
/// use rust_decimal::Decimal;
///
/// let record = SalaryRecord {
///     name: "John Doe".to_string(),
///     role: "Employee".to_string(),
///     month: "2025-01".parse().unwrap(),
///     selected_leave_dates: vec!["2025-01-06".parse().unwrap()],
///     effective_leave_days: 1,
///     deduction: Decimal::new(100, 0),
///     effective_salary: Decimal::new(3000, 0),
/// };
///
/// let json = serde_json::to_value(&record).unwrap();
/// assert_eq!(json["effectiveLeaveDays"], 1);
/// assert_eq!(json["selectedLeaveDates"][0], "2025-01-06");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    /// Employee name at settlement time.
    pub name: String,
    /// Employee role at settlement time.
    pub role: String,
    /// The settled month.
    pub month: SalaryMonth,
    /// The dates the employee selected, ascending. Injected weekend days
    /// are not listed here.
    pub selected_leave_dates: Vec<LeaveDate>,
    /// Leave days deducted after the sandwich policy.
    pub effective_leave_days: u32,
    /// Amount deducted from the base salary.
    pub deduction: Decimal,
    /// Base salary minus deduction; may be negative.
    pub effective_salary: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn create_record() -> SalaryRecord {
        SalaryRecord {
            name: "Jane Smith".to_string(),
            role: "Accountant".to_string(),
            month: "2025-02".parse().unwrap(),
            selected_leave_dates: vec![
                "2025-02-03".parse().unwrap(),
                "2025-02-07".parse().unwrap(),
            ],
            effective_leave_days: 2,
            deduction: Decimal::from_str("321.428571428571428571").unwrap(),
            effective_salary: Decimal::from_str("4178.571428571428571429").unwrap(),
        }
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let record = create_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: SalaryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_persisted_field_names() {
        let value = serde_json::to_value(create_record()).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "deduction",
                "effectiveLeaveDays",
                "effectiveSalary",
                "month",
                "name",
                "role",
                "selectedLeaveDates",
            ]
        );
        assert_eq!(value["month"], "2025-02");
    }

    #[test]
    fn test_negative_effective_salary_round_trips() {
        let mut record = create_record();
        record.effective_salary = Decimal::new(-15000, 2);
        let json = serde_json::to_string(&record).unwrap();
        let back: SalaryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.effective_salary, Decimal::new(-15000, 2));
    }
}
