//! Request types for the salary engine API.
//!
//! Months and dates arrive as plain strings and are validated when converted
//! to domain types, so a bad value is reported as a `VALIDATION_ERROR` that
//! names the offending field.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AppliedLeaveSet, LeaveDate, PublicHolidaySet, SalaryMonth};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Base monthly salary, as a JSON number or string.
    pub base_salary: Decimal,
    /// Target month, `YYYY-MM`.
    pub month: String,
    /// Applied leave dates, `YYYY-MM-DD`, all within `month`.
    #[serde(default)]
    pub leave_dates: Vec<String>,
    /// Public holidays to use instead of the configured calendar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_holidays: Option<Vec<String>>,
}

impl CalculationRequest {
    /// Validates the month and leave dates.
    pub fn leave_set(&self) -> EngineResult<AppliedLeaveSet> {
        leave_set(&self.month, &self.leave_dates)
    }

    /// Parses the request's holiday override, if one was given.
    pub fn public_holidays(&self) -> EngineResult<Option<PublicHolidaySet>> {
        self.public_holidays
            .as_ref()
            .map(|dates| {
                dates
                    .iter()
                    .map(|d| LeaveDate::parse(d))
                    .collect::<EngineResult<PublicHolidaySet>>()
            })
            .transpose()
    }
}

/// Request body for settling or previewing an employee's salary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// Target month, `YYYY-MM`.
    pub month: String,
    /// Applied leave dates, `YYYY-MM-DD`, all within `month`.
    #[serde(default)]
    pub leave_dates: Vec<String>,
}

impl SettlementRequest {
    /// Validates the month and leave dates.
    pub fn leave_set(&self) -> EngineResult<AppliedLeaveSet> {
        leave_set(&self.month, &self.leave_dates)
    }
}

/// Query string for the monthly salary listing.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthQuery {
    /// Month to list, `YYYY-MM`.
    pub month: String,
}

fn leave_set(month: &str, dates: &[String]) -> EngineResult<AppliedLeaveSet> {
    let month = SalaryMonth::parse(month)?;
    AppliedLeaveSet::parse(month, dates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_calculation_request_accepts_number_or_string_salary() {
        let from_number: CalculationRequest =
            serde_json::from_str(r#"{"base_salary": 3100, "month": "2025-01"}"#).unwrap();
        let from_string: CalculationRequest =
            serde_json::from_str(r#"{"base_salary": "3100.50", "month": "2025-01"}"#).unwrap();

        assert_eq!(from_number.base_salary, Decimal::new(3100, 0));
        assert_eq!(from_string.base_salary, Decimal::new(310050, 2));
        assert!(from_number.leave_dates.is_empty());
        assert!(from_number.public_holidays.is_none());
    }

    #[test]
    fn test_leave_set_validates_month() {
        let request = SettlementRequest {
            month: "2025-13".to_string(),
            leave_dates: vec![],
        };
        assert!(matches!(
            request.leave_set(),
            Err(EngineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_leave_set_rejects_dates_outside_month() {
        let request = SettlementRequest {
            month: "2025-01".to_string(),
            leave_dates: vec!["2025-02-03".to_string()],
        };
        match request.leave_set() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "leave_dates"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_holiday_override_is_parsed() {
        let request = CalculationRequest {
            base_salary: Decimal::new(2800, 0),
            month: "2025-02".to_string(),
            leave_dates: vec![],
            public_holidays: Some(vec!["2025-02-05".to_string()]),
        };
        let holidays = request.public_holidays().unwrap().unwrap();
        assert!(holidays.contains(&"2025-02-05".parse().unwrap()));

        let bad = CalculationRequest {
            public_holidays: Some(vec!["5 Feb".to_string()]),
            ..request
        };
        assert!(bad.public_holidays().is_err());
    }
}
