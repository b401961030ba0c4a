//! Monthly salary calculation pipeline.
//!
//! Runs weekend bridging, the sandwich-leave count and proration in order and
//! assembles a [`SalaryCalculation`] with a full audit trace.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{
    AppliedLeaveSet, AuditTrace, AuditWarning, PublicHolidaySet, SalaryCalculation,
};

use super::day_detection::get_day_type;
use super::proration::compute_deduction;
use super::sandwich_leave::count_effective_leave_days;
use super::weekend_bridge::bridge_weekends;

/// Calculates a month's salary after sandwich-leave deductions.
///
/// The pipeline is pure: it performs no I/O and the same inputs always give
/// the same result.
///
/// 1. Bridge the weekend between Friday and Monday leave.
/// 2. Count effective leave days over the bridged set.
/// 3. Prorate the base salary over the calendar days of the month.
///
/// Leave dates on weekends or public holidays are accepted and reported as
/// warnings, as is a deduction larger than the base salary.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidInput`] for a negative base
/// salary and [`crate::error::EngineError::CalculationError`] on overflow.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::calculate_salary;
/// use salary_engine::models::{AppliedLeaveSet, PublicHolidaySet};
/// use rust_decimal::Decimal;
///
/// let month = "2025-01".parse().unwrap();
/// let leave = AppliedLeaveSet::parse(month, ["2025-01-03", "2025-01-06"]).unwrap();
///
/// let result = calculate_salary(Decimal::new(3100, 0), &leave, &PublicHolidaySet::new()).unwrap();
/// assert_eq!(result.effective_leave_days, 4);
/// assert_eq!(result.deduction, Decimal::new(400, 0));
/// assert_eq!(result.effective_salary, Decimal::new(2700, 0));
/// ```
pub fn calculate_salary(
    base_salary: Decimal,
    leave: &AppliedLeaveSet,
    public_holidays: &PublicHolidaySet,
) -> EngineResult<SalaryCalculation> {
    let mut trace = AuditTrace::default();
    let mut step_number: u32 = 1;

    for date in leave.iter() {
        if get_day_type(date).is_weekend() {
            trace.warnings.push(AuditWarning {
                code: "WEEKEND_LEAVE_DATE".to_string(),
                message: format!("{} falls on a weekend and was counted as leave", date),
                severity: "low".to_string(),
            });
        } else if public_holidays.contains(&date) {
            trace.warnings.push(AuditWarning {
                code: "HOLIDAY_LEAVE_DATE".to_string(),
                message: format!("{} is a public holiday and was counted as leave", date),
                severity: "low".to_string(),
            });
        }
    }

    let bridge = bridge_weekends(leave.dates(), step_number);
    trace.steps.push(bridge.audit_step);
    step_number += 1;

    let sandwich = count_effective_leave_days(&bridge.dates, public_holidays, step_number);
    trace.steps.push(sandwich.audit_step);
    step_number += 1;

    let proration = compute_deduction(
        base_salary,
        sandwich.effective_leave_days,
        leave.month(),
        step_number,
    )?;
    trace.steps.push(proration.audit_step);

    if proration.effective_salary < Decimal::ZERO {
        trace.warnings.push(AuditWarning {
            code: "DEDUCTION_EXCEEDS_SALARY".to_string(),
            message: format!(
                "{} effective leave days exceed the {} days in {}",
                sandwich.effective_leave_days,
                proration.days_in_month,
                leave.month()
            ),
            severity: "high".to_string(),
        });
    }

    debug!(
        month = %leave.month(),
        applied = leave.len(),
        bridged = bridge.bridged_dates.len(),
        sandwiched = sandwich.sandwiched_dates.len(),
        effective_leave_days = sandwich.effective_leave_days,
        deduction = %proration.deduction,
        "Salary calculated"
    );

    Ok(SalaryCalculation {
        month: leave.month(),
        base_salary,
        selected_leave_dates: leave.iter().collect(),
        bridged_dates: bridge.bridged_dates,
        sandwiched_dates: sandwich.sandwiched_dates,
        effective_leave_days: sandwich.effective_leave_days,
        days_in_month: proration.days_in_month,
        per_day_rate: proration.per_day_rate,
        deduction: proration.deduction,
        effective_salary: proration.effective_salary,
        audit_trace: trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{LeaveDate, SalaryMonth};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn leave(month: &str, dates: &[&str]) -> AppliedLeaveSet {
        let month: SalaryMonth = month.parse().unwrap();
        AppliedLeaveSet::parse(month, dates).unwrap()
    }

    fn no_holidays() -> PublicHolidaySet {
        PublicHolidaySet::new()
    }

    #[test]
    fn test_no_leave_keeps_full_salary() {
        let result = calculate_salary(dec("3100"), &leave("2025-01", &[]), &no_holidays()).unwrap();
        assert_eq!(result.effective_leave_days, 0);
        assert_eq!(result.deduction, Decimal::ZERO);
        assert_eq!(result.effective_salary, dec("3100"));
        assert_eq!(result.audit_trace.steps.len(), 3);
    }

    #[test]
    fn test_friday_monday_bridged_to_four_days() {
        let result = calculate_salary(
            dec("3100"),
            &leave("2025-01", &["2025-01-03", "2025-01-06"]),
            &no_holidays(),
        )
        .unwrap();

        let bridged: Vec<String> = result.bridged_dates.iter().map(ToString::to_string).collect();
        assert_eq!(bridged, vec!["2025-01-04", "2025-01-05"]);
        assert!(result.sandwiched_dates.is_empty());
        assert_eq!(result.effective_leave_days, 4);
        assert_eq!(result.deduction, dec("400"));
        // Selected dates are reported as the employee chose them
        assert_eq!(result.selected_leave_dates.len(), 2);
    }

    #[test]
    fn test_monday_wednesday_counts_two() {
        let result = calculate_salary(
            dec("3100"),
            &leave("2025-01", &["2025-01-06", "2025-01-08"]),
            &no_holidays(),
        )
        .unwrap();
        assert_eq!(result.effective_leave_days, 2);
        assert_eq!(result.deduction, dec("200"));
        assert_eq!(result.effective_salary, dec("2900"));
    }

    #[test]
    fn test_holiday_sandwiched_between_leave() {
        let holidays: PublicHolidaySet = ["2025-02-05".parse::<LeaveDate>().unwrap()]
            .into_iter()
            .collect();
        let result = calculate_salary(
            dec("2800"),
            &leave("2025-02", &["2025-02-04", "2025-02-06"]),
            &holidays,
        )
        .unwrap();
        assert_eq!(result.effective_leave_days, 3);
        assert_eq!(result.deduction, dec("300"));
    }

    #[test]
    fn test_steps_are_numbered_in_order() {
        let result = calculate_salary(
            dec("3100"),
            &leave("2025-01", &["2025-01-06"]),
            &no_holidays(),
        )
        .unwrap();
        let ids: Vec<_> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| (s.step_number, s.rule_id.as_str()))
            .collect();
        assert_eq!(
            ids,
            vec![
                (1, "weekend_bridge"),
                (2, "sandwich_leave"),
                (3, "salary_proration")
            ]
        );
    }

    #[test]
    fn test_weekend_leave_date_produces_warning() {
        let result = calculate_salary(
            dec("3100"),
            &leave("2025-01", &["2025-01-04"]),
            &no_holidays(),
        )
        .unwrap();
        assert_eq!(result.effective_leave_days, 1);
        assert_eq!(result.audit_trace.warnings.len(), 1);
        assert_eq!(result.audit_trace.warnings[0].code, "WEEKEND_LEAVE_DATE");
    }

    #[test]
    fn test_leave_every_day_deducts_full_salary() {
        let all_days: Vec<String> = (1..=28).map(|d| format!("2025-02-{:02}", d)).collect();
        let leave = AppliedLeaveSet::parse("2025-02".parse().unwrap(), &all_days).unwrap();

        let result = calculate_salary(dec("2800"), &leave, &no_holidays()).unwrap();
        assert_eq!(result.effective_leave_days, 28);
        assert_eq!(result.effective_salary, Decimal::ZERO);
        assert!(
            result
                .audit_trace
                .warnings
                .iter()
                .all(|w| w.code != "DEDUCTION_EXCEEDS_SALARY")
        );
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let result = calculate_salary(dec("-10"), &leave("2025-01", &[]), &no_holidays());
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }
}
