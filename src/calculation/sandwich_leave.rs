//! Sandwich-leave day counting.
//!
//! Under the sandwich policy, weekend days and public holidays that sit in a
//! short gap between two leave dates are deducted as leave too. Only gaps of
//! one or two calendar days are examined; longer gaps are treated as a return
//! to work.

use std::collections::BTreeSet;

use crate::models::{AuditStep, LeaveDate, PublicHolidaySet};

use super::day_detection::is_non_working_day;

/// Smallest gap (days strictly between two leave dates) that is examined.
pub const MIN_SANDWICH_GAP: i64 = 1;

/// Largest gap (days strictly between two leave dates) that is examined.
pub const MAX_SANDWICH_GAP: i64 = 2;

/// The result of counting effective leave days.
#[derive(Debug, Clone)]
pub struct SandwichLeaveResult {
    /// Number of dates in the counted set.
    pub applied_days: u32,
    /// Non-working days picked up from gaps, ascending.
    pub sandwiched_dates: Vec<LeaveDate>,
    /// `applied_days` plus the sandwiched days.
    pub effective_leave_days: u32,
    /// The audit step recording this count.
    pub audit_step: AuditStep,
}

/// Counts effective leave days under the sandwich policy.
///
/// Starts from the number of dates in `applied`, then walks adjacent pairs in
/// ascending order. When one or two calendar days lie strictly between a
/// pair, each of those days that is a Saturday, a Sunday or a member of
/// `public_holidays` adds one day.
///
/// The set type guarantees sorted, distinct input; gaps are computed with
/// calendar arithmetic so month and year boundaries need no special casing.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::count_effective_leave_days;
/// use salary_engine::models::{LeaveDate, PublicHolidaySet};
/// use std::collections::BTreeSet;
///
/// // Thursday and Monday with the Friday a public holiday: the gap is three
/// // days, so nothing is added.
/// let applied: BTreeSet<LeaveDate> = ["2025-01-02", "2025-01-06"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let holidays: PublicHolidaySet = ["2025-01-03".parse().unwrap()].into_iter().collect();
///
/// let result = count_effective_leave_days(&applied, &holidays, 1);
/// assert_eq!(result.effective_leave_days, 2);
/// ```
pub fn count_effective_leave_days(
    applied: &BTreeSet<LeaveDate>,
    public_holidays: &PublicHolidaySet,
    step_number: u32,
) -> SandwichLeaveResult {
    let sorted: Vec<LeaveDate> = applied.iter().copied().collect();
    let applied_days = sorted.len() as u32;
    let mut sandwiched_dates = Vec::new();

    for pair in sorted.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let gap = current.days_between(next) - 1;

        if (MIN_SANDWICH_GAP..=MAX_SANDWICH_GAP).contains(&gap) {
            sandwiched_dates.extend(
                current
                    .days_strictly_between(next)
                    .filter(|day| is_non_working_day(*day, public_holidays)),
            );
        }
    }

    let effective_leave_days = applied_days + sandwiched_dates.len() as u32;

    let reasoning = if sandwiched_dates.is_empty() {
        format!(
            "{} leave day(s); no weekend or holiday sits in a 1-2 day gap",
            applied_days
        )
    } else {
        format!(
            "{} leave day(s) plus {} sandwiched non-working day(s) = {}",
            applied_days,
            sandwiched_dates.len(),
            effective_leave_days
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "sandwich_leave".to_string(),
        rule_name: "Sandwich Leave Count".to_string(),
        input: serde_json::json!({
            "leave_dates": sorted.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "public_holidays_considered": public_holidays.len(),
        }),
        output: serde_json::json!({
            "applied_days": applied_days,
            "sandwiched_dates": sandwiched_dates.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "effective_leave_days": effective_leave_days,
        }),
        reasoning,
    };

    SandwichLeaveResult {
        applied_days,
        sandwiched_dates,
        effective_leave_days,
        audit_step,
    }
}
