//! Friday-to-Monday weekend bridging.
//!
//! When an employee takes both a Friday and the Monday right after it, the
//! Saturday and Sunday in between are added to the leave set itself before
//! the sandwich-leave count runs. The weekend then counts as an explicit
//! leave block rather than depending on holiday or gap rules.

use std::collections::BTreeSet;

use chrono::Weekday;

use crate::models::{AuditStep, LeaveDate};

/// Calendar distance from a Friday to the following Monday.
pub const FRIDAY_TO_MONDAY_DAYS: i64 = 3;

/// The result of bridging weekends between Friday and Monday leave.
#[derive(Debug, Clone)]
pub struct WeekendBridgeResult {
    /// The applied dates plus any injected weekend dates, ascending.
    pub dates: BTreeSet<LeaveDate>,
    /// The injected weekend dates, ascending.
    pub bridged_dates: Vec<LeaveDate>,
    /// The audit step recording this pass.
    pub audit_step: AuditStep,
}

/// Adds the Saturday and Sunday between every Friday/Monday leave pair.
///
/// Only adjacent pairs in the sorted set are examined, and only when the
/// earlier date is a Friday, the later one a Monday, and they are exactly
/// three calendar days apart.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::bridge_weekends;
/// use salary_engine::models::LeaveDate;
/// use std::collections::BTreeSet;
///
/// let applied: BTreeSet<LeaveDate> = ["2025-01-03", "2025-01-06"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// let result = bridge_weekends(&applied, 1);
/// assert_eq!(result.dates.len(), 4);
/// assert_eq!(result.bridged_dates[0].to_string(), "2025-01-04");
/// assert_eq!(result.bridged_dates[1].to_string(), "2025-01-05");
/// ```
pub fn bridge_weekends(applied: &BTreeSet<LeaveDate>, step_number: u32) -> WeekendBridgeResult {
    let sorted: Vec<LeaveDate> = applied.iter().copied().collect();
    let mut dates = applied.clone();
    let mut bridged_dates = Vec::new();

    for pair in sorted.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let is_friday_to_monday = current.weekday() == Weekday::Fri
            && next.weekday() == Weekday::Mon
            && current.days_between(next) == FRIDAY_TO_MONDAY_DAYS;

        if is_friday_to_monday {
            for day in current.days_strictly_between(next) {
                if dates.insert(day) {
                    bridged_dates.push(day);
                }
            }
        }
    }

    let reasoning = if bridged_dates.is_empty() {
        "No Friday leave is followed directly by Monday leave; nothing bridged".to_string()
    } else {
        format!(
            "Added {} weekend day(s) between Friday and Monday leave",
            bridged_dates.len()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekend_bridge".to_string(),
        rule_name: "Friday-Monday Weekend Bridge".to_string(),
        input: serde_json::json!({
            "applied_dates": sorted.iter().map(ToString::to_string).collect::<Vec<_>>(),
        }),
        output: serde_json::json!({
            "bridged_dates": bridged_dates.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "total_dates": dates.len(),
        }),
        reasoning,
    };

    WeekendBridgeResult {
        dates,
        bridged_dates,
        audit_step,
    }
}
