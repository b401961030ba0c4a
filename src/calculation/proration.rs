//! Salary proration.
//!
//! Converts a count of effective leave days into a deduction from the base
//! monthly salary, using the number of calendar days in the month as the
//! divisor.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, SalaryMonth};

/// Decimal places kept on a deduction.
///
/// At this scale `base_salary - deduction` fits the decimal mantissa for any
/// realistic salary, so `effective_salary + deduction == base_salary` holds
/// exactly.
pub const DEDUCTION_SCALE: u32 = 20;

/// The result of prorating a salary for leave.
#[derive(Debug, Clone)]
pub struct ProrationResult {
    /// Number of calendar days in the month.
    pub days_in_month: u32,
    /// Base salary divided by the days in the month.
    pub per_day_rate: Decimal,
    /// Amount deducted for the leave days.
    pub deduction: Decimal,
    /// Base salary minus deduction.
    pub effective_salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the leave deduction and effective salary for a month.
///
/// `deduction = base_salary * effective_leave_days / days_in_month`, which
/// equals the per-day rate times the leave days. Multiplying first keeps the
/// result exact whenever the true quotient is representable; otherwise it is
/// rounded to [`DEDUCTION_SCALE`] decimal places.
///
/// The effective salary is not clamped: more leave days than calendar days
/// produce a negative salary, and deciding what to do with that is left to
/// the caller.
///
/// # Errors
///
/// - [`EngineError::InvalidInput`] if `base_salary` is negative.
/// - [`EngineError::CalculationError`] if the arithmetic overflows.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::compute_deduction;
/// use rust_decimal::Decimal;
///
/// let month = "2025-01".parse().unwrap();
/// let result = compute_deduction(Decimal::new(3100, 0), 2, month, 1).unwrap();
///
/// assert_eq!(result.days_in_month, 31);
/// assert_eq!(result.deduction, Decimal::new(200, 0));
/// assert_eq!(result.effective_salary, Decimal::new(2900, 0));
/// ```
pub fn compute_deduction(
    base_salary: Decimal,
    effective_leave_days: u32,
    month: SalaryMonth,
    step_number: u32,
) -> EngineResult<ProrationResult> {
    if base_salary < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "base_salary",
            format!("must not be negative, got {}", base_salary),
        ));
    }

    let overflow = || EngineError::CalculationError {
        message: format!(
            "salary {} over {} leave day(s) is out of range",
            base_salary, effective_leave_days
        ),
    };

    let days_in_month = month.days_in_month();
    let divisor = Decimal::from(days_in_month);

    let per_day_rate = base_salary.checked_div(divisor).ok_or_else(overflow)?;
    let deduction = base_salary
        .checked_mul(Decimal::from(effective_leave_days))
        .and_then(|total| total.checked_div(divisor))
        .map(|deduction| deduction.round_dp(DEDUCTION_SCALE))
        .ok_or_else(overflow)?;
    let effective_salary = base_salary.checked_sub(deduction).ok_or_else(overflow)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_proration".to_string(),
        rule_name: "Salary Proration".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "effective_leave_days": effective_leave_days,
            "month": month.to_string(),
        }),
        output: serde_json::json!({
            "days_in_month": days_in_month,
            "per_day_rate": per_day_rate.to_string(),
            "deduction": deduction.to_string(),
            "effective_salary": effective_salary.to_string(),
        }),
        reasoning: format!(
            "{} / {} days x {} leave day(s) = {} deducted, leaving {}",
            base_salary,
            days_in_month,
            effective_leave_days,
            deduction.round_dp(2),
            effective_salary.round_dp(2)
        ),
    };

    Ok(ProrationResult {
        days_in_month,
        per_day_rate,
        deduction,
        effective_salary,
        audit_step,
    })
}
