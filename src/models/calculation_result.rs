//! Calculation result models for the salary engine.
//!
//! This module contains the [`SalaryCalculation`] type and the audit trace
//! structures that record each step of the sandwich-leave pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Employee, LeaveDate, SalaryMonth, SalaryRecord};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate inputs that were accepted but that the caller would
/// normally have prevented, such as a leave date on a weekend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use salary_engine::models::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// assert!(trace.warnings.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of a salary calculation for one month.
///
/// Produced by [`crate::calculation::calculate_salary`]. The persisted
/// subset of this result is a [`SalaryRecord`], built with
/// [`SalaryCalculation::to_record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCalculation {
    /// The month the salary is calculated for.
    pub month: SalaryMonth,
    /// The base monthly salary.
    pub base_salary: Decimal,
    /// The dates the employee selected, ascending.
    pub selected_leave_dates: Vec<LeaveDate>,
    /// Weekend dates added between a Friday and the following Monday.
    pub bridged_dates: Vec<LeaveDate>,
    /// Weekend or holiday dates counted because they sat in a short gap
    /// between two leave dates.
    pub sandwiched_dates: Vec<LeaveDate>,
    /// Total deducted leave days.
    pub effective_leave_days: u32,
    /// Number of calendar days in the month.
    pub days_in_month: u32,
    /// Base salary divided by the days in the month.
    pub per_day_rate: Decimal,
    /// Amount deducted for leave.
    pub deduction: Decimal,
    /// Base salary minus deduction; not clamped at zero.
    pub effective_salary: Decimal,
    /// How the result was reached.
    pub audit_trace: AuditTrace,
}

impl SalaryCalculation {
    /// Builds the persisted record for this calculation.
    pub fn to_record(&self, employee: &Employee) -> SalaryRecord {
        SalaryRecord {
            name: employee.name.clone(),
            role: employee.role.clone(),
            month: self.month,
            selected_leave_dates: self.selected_leave_dates.clone(),
            effective_leave_days: self.effective_leave_days,
            deduction: self.deduction,
            effective_salary: self.effective_salary,
        }
    }
}
