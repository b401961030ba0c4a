use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{Settlement, SettlementStatus};
use crate::calculation::calculate_salary;
use crate::error::{EngineError, EngineResult};
use crate::models::{AppliedLeaveSet, Employee, PublicHolidaySet, SalaryMonth, SalaryRecord};
use crate::storage::{EmployeeDirectory, InsertOutcome, SettlementStore};

/// Calculates and settles salaries against injected storage ports.
///
/// Cloning is cheap; all state sits behind `Arc`s.
#[derive(Clone)]
pub struct SettlementService {
    employees: Arc<dyn EmployeeDirectory>,
    settlements: Arc<dyn SettlementStore>,
    public_holidays: Arc<PublicHolidaySet>,
}

impl SettlementService {
    /// Creates a service over the given ports and holiday set.
    pub fn new(
        employees: Arc<dyn EmployeeDirectory>,
        settlements: Arc<dyn SettlementStore>,
        public_holidays: PublicHolidaySet,
    ) -> Self {
        Self {
            employees,
            settlements,
            public_holidays: Arc::new(public_holidays),
        }
    }

    /// The public holidays used for every calculation.
    pub fn public_holidays(&self) -> &PublicHolidaySet {
        &self.public_holidays
    }

    /// Lists all employees.
    pub async fn employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.employees.list().await?)
    }

    /// Settles the salary of an employee for the month of `leave`.
    ///
    /// Returns the existing record with [`SettlementStatus::AlreadySettled`]
    /// if the key was settled before, including when a concurrent request
    /// wins the write. Otherwise calculates, persists and returns the record
    /// with [`SettlementStatus::Created`].
    ///
    /// # Errors
    ///
    /// - [`EngineError::EmployeeNotFound`] for an unknown employee.
    /// - [`EngineError::Storage`] if the lookup fails.
    /// - [`EngineError::SettlementNotPersisted`] if the calculation succeeded
    ///   but the write failed; the error carries the computed record.
    /// - Any calculation error from [`calculate_salary`].
    pub async fn settle(
        &self,
        employee_id: &str,
        leave: &AppliedLeaveSet,
    ) -> EngineResult<Settlement> {
        let employee = self.employee(employee_id).await?;
        let month = leave.month();

        if let Some(existing) = self.settlements.find(employee_id, month).await? {
            debug!(employee_id, month = %month, "Salary already settled");
            return Ok(already_settled(existing));
        }

        let calculation = calculate_salary(employee.salary, leave, &self.public_holidays)?;
        let record = calculation.to_record(&employee);

        match self.settlements.insert_if_absent(employee_id, &record).await {
            Ok(InsertOutcome::Inserted) => {
                info!(
                    employee_id,
                    month = %month,
                    effective_leave_days = record.effective_leave_days,
                    deduction = %record.deduction,
                    "Salary settled"
                );
                Ok(Settlement {
                    status: SettlementStatus::Created,
                    record,
                    calculation: Some(calculation),
                })
            }
            Ok(InsertOutcome::AlreadyExists(existing)) => {
                debug!(employee_id, month = %month, "Lost settlement race, returning stored record");
                Ok(already_settled(existing))
            }
            Err(source) => {
                warn!(employee_id, month = %month, error = %source, "Failed to persist salary record");
                Err(EngineError::SettlementNotPersisted {
                    employee_id: employee_id.to_string(),
                    month,
                    record: Box::new(record),
                    source,
                })
            }
        }
    }

    /// Calculates a salary without persisting it.
    ///
    /// An already settled key still returns the stored record, so a preview
    /// never disagrees with what was paid.
    pub async fn preview(
        &self,
        employee_id: &str,
        leave: &AppliedLeaveSet,
    ) -> EngineResult<Settlement> {
        let employee = self.employee(employee_id).await?;

        if let Some(existing) = self.settlements.find(employee_id, leave.month()).await? {
            return Ok(already_settled(existing));
        }

        let calculation = calculate_salary(employee.salary, leave, &self.public_holidays)?;
        Ok(Settlement {
            status: SettlementStatus::Preview,
            record: calculation.to_record(&employee),
            calculation: Some(calculation),
        })
    }

    /// Returns the stored record for an employee and month, if any.
    pub async fn find(
        &self,
        employee_id: &str,
        month: SalaryMonth,
    ) -> EngineResult<Option<SalaryRecord>> {
        Ok(self.settlements.find(employee_id, month).await?)
    }

    /// Lists every record settled for the month, ordered by employee name.
    pub async fn monthly_records(&self, month: SalaryMonth) -> EngineResult<Vec<SalaryRecord>> {
        let mut records = self.settlements.list_by_month(month).await?;
        records.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(records)
    }

    async fn employee(&self, employee_id: &str) -> EngineResult<Employee> {
        self.employees
            .get(employee_id)
            .await?
            .ok_or_else(|| EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            })
    }
}

fn already_settled(record: SalaryRecord) -> Settlement {
    Settlement {
        status: SettlementStatus::AlreadySettled,
        record,
        calculation: None,
    }
}
