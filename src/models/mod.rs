//! Core data models for the salary engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod employee;
mod holiday;
mod leave;
mod salary_month;
mod salary_record;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, SalaryCalculation};
pub use employee::Employee;
pub use holiday::{HolidayCalendar, PublicHoliday, PublicHolidaySet};
pub use leave::{AppliedLeaveSet, LeaveDate};
pub use salary_month::SalaryMonth;
pub use salary_record::SalaryRecord;
