//! Configuration types for the salary engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{Employee, HolidayCalendar};

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Socket address to listen on, e.g. "127.0.0.1:3000".
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

/// Salary slip settings.
///
/// Every field is optional in YAML and falls back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Heading printed at the top of each slip.
    pub title: String,
    /// Label printed before monetary amounts.
    pub currency_label: String,
    /// Explanation of the sandwich-leave policy. Empty to omit.
    pub policy_note: String,
    /// Line printed at the bottom of each slip. Empty to omit.
    pub footer: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: "Salary Report".to_string(),
            currency_label: "RS".to_string(),
            policy_note: "If an employee takes leave on a Friday and the following Monday, \
                the Saturday and Sunday in between are counted as leave as well. \
                Weekends and public holidays that fall in a gap of one or two days \
                between leave dates are also deducted, so leave is taken as one \
                continuous block."
                .to_string(),
            footer: "Generated by the salary engine".to_string(),
        }
    }
}

/// Contents of `engine.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Salary slip settings.
    pub report: ReportSettings,
}

/// Contents of the optional `employees.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeSeed {
    /// Employees loaded into the directory at startup.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    settings: EngineSettings,
    holidays: HolidayCalendar,
    employees: Vec<Employee>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(settings: EngineSettings, holidays: HolidayCalendar, employees: Vec<Employee>) -> Self {
        Self {
            settings,
            holidays,
            employees,
        }
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the public holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Returns the seed employees.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}
