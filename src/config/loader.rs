//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, HolidayCalendar, PublicHolidaySet};

use super::types::{EmployeeSeed, EngineConfig, EngineSettings, ReportSettings, ServerSettings};

/// Environment variable naming the configuration directory.
pub const CONFIG_DIR_ENV: &str = "SALARY_ENGINE_CONFIG";

/// Configuration directory used when [`CONFIG_DIR_ENV`] is unset.
pub const DEFAULT_CONFIG_DIR: &str = "./config/default";

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml     # Server and salary slip settings
/// ├── holidays.yaml   # Public holiday calendar
/// └── employees.yaml  # Optional seed data for the employee directory
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Listening on {}", loader.server().bind_address);
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `engine.yaml` or `holidays.yaml` is missing, or if
    /// any present file contains invalid YAML. A missing `employees.yaml`
    /// yields an empty directory.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("engine.yaml"))?;
        let holidays = Self::load_yaml::<HolidayCalendar>(&path.join("holidays.yaml"))?;

        let employees_path = path.join("employees.yaml");
        let employees = if employees_path.exists() {
            Self::load_yaml::<EmployeeSeed>(&employees_path)?.employees
        } else {
            Vec::new()
        };

        debug!(
            path = %path.display(),
            holidays = holidays.holidays.len(),
            employees = employees.len(),
            "Configuration loaded"
        );

        Ok(Self {
            config: EngineConfig::new(settings, holidays, employees),
        })
    }

    /// Loads from the directory named by `SALARY_ENGINE_CONFIG`, or the
    /// default directory when it is unset.
    pub fn from_env() -> EngineResult<Self> {
        let dir = std::env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
        Self::load(dir)
    }

    /// Builds a loader from in-memory parts, for embedding and tests.
    pub fn from_parts(
        settings: EngineSettings,
        holidays: HolidayCalendar,
        employees: Vec<Employee>,
    ) -> Self {
        Self {
            config: EngineConfig::new(settings, holidays, employees),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerSettings {
        &self.config.settings().server
    }

    /// Returns the salary slip settings.
    pub fn report(&self) -> &ReportSettings {
        &self.config.settings().report
    }

    /// Returns the public holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        self.config.holidays()
    }

    /// Returns the public holiday dates as a membership set.
    pub fn public_holidays(&self) -> PublicHolidaySet {
        self.config.holidays().dates()
    }

    /// Returns the seed employees.
    pub fn employees(&self) -> &[Employee] {
        self.config.employees()
    }
}
