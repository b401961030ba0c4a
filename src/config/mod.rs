//! Configuration loading and management for the salary engine.
//!
//! This module loads engine settings, the public holiday calendar and
//! optional employee seed data from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded {} public holidays", config.holidays().holidays.len());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_DIR_ENV, ConfigLoader, DEFAULT_CONFIG_DIR};
pub use types::{
    DEFAULT_BIND_ADDRESS, EmployeeSeed, EngineConfig, EngineSettings, ReportSettings,
    ServerSettings,
};
