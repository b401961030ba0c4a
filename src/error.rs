//! Error types for the salary engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating and settling
//! salaries.

use thiserror::Error;

use crate::models::{SalaryMonth, SalaryRecord};
use crate::storage::StorageError;

/// The main error type for the salary engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "base_salary".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input 'base_salary': must not be negative");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A caller-supplied value violated a precondition.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// No employee exists with the given identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// A storage port failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The salary was calculated but the record could not be written.
    ///
    /// The computed record is carried so the caller can retry the write or
    /// show the result instead of discarding it.
    #[error("Salary for employee '{employee_id}' in {month} was calculated but not saved: {source}")]
    SettlementNotPersisted {
        /// The employee whose salary was calculated.
        employee_id: String,
        /// The settlement month.
        month: SalaryMonth,
        /// The record that failed to persist.
        record: Box<SalaryRecord>,
        /// The underlying storage failure.
        #[source]
        source: StorageError,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
