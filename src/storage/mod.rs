//! Storage ports for employees and settled salaries.
//!
//! The settlement service talks to storage only through the traits in this
//! module. [`memory`] provides in-process adapters used by the server binary
//! and the tests; a database adapter implements the same traits.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Employee, SalaryMonth, SalaryRecord};

pub use memory::{InMemoryEmployeeDirectory, InMemorySettlementStore};

/// Errors raised by storage adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Store connection could not be established.
    #[error("settlement store connection failed: {message}")]
    Connection {
        /// Adapter-specific detail.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("settlement store query failed: {message}")]
    Query {
        /// Adapter-specific detail.
        message: String,
    },
}

impl StorageError {
    /// Builds a [`StorageError::Connection`].
    pub fn connection(message: impl Into<String>) -> Self {
        StorageError::Connection {
            message: message.into(),
        }
    }

    /// Builds a [`StorageError::Query`].
    pub fn query(message: impl Into<String>) -> Self {
        StorageError::Query {
            message: message.into(),
        }
    }
}

/// Outcome of a conditional insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The record was written.
    Inserted,
    /// A record already existed for the key; it is returned unchanged and
    /// the new record was discarded.
    AlreadyExists(SalaryRecord),
}

/// Port for settled salary records, keyed by employee and month.
///
/// At most one record may exist per `(employee_id, month)`. Adapters must
/// make [`SettlementStore::insert_if_absent`] atomic so that concurrent
/// settlements of the same key write exactly once.
#[async_trait]
pub trait SettlementStore: Send + Sync {
    /// Looks up the record for an employee and month.
    async fn find(
        &self,
        employee_id: &str,
        month: SalaryMonth,
    ) -> Result<Option<SalaryRecord>, StorageError>;

    /// Writes the record unless one already exists for its key.
    async fn insert_if_absent(
        &self,
        employee_id: &str,
        record: &SalaryRecord,
    ) -> Result<InsertOutcome, StorageError>;

    /// Returns every record settled for the month, in no particular order.
    async fn list_by_month(&self, month: SalaryMonth) -> Result<Vec<SalaryRecord>, StorageError>;
}

/// Port for the read-only employee directory.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Returns every employee, ordered by identifier.
    async fn list(&self) -> Result<Vec<Employee>, StorageError>;

    /// Looks up a single employee.
    async fn get(&self, id: &str) -> Result<Option<Employee>, StorageError>;
}
