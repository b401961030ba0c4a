//! In-memory storage adapters.
//!
//! Both adapters guard their maps with a `tokio::sync::RwLock`. The
//! settlement store performs its existence check and insert under a single
//! write lock, which makes `insert_if_absent` atomic.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{EmployeeDirectory, InsertOutcome, SettlementStore, StorageError};
use crate::models::{Employee, SalaryMonth, SalaryRecord};

/// Settlement store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemorySettlementStore {
    records: RwLock<HashMap<(String, SalaryMonth), SalaryRecord>>,
}

impl InMemorySettlementStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True when nothing has been settled.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl SettlementStore for InMemorySettlementStore {
    async fn find(
        &self,
        employee_id: &str,
        month: SalaryMonth,
    ) -> Result<Option<SalaryRecord>, StorageError> {
        let records = self.records.read().await;
        Ok(records.get(&(employee_id.to_string(), month)).cloned())
    }

    async fn insert_if_absent(
        &self,
        employee_id: &str,
        record: &SalaryRecord,
    ) -> Result<InsertOutcome, StorageError> {
        let mut records = self.records.write().await;
        let key = (employee_id.to_string(), record.month);
        if let Some(existing) = records.get(&key) {
            return Ok(InsertOutcome::AlreadyExists(existing.clone()));
        }
        records.insert(key, record.clone());
        Ok(InsertOutcome::Inserted)
    }

    async fn list_by_month(&self, month: SalaryMonth) -> Result<Vec<SalaryRecord>, StorageError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|((_, m), _)| *m == month)
            .map(|(_, record)| record.clone())
            .collect())
    }
}

/// Employee directory backed by a `BTreeMap` keyed by employee id.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeDirectory {
    employees: RwLock<BTreeMap<String, Employee>>,
}

impl InMemoryEmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory seeded with the given employees. Later entries
    /// replace earlier ones with the same id.
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let employees = employees
            .into_iter()
            .map(|employee| (employee.id.clone(), employee))
            .collect();
        Self {
            employees: RwLock::new(employees),
        }
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryEmployeeDirectory {
    async fn list(&self) -> Result<Vec<Employee>, StorageError> {
        Ok(self.employees.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Employee>, StorageError> {
        Ok(self.employees.read().await.get(id).cloned())
    }
}
