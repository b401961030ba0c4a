//! Salary settlement.
//!
//! Settling a salary means calculating it once per employee and month and
//! persisting the resulting [`SalaryRecord`]. Later requests for the same key
//! return the stored record instead of recalculating.

mod service;

use serde::{Deserialize, Serialize};

use crate::models::{SalaryCalculation, SalaryRecord};

pub use service::SettlementService;

/// How a settlement request was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementStatus {
    /// The salary was calculated and persisted by this request.
    Created,
    /// A record already existed; it is returned unchanged.
    AlreadySettled,
    /// The salary was calculated but not persisted.
    Preview,
}

/// The outcome of a settle or preview request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// How the request was resolved.
    pub status: SettlementStatus,
    /// The stored or calculated record.
    pub record: SalaryRecord,
    /// The full calculation, absent when an existing record was returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculation: Option<SalaryCalculation>,
}

impl Settlement {
    /// True when this request persisted the record.
    pub fn is_created(&self) -> bool {
        self.status == SettlementStatus::Created
    }
}
