//! Application state for the salary engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, ReportSettings};
use crate::settlement::SettlementService;
use crate::storage::{InMemoryEmployeeDirectory, InMemorySettlementStore};

/// Shared application state.
///
/// Contains the settlement service and the salary slip settings.
#[derive(Clone)]
pub struct AppState {
    service: SettlementService,
    report: Arc<ReportSettings>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(service: SettlementService, report: ReportSettings) -> Self {
        Self {
            service,
            report: Arc::new(report),
        }
    }

    /// Builds state over in-memory stores, seeding the employee directory
    /// and the holiday set from the configuration.
    pub fn in_memory(config: &ConfigLoader) -> Self {
        let employees = InMemoryEmployeeDirectory::with_employees(config.employees().to_vec());
        let service = SettlementService::new(
            Arc::new(employees),
            Arc::new(InMemorySettlementStore::new()),
            config.public_holidays(),
        );
        Self::new(service, config.report().clone())
    }

    /// Returns the settlement service.
    pub fn service(&self) -> &SettlementService {
        &self.service
    }

    /// Returns the salary slip settings.
    pub fn report(&self) -> &ReportSettings {
        &self.report
    }
}
