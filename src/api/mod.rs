//! HTTP API module for the salary engine.
//!
//! This module provides the REST API endpoints for calculating, settling and
//! retrieving monthly salaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, MonthQuery, SettlementRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
