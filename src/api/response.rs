//! Response types for the salary engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::SalaryRecord;
use crate::storage::StorageError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// A calculated record that could not be saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<SalaryRecord>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            record: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an employee not found error response.
    pub fn employee_not_found(id: &str) -> Self {
        Self::with_details(
            "EMPLOYEE_NOT_FOUND",
            format!("Employee not found: {}", id),
            format!("No employee with id '{}' exists in the directory", id),
        )
    }

    /// Creates a not found error response.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            ),
            EngineError::ConfigParseError { path, message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            ),
            EngineError::InvalidInput { field, message } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input '{}': {}", field, message),
                    format!("The field '{}' contains an invalid value", field),
                ),
            ),
            EngineError::EmployeeNotFound { id } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::employee_not_found(&id),
            ),
            EngineError::Storage(source) => {
                let status = match source {
                    StorageError::Connection { .. } => StatusCode::SERVICE_UNAVAILABLE,
                    StorageError::Query { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                };
                ApiErrorResponse::new(
                    status,
                    ApiError::with_details("STORAGE_ERROR", "Storage failure", source.to_string()),
                )
            }
            EngineError::SettlementNotPersisted {
                employee_id,
                month,
                record,
                source,
            } => ApiErrorResponse::new(
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError {
                    record: Some(*record),
                    ..ApiError::with_details(
                        "SETTLEMENT_NOT_PERSISTED",
                        format!(
                            "Salary for employee '{}' in {} was calculated but not saved",
                            employee_id, month
                        ),
                        source.to_string(),
                    )
                },
            ),
            EngineError::CalculationError { message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            ),
        }
    }
}
