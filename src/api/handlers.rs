//! HTTP request handlers for the salary engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_salary;
use crate::error::EngineError;
use crate::models::SalaryMonth;
use crate::report::SalarySlip;
use crate::settlement::SettlementStatus;

use super::request::{CalculationRequest, MonthQuery, SettlementRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/employees", get(list_employees_handler))
        .route("/employees/:id/salaries", post(settle_handler))
        .route("/employees/:id/salaries/preview", post(preview_handler))
        .route("/employees/:id/salaries/:month", get(get_salary_handler))
        .route("/employees/:id/salaries/:month/slip", get(salary_slip_handler))
        .route("/salaries", get(monthly_salaries_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, error: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    ApiErrorResponse::from(error).into_response()
}

/// Maps a JSON body rejection to a 400 response.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response()
}

/// Handler for POST /calculate.
///
/// Calculates a salary without touching storage. The configured public
/// holidays are used unless the request supplies its own.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = request.leave_set().and_then(|leave| {
        let holidays = request
            .public_holidays()?
            .unwrap_or_else(|| state.service().public_holidays().clone());
        calculate_salary(request.base_salary, &leave, &holidays)
    });

    match result {
        Ok(calculation) => {
            info!(
                correlation_id = %correlation_id,
                month = %calculation.month,
                effective_leave_days = calculation.effective_leave_days,
                deduction = %calculation.deduction,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, calculation)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().employees().await {
        Ok(employees) => json_response(StatusCode::OK, employees),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /employees/:id/salaries.
///
/// Responds 201 when this request settled the month and 200 when the
/// month was already settled.
async fn settle_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing settlement request"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };
    let leave = match request.leave_set() {
        Ok(leave) => leave,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    match state.service().settle(&employee_id, &leave).await {
        Ok(settlement) => {
            let status = match settlement.status {
                SettlementStatus::Created => StatusCode::CREATED,
                _ => StatusCode::OK,
            };
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                month = %settlement.record.month,
                status = ?settlement.status,
                "Settlement completed"
            );
            json_response(status, settlement)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /employees/:id/salaries/preview.
async fn preview_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };
    let leave = match request.leave_set() {
        Ok(leave) => leave,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    match state.service().preview(&employee_id, &leave).await {
        Ok(settlement) => json_response(StatusCode::OK, settlement),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /employees/:id/salaries/:month.
async fn get_salary_handler(
    State(state): State<AppState>,
    Path((employee_id, month)): Path<(String, String)>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let month = match SalaryMonth::parse(&month) {
        Ok(month) => month,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    match state.service().find(&employee_id, month).await {
        Ok(Some(record)) => json_response(StatusCode::OK, record),
        Ok(None) => salary_not_found(&employee_id, month),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /employees/:id/salaries/:month/slip.
///
/// Returns the settled record as a plain-text attachment.
async fn salary_slip_handler(
    State(state): State<AppState>,
    Path((employee_id, month)): Path<(String, String)>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let month = match SalaryMonth::parse(&month) {
        Ok(month) => month,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let record = match state.service().find(&employee_id, month).await {
        Ok(Some(record)) => record,
        Ok(None) => return salary_not_found(&employee_id, month),
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let slip = SalarySlip::new(&record, state.report());
    let disposition = format!("attachment; filename=\"{}\"", slip.file_name());
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        month = %month,
        "Salary slip rendered"
    );
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        slip.render(),
    )
        .into_response()
}

/// Handler for GET /salaries?month=YYYY-MM.
async fn monthly_salaries_handler(
    State(state): State<AppState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let month = match query {
        Ok(Query(query)) => SalaryMonth::parse(&query.month),
        Err(rejection) => {
            return ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(rejection.body_text()),
            )
            .into_response();
        }
    };

    match month {
        Ok(month) => match state.service().monthly_records(month).await {
            Ok(records) => json_response(StatusCode::OK, records),
            Err(err) => engine_error_response(correlation_id, err),
        },
        Err(err) => engine_error_response(correlation_id, err),
    }
}

async fn not_found_handler() -> Response {
    ApiErrorResponse::new(StatusCode::NOT_FOUND, ApiError::not_found("No such route")).into_response()
}

fn salary_not_found(employee_id: &str, month: SalaryMonth) -> Response {
    ApiErrorResponse::new(
        StatusCode::NOT_FOUND,
        ApiError::not_found(format!(
            "No salary settled for employee '{}' in {}",
            employee_id, month
        )),
    )
    .into_response()
}
