//! HTTP request handlers for the payroll coverage API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::history::paystub_history;
use crate::reconciliation::check_coverage;

use super::request::CoverageCheckRequest;
use super::response::{ApiError, ApiErrorResponse, CoverageResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/coverage", post(coverage_handler))
        .route("/employees/:employee_id/paystubs", get(paystubs_handler))
        .with_state(state)
}

/// Handler for POST /coverage.
///
/// Reconciles the selected period against the snapshot and returns the
/// per-employee pay status.
async fn coverage_handler(
    State(state): State<AppState>,
    payload: Result<Json<CoverageCheckRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing coverage request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if request.period().is_none() {
        info!(correlation_id = %correlation_id, "No complete pay period selected");
    }

    let snapshot = state.snapshot();
    let start_time = Instant::now();
    match check_coverage(
        request.start_date,
        request.end_date,
        snapshot.employees(),
        snapshot.paystubs(),
    ) {
        Ok(report) => {
            let response = CoverageResponse::from(report);
            info!(
                correlation_id = %correlation_id,
                employees = response.report.employees.len(),
                required_months = response.report.required_months.len(),
                excluded_records = response.report.excluded_records,
                duration_us = start_time.elapsed().as_micros(),
                "Coverage check completed"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Coverage check rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for GET /employees/:employee_id/paystubs.
///
/// Returns the employee's paystub history, newest first.
async fn paystubs_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let snapshot = state.snapshot();

    if let Err(err) = snapshot.find_employee(&employee_id) {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %employee_id,
            "Employee not found"
        );
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let history = paystub_history(&employee_id, &snapshot.paystubs_for(&employee_id));
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        paystubs = history.paystubs.len(),
        "Paystub history served"
    );
    json_response(StatusCode::OK, history)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
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
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
