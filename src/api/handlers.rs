//! HTTP request handlers for the reconciliation engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    AttendancePunch, AttendanceRecord, FestivalHoliday, PayPeriod, ReconciliationResult,
};
use crate::reconcile::reconcile_punches;

use super::request::{BatchReconcileRequest, ReconcileRequest};
use super::response::{ApiError, ApiErrorResponse, BatchItemResult, BatchReconcileResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reconcile", post(reconcile_handler))
        .route("/reconcile/batch", post(batch_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for the GET /health endpoint.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Handler for the POST /reconcile endpoint.
///
/// Accepts a reconciliation request and returns the classified days and
/// pay lines for the period.
async fn reconcile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReconcileRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reconciliation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return json_rejection_response(correlation_id, rejection);
        }
    };

    match perform_reconciliation(&state, request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.employee_id,
                paid_days = %result.reconciliation.totals.paid_days,
                gross = %result.reconciliation.totals.gross_amount,
                duration_us = result.duration_us,
                "Reconciliation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Reconciliation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for the POST /reconcile/batch endpoint.
///
/// Items are processed independently; failures are reported inline per
/// item and the batch itself always returns 200.
async fn batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchReconcileRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return json_rejection_response(correlation_id, rejection);
        }
    };

    info!(
        correlation_id = %correlation_id,
        items = request.items.len(),
        "Processing batch reconciliation request"
    );

    let results: Vec<BatchItemResult> = request
        .items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match perform_reconciliation(&state, item) {
            Ok(result) => BatchItemResult {
                index,
                result: Some(result),
                error: None,
            },
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    index,
                    error = %err,
                    "Batch item failed"
                );
                let api_error: ApiErrorResponse = err.into();
                BatchItemResult {
                    index,
                    result: None,
                    error: Some(api_error.error),
                }
            }
        })
        .collect();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(BatchReconcileResponse { results }),
    )
        .into_response()
}

/// Runs the reconciliation pipeline for one request.
fn perform_reconciliation(
    state: &AppState,
    request: ReconcileRequest,
) -> Result<ReconciliationResult, EngineError> {
    let start_time = Instant::now();

    let period: PayPeriod = request.period.into();
    let policy = request.policy;
    let punches: Vec<AttendancePunch> = request.punches.into_iter().map(Into::into).collect();
    let attendance: Vec<AttendanceRecord> =
        request.attendance.into_iter().map(Into::into).collect();
    let festivals: Vec<FestivalHoliday> =
        request.festivals.into_iter().map(Into::into).collect();

    let reconciliation = reconcile_punches(
        &period,
        policy,
        &punches,
        &attendance,
        &festivals,
        state.config().config(),
    )?;

    Ok(ReconciliationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: period.employee_id.clone(),
        period,
        policy,
        reconciliation,
        duration_us: start_time.elapsed().as_micros() as u64,
    })
}

/// Builds the 400 response for a rejected JSON body.
fn json_rejection_response(
    correlation_id: Uuid,
    rejection: JsonRejection,
) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
