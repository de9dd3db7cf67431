//! Response types for the reconciliation engine API.
//!
//! This module defines the error response structures, the batch response
//! envelope, and the mapping from engine errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::ReconciliationResult;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// The response body of the `/reconcile/batch` endpoint.
///
/// Items are processed independently: one failing item carries its error
/// inline and does not affect the others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReconcileResponse {
    /// One outcome per request item, in request order.
    pub results: Vec<BatchItemResult>,
}

/// The outcome of one item in a batch reconciliation.
///
/// Exactly one of `result` and `error` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItemResult {
    /// The index of the item in the request.
    pub index: usize,
    /// The reconciliation result, when the item succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ReconciliationResult>,
    /// The error, when the item failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPeriod { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PERIOD",
                    format!("Invalid pay period: {}", message),
                    "The pay period dates are inconsistent",
                ),
            },
            EngineError::InvalidWage {
                employee_id,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_WAGE",
                    format!("Invalid wage for employee '{}': {}", employee_id, message),
                    "The contract wage is not usable for a per-day rate",
                ),
            },
            EngineError::InvalidPunch { date, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PUNCH",
                    format!("Invalid punch on {}: {}", date, message),
                    "The punch data contains invalid information",
                ),
            },
            EngineError::InvalidAttendance { date, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ATTENDANCE",
                    format!("Invalid attendance on {}: {}", date, message),
                    "The attendance record contains invalid information",
                ),
            },
            EngineError::ConservationViolation { expected, actual } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONSERVATION_VIOLATION",
                    "Day counts failed the conservation check",
                    format!("expected {} accounted days, got {}", expected, actual),
                ),
            },
        }
    }
}
