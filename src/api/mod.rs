//! HTTP API module for the attendance reconciliation engine.
//!
//! This module provides the REST API endpoints for reconciling attendance
//! punches against pay periods.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchReconcileRequest, ReconcileRequest};
pub use response::{ApiError, BatchItemResult, BatchReconcileResponse};
pub use state::AppState;
