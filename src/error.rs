//! Error types for the reconciliation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during reconciliation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the reconciliation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use reconcile_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or contained invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The pay period itself was malformed.
    #[error("Invalid pay period: {message}")]
    InvalidPeriod {
        /// A description of what made the period invalid.
        message: String,
    },

    /// The contract wage was missing or non-positive.
    #[error("Invalid contract wage for employee '{employee_id}': {message}")]
    InvalidWage {
        /// The employee the wage belongs to.
        employee_id: String,
        /// A description of what made the wage invalid.
        message: String,
    },

    /// A raw attendance punch contained inconsistent data.
    #[error("Invalid attendance punch on {date}: {message}")]
    InvalidPunch {
        /// The date the punch belongs to.
        date: NaiveDate,
        /// A description of what made the punch invalid.
        message: String,
    },

    /// An aggregated attendance record was out of range.
    #[error("Invalid attendance record on {date}: {message}")]
    InvalidAttendance {
        /// The date of the record.
        date: NaiveDate,
        /// A description of what made the record invalid.
        message: String,
    },

    /// The day-count conservation invariant failed after pay-line emission.
    ///
    /// This is a hard computation error: the classified days no longer
    /// partition the pay period and the result must not be used.
    #[error("Day-count conservation violated: expected {expected} accounted days, got {actual}")]
    ConservationViolation {
        /// The day count the partition was expected to sum to.
        expected: Decimal,
        /// The day count actually accounted for.
        actual: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
