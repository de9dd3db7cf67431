//! Configuration types for attendance reconciliation.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Tunable thresholds and constants for a reconciliation run.
///
/// The values here are the only knobs the engine exposes; everything else
/// (weekly-off day, pay-line codes, compensation precedence) is fixed by the
/// group policies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReconcileConfig {
    /// Minimum aggregated hours for a date to count as a full present day.
    pub full_day_threshold: Decimal,
    /// Minimum aggregated hours for a date to count as a half present day.
    pub half_day_threshold: Decimal,
    /// Casual-leave days granted per calendar month, for policies that
    /// grant the quota.
    pub monthly_leave_quota: u32,
    /// Nominal hours represented by one paid day on pay lines.
    pub nominal_day_hours: Decimal,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            full_day_threshold: Decimal::from(7),
            half_day_threshold: Decimal::from(3),
            monthly_leave_quota: 1,
            nominal_day_hours: Decimal::from(8),
        }
    }
}
