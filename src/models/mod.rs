//! Core data models for the reconciliation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod pay_period;
mod policy;
mod reconciliation_result;

pub use attendance::{AttendancePunch, AttendanceRecord};
pub use pay_period::{FestivalHoliday, PayPeriod};
pub use policy::GroupPolicy;
pub use reconciliation_result::{
    ClassifiedDay, DayCategory, DayTotals, PayLine, Reconciliation, ReconciliationResult,
    ReconciliationWarning,
};
