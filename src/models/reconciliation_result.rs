//! Reconciliation result models.
//!
//! This module contains the [`DayCategory`] tag set, the per-date
//! [`ClassifiedDay`] entries, the monetary [`PayLine`] items, the
//! [`DayTotals`] tallies, and the [`ReconciliationResult`] envelope that
//! captures all outputs of a reconciliation run.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{GroupPolicy, PayPeriod};

/// The category assigned to one calendar date of the pay period.
///
/// Categories are mutually exclusive: every date in the period maps to
/// exactly one of them. [`DayCategory::WeeklyOff`] and
/// [`DayCategory::OutOfContract`] sit outside the paid/unpaid partition;
/// everything else is either paid at the per-day rate or an unpaid absence.
///
/// # Example
///
/// ```
/// use reconcile_engine::models::DayCategory;
///
/// assert!(DayCategory::FullPresent.is_paid());
/// assert!(!DayCategory::AbsentLop.is_paid());
/// assert!(!DayCategory::WeeklyOff.in_partition());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCategory {
    /// Attendance met the full-day threshold.
    FullPresent,
    /// Attendance met the half-day threshold only; counts as 0.5 paid day.
    HalfPresent,
    /// A festival holiday on a working day, paid without attendance.
    FestivalPaid,
    /// An absence converted by the monthly leave quota.
    CasualLeave,
    /// An absence offset by a worked weekly-off or festival day.
    SundayCompensated,
    /// A weekly-off or festival day promoted to an extra paid day by the
    /// full-7-day-week rule.
    ExtraWorkBonus,
    /// The weekly off day; outside the paid/unpaid partition.
    WeeklyOff,
    /// A date outside the contract boundaries; outside the partition.
    OutOfContract,
    /// An unresolved unpaid absence (loss of pay).
    AbsentLop,
}

impl DayCategory {
    /// Returns true when days of this category are paid at the per-day rate.
    pub fn is_paid(&self) -> bool {
        matches!(
            self,
            DayCategory::FullPresent
                | DayCategory::HalfPresent
                | DayCategory::FestivalPaid
                | DayCategory::CasualLeave
                | DayCategory::SundayCompensated
                | DayCategory::ExtraWorkBonus
        )
    }

    /// Returns true when the category belongs to the paid/unpaid partition
    /// checked by the conservation invariant.
    ///
    /// [`DayCategory::WeeklyOff`] days are excluded entirely;
    /// [`DayCategory::OutOfContract`] days are counted on the unpaid side.
    pub fn in_partition(&self) -> bool {
        !matches!(self, DayCategory::WeeklyOff)
    }

    /// The human-readable pay-line label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            DayCategory::FullPresent => "Attendance",
            DayCategory::HalfPresent => "Half Day Attendance",
            DayCategory::FestivalPaid => "Paid Festival",
            DayCategory::CasualLeave => "Casual Leave",
            DayCategory::SundayCompensated => "LOP Compensated",
            DayCategory::ExtraWorkBonus => "Extra Work Bonus",
            DayCategory::WeeklyOff => "Weekly Off",
            DayCategory::OutOfContract => "Out of Contract",
            DayCategory::AbsentLop => "Absent / LOP",
        }
    }

    /// The short pay-line code for this category.
    pub fn code(&self) -> &'static str {
        match self {
            DayCategory::FullPresent => "WORK100",
            DayCategory::HalfPresent => "HALFDAY",
            DayCategory::FestivalPaid => "FESTIVAL",
            DayCategory::CasualLeave => "CASUAL",
            DayCategory::SundayCompensated => "LOPCOMP",
            DayCategory::ExtraWorkBonus => "EXTRA",
            DayCategory::WeeklyOff => "WEEKOFF",
            DayCategory::OutOfContract => "OUT",
            DayCategory::AbsentLop => "LOP",
        }
    }
}

impl std::fmt::Display for DayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One classified calendar date.
///
/// The `days` sequence of a [`Reconciliation`] holds one entry per date of
/// the period, in date order, forming an exhaustive non-overlapping
/// partition of the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// The category assigned to this date.
    pub category: DayCategory,
    /// Aggregated hours worked on this date (zero when absent).
    pub hours_worked: Decimal,
}

/// Represents a single monetary line item of the reconciliation output.
///
/// One line is emitted per non-empty day category;
/// `amount = day_count * per_day_rate`, rounded to 2 decimal places.
///
/// # Example
///
/// ```
/// use reconcile_engine::models::PayLine;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = PayLine {
///     label: "Attendance".to_string(),
///     code: "WORK100".to_string(),
///     day_count: Decimal::from(24),
///     hour_count: Decimal::from(192),
///     amount: Decimal::from_str("12000.00").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLine {
    /// Human-readable line label.
    pub label: String,
    /// Short line code (e.g., "WORK100", "LOP").
    pub code: String,
    /// Number of days in this category; half days contribute 0.5.
    pub day_count: Decimal,
    /// Number of nominal hours (`day_count * nominal_day_hours`).
    pub hour_count: Decimal,
    /// The monetary amount for this line; zero for unpaid categories.
    pub amount: Decimal,
}

/// Aggregated day-count and monetary tallies for a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTotals {
    /// Total calendar days in the period.
    pub total_days: Decimal,
    /// Working days in the period (calendar days minus weekly offs).
    pub working_days: Decimal,
    /// Dates still tagged as weekly off after compensation.
    pub weekly_off_days: Decimal,
    /// The per-day wage rate (`contract_wage / total_days`).
    pub per_day_rate: Decimal,
    /// Total paid days across all paid categories.
    pub paid_days: Decimal,
    /// Total unpaid absence days (including half-day remainders).
    pub unpaid_days: Decimal,
    /// Days outside the contract boundaries.
    pub out_of_contract_days: Decimal,
    /// The day count the conservation check summed to.
    pub accounted_days: Decimal,
    /// Sum of all pay-line amounts.
    pub gross_amount: Decimal,
}

/// A warning generated during reconciliation.
///
/// Warnings indicate recoverable input problems (e.g., a one-sided punch)
/// that do not prevent computation but require manual review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl ReconciliationWarning {
    /// Warning code for a punch with only one recorded side.
    pub const AMBIGUOUS_ATTENDANCE: &'static str = "AMBIGUOUS_ATTENDANCE";

    /// Creates the warning for a one-sided punch on the given date.
    pub fn ambiguous_attendance(date: NaiveDate) -> Self {
        Self {
            code: Self::AMBIGUOUS_ATTENDANCE.to_string(),
            message: format!(
                "Punch on {} has only one side recorded; counted as zero hours",
                date
            ),
            severity: "medium".to_string(),
        }
    }
}

/// The deterministic output of the pure reconciliation core.
///
/// Re-running with identical inputs yields an identical value; the caller
/// replaces any prior result for the same period with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// One classified entry per calendar date, in date order.
    pub days: Vec<ClassifiedDay>,
    /// One monetary line per non-empty day category.
    pub pay_lines: Vec<PayLine>,
    /// Aggregated tallies, including the conservation sum.
    pub totals: DayTotals,
    /// Recoverable input problems encountered along the way.
    pub warnings: Vec<ReconciliationWarning>,
}

/// The complete result of a reconciliation request, as served by the API.
///
/// Wraps the deterministic [`Reconciliation`] payload with run metadata
/// (result id, timestamp, engine version, timing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// Unique identifier for this computation.
    pub calculation_id: Uuid,
    /// When the computation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the computation.
    pub engine_version: String,
    /// The employee the computation is for.
    pub employee_id: String,
    /// The pay period that was reconciled.
    pub period: PayPeriod,
    /// The group policy that was applied.
    pub policy: GroupPolicy,
    /// The reconciliation payload.
    #[serde(flatten)]
    pub reconciliation: Reconciliation,
    /// The total computation duration in microseconds.
    pub duration_us: u64,
}
