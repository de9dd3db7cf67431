//! The reconciliation pipeline.
//!
//! This module wires the pipeline stages together: calendar construction,
//! punch aggregation, day classification, absence compensation, and pay
//! line construction.
//!
//! The entry points are pure and deterministic; identical inputs yield an
//! identical [`Reconciliation`]. Callers that re-run a period replace any
//! prior result wholesale.

pub mod attendance;
pub mod calendar;
pub mod classify;
pub mod compensation;
pub mod pay_lines;

use std::collections::BTreeMap;

use tracing::info;

use crate::config::ReconcileConfig;
use crate::error::EngineResult;
use crate::models::{
    AttendancePunch, AttendanceRecord, FestivalHoliday, GroupPolicy, PayPeriod, Reconciliation,
    ReconciliationWarning,
};

pub use attendance::{aggregate_punches, merge_records};
pub use calendar::{CalendarDay, build_calendar};
pub use classify::classify_days;
pub use compensation::resolve_compensation;
pub use pay_lines::build_pay_lines;

/// Reconciles a pay period from pre-aggregated daily attendance.
///
/// Runs the full pipeline: validate the period, build the period calendar
/// under the policy, classify every date, resolve compensations, and build
/// the pay lines with the conservation check.
///
/// # Example
///
/// ```
/// use reconcile_engine::config::ReconcileConfig;
/// use reconcile_engine::models::{AttendanceRecord, GroupPolicy, PayPeriod};
/// use reconcile_engine::reconcile::reconcile;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
///     employee_id: "emp_001".to_string(),
///     contract_wage: Decimal::from(15000),
///     contract_start: None,
///     contract_end: None,
/// };
/// let attendance = vec![AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
///     hours_worked: Decimal::from(8),
/// }];
///
/// let result = reconcile(
///     &period,
///     GroupPolicy::PlainWeek,
///     &attendance,
///     &[],
///     &ReconcileConfig::default(),
/// ).unwrap();
/// assert_eq!(result.days.len(), 28);
/// ```
///
/// # Errors
///
/// Propagates validation errors from the period and attendance inputs, and
/// [`crate::error::EngineError::ConservationViolation`] if the final day
/// counts fail to partition the period.
pub fn reconcile(
    period: &PayPeriod,
    policy: GroupPolicy,
    attendance: &[AttendanceRecord],
    festivals: &[FestivalHoliday],
    config: &ReconcileConfig,
) -> EngineResult<Reconciliation> {
    let mut hours_by_date = BTreeMap::new();
    attendance::merge_records(&mut hours_by_date, attendance, period)?;
    run_pipeline(period, policy, hours_by_date, Vec::new(), festivals, config)
}

/// Reconciles a pay period from raw punches plus pre-aggregated records.
///
/// Punches are aggregated per date by maximum span; records merge on top,
/// again by maximum. Warnings from ambiguous punches are carried into the
/// result.
///
/// # Errors
///
/// Propagates validation errors from the period, punch, and record inputs,
/// plus everything [`reconcile`] can return.
pub fn reconcile_punches(
    period: &PayPeriod,
    policy: GroupPolicy,
    punches: &[AttendancePunch],
    attendance: &[AttendanceRecord],
    festivals: &[FestivalHoliday],
    config: &ReconcileConfig,
) -> EngineResult<Reconciliation> {
    let (mut hours_by_date, warnings) = attendance::aggregate_punches(punches, period)?;
    attendance::merge_records(&mut hours_by_date, attendance, period)?;
    run_pipeline(period, policy, hours_by_date, warnings, festivals, config)
}

fn run_pipeline(
    period: &PayPeriod,
    policy: GroupPolicy,
    hours_by_date: BTreeMap<chrono::NaiveDate, rust_decimal::Decimal>,
    warnings: Vec<ReconciliationWarning>,
    festivals: &[FestivalHoliday],
    config: &ReconcileConfig,
) -> EngineResult<Reconciliation> {
    period.validate()?;

    let calendar = calendar::build_calendar(period, policy, festivals)?;
    let mut days = classify::classify_days(&calendar, &hours_by_date, period, config);
    compensation::resolve_compensation(&mut days, policy, config);
    let (pay_lines, totals) = pay_lines::build_pay_lines(&days, period, config)?;

    info!(
        employee_id = %period.employee_id,
        policy = %policy,
        paid_days = %totals.paid_days,
        unpaid_days = %totals.unpaid_days,
        gross = %totals.gross_amount,
        "period reconciled"
    );

    Ok(Reconciliation {
        days,
        pay_lines,
        totals,
        warnings,
    })
}
