//! Attendance models.
//!
//! This module defines the raw [`AttendancePunch`] pairs coming from badge
//! terminals and the aggregated per-date [`AttendanceRecord`].

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents one raw check-in/check-out pair from a badge terminal.
///
/// Either side may be missing when a swipe was not recorded; such punches
/// carry an ambiguous duration and contribute zero hours.
///
/// # Example
///
/// ```
/// use reconcile_engine::models::AttendancePunch;
/// use chrono::NaiveDateTime;
///
/// let punch = AttendancePunch {
///     check_in: Some(NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
///     check_out: Some(NaiveDateTime::parse_from_str("2026-01-15 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
/// };
/// assert_eq!(punch.span_hours(), Some(rust_decimal::Decimal::new(80, 1))); // 8.0
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePunch {
    /// The check-in time, if recorded.
    #[serde(default)]
    pub check_in: Option<NaiveDateTime>,
    /// The check-out time, if recorded.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
}

impl AttendancePunch {
    /// Returns the calendar date this punch belongs to.
    ///
    /// The check-in date wins; a punch with only a check-out is dated by the
    /// check-out. A fully empty punch has no date.
    pub fn punch_date(&self) -> Option<NaiveDate> {
        self.check_in
            .or(self.check_out)
            .map(|t| t.date())
    }

    /// Returns the span of this punch in hours, or `None` when one side is
    /// missing.
    ///
    /// The span may be negative when the check-out precedes the check-in;
    /// the aggregator rejects such punches.
    pub fn span_hours(&self) -> Option<Decimal> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => {
                let minutes = (check_out - check_in).num_minutes();
                Some(Decimal::new(minutes, 0) / Decimal::new(60, 0))
            }
            _ => None,
        }
    }

    /// Returns true when one side of the pair is missing.
    pub fn is_ambiguous(&self) -> bool {
        self.check_in.is_none() != self.check_out.is_none()
    }
}

/// Aggregated hours worked on one date for one employee.
///
/// At most one record exists per date; duplicate punches on the same date
/// are merged by taking the maximum observed span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The date the hours were worked.
    pub date: NaiveDate,
    /// Hours worked on that date, in `[0, 24)`.
    pub hours_worked: Decimal,
}
