//! Period calendar construction.
//!
//! Builds the working-day calendar for a pay period under a group policy:
//! which dates are weekly offs and which carry a recognized festival
//! holiday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::{FestivalHoliday, GroupPolicy, PayPeriod};

/// The weekly off day for policies that have one.
pub const WEEKLY_OFF_DAY: Weekday = Weekday::Sun;

/// One date of the period calendar, before attendance is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// Whether the policy treats this date as a working day.
    pub is_working_day: bool,
    /// Whether a recognized festival falls on this date while it is a
    /// working day. Festivals on weekly offs are not paid twice.
    pub is_festival: bool,
}

impl CalendarDay {
    /// Returns true when this date is the policy's weekly off.
    pub fn is_weekly_off(&self) -> bool {
        !self.is_working_day
    }
}

/// Builds the calendar for every date of the period, in date order.
///
/// Under policies with a weekly off, Sundays are non-working days and
/// festival holidays falling on other days are marked. Under
/// [`GroupPolicy::AllDaysWorking`] every date is a plain working day and
/// festivals are ignored entirely.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`] if the period end date precedes
/// the start date.
pub fn build_calendar(
    period: &PayPeriod,
    policy: GroupPolicy,
    festivals: &[FestivalHoliday],
) -> EngineResult<Vec<CalendarDay>> {
    if period.end_date < period.start_date {
        return Err(EngineError::InvalidPeriod {
            message: format!(
                "end date {} is before start date {}",
                period.end_date, period.start_date
            ),
        });
    }

    let mut days = Vec::with_capacity(period.total_days() as usize);
    let mut date = period.start_date;
    while date <= period.end_date {
        let is_weekly_off = policy.has_weekly_off() && date.weekday() == WEEKLY_OFF_DAY;
        let is_festival = policy.recognizes_festivals()
            && !is_weekly_off
            && festivals.iter().any(|f| f.date == date);
        days.push(CalendarDay {
            date,
            is_working_day: !is_weekly_off,
            is_festival,
        });
        date += Duration::days(1);
    }

    Ok(days)
}
