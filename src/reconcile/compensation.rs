//! Absence compensation.
//!
//! Re-tags tentative absences according to the group policy: the monthly
//! leave quota first, then offsets earned by working on weekly-off or
//! festival days, then the full-7-day-week bonus. Each absence is resolved
//! by at most one rule and the number of absences never increases.

use std::collections::BTreeMap;

use chrono::{Datelike, IsoWeek};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::ReconcileConfig;
use crate::models::{ClassifiedDay, DayCategory, GroupPolicy};

/// Resolves absences in place over the classified days.
///
/// Precedence, each stage consuming absences chronologically:
///
/// 1. Monthly leave quota (policies with [`GroupPolicy::grants_leave_quota`]):
///    per calendar month, the earliest absences up to the quota become
///    [`DayCategory::CasualLeave`].
/// 2. Work offsets (policies with [`GroupPolicy::allows_offset`]): each
///    worked weekly-off or worked festival day outside a full week yields
///    one credit; remaining absences consume credits and become
///    [`DayCategory::SundayCompensated`].
/// 3. Full-week bonus (same policies): in a week where every expected
///    working day is a full present day and the weekly-off day was worked,
///    the weekly-off day and any worked festival day of that week become
///    [`DayCategory::ExtraWorkBonus`]. Full-week days never enter the
///    rule-2 credit pool, even when absences remain.
pub fn resolve_compensation(
    days: &mut [ClassifiedDay],
    policy: GroupPolicy,
    config: &ReconcileConfig,
) {
    if policy.grants_leave_quota() {
        apply_leave_quota(days, config.monthly_leave_quota);
    }

    if policy.allows_offset() {
        let full_weeks = detect_full_weeks(days);
        apply_work_offsets(days, &full_weeks);
        apply_full_week_bonus(days, &full_weeks);
    }
}

/// Re-tags the earliest absences of each calendar month as casual leave.
fn apply_leave_quota(days: &mut [ClassifiedDay], quota: u32) {
    let mut used: BTreeMap<(i32, u32), u32> = BTreeMap::new();

    for day in days.iter_mut() {
        if day.category != DayCategory::AbsentLop {
            continue;
        }
        let month = (day.date.year(), day.date.month());
        let count = used.entry(month).or_insert(0);
        if *count < quota {
            *count += 1;
            debug!(date = %day.date, "absence covered by monthly leave quota");
            day.category = DayCategory::CasualLeave;
        }
    }
}

/// Finds the ISO weeks whose in-period expectations are fully met.
///
/// A week qualifies when it has at least one expected working day inside
/// the period, every such day is a full present day, and the weekly-off
/// day is inside the period and was worked.
fn detect_full_weeks(days: &[ClassifiedDay]) -> Vec<IsoWeek> {
    #[derive(Default)]
    struct WeekTally {
        expected: u32,
        full_present: u32,
        off_worked: bool,
    }

    let mut weeks: BTreeMap<IsoWeek, WeekTally> = BTreeMap::new();

    for day in days {
        let tally = weeks.entry(day.date.iso_week()).or_default();
        match day.category {
            DayCategory::WeeklyOff => {
                if day.hours_worked > Decimal::ZERO {
                    tally.off_worked = true;
                }
            }
            DayCategory::FullPresent => {
                tally.expected += 1;
                tally.full_present += 1;
            }
            DayCategory::HalfPresent | DayCategory::AbsentLop | DayCategory::CasualLeave => {
                tally.expected += 1;
            }
            // Festivals and out-of-contract dates carry no expectation.
            DayCategory::FestivalPaid
            | DayCategory::OutOfContract
            | DayCategory::SundayCompensated
            | DayCategory::ExtraWorkBonus => {}
        }
    }

    weeks
        .into_iter()
        .filter(|(_, t)| t.expected > 0 && t.expected == t.full_present && t.off_worked)
        .map(|(week, _)| week)
        .collect()
}

/// Consumes worked off-day credits against remaining absences.
fn apply_work_offsets(days: &mut [ClassifiedDay], full_weeks: &[IsoWeek]) {
    let mut credits: u32 = 0;
    for day in days.iter() {
        if full_weeks.contains(&day.date.iso_week()) {
            continue;
        }
        let is_credit_donor = matches!(
            day.category,
            DayCategory::WeeklyOff | DayCategory::FestivalPaid
        );
        if is_credit_donor && day.hours_worked > Decimal::ZERO {
            credits += 1;
        }
    }

    for day in days.iter_mut() {
        if credits == 0 {
            break;
        }
        if day.category == DayCategory::AbsentLop {
            credits -= 1;
            debug!(date = %day.date, "absence offset by worked off-day credit");
            day.category = DayCategory::SundayCompensated;
        }
    }
}

/// Promotes full-week off days and worked festivals to bonus pay.
fn apply_full_week_bonus(days: &mut [ClassifiedDay], full_weeks: &[IsoWeek]) {
    for day in days.iter_mut() {
        if !full_weeks.contains(&day.date.iso_week()) {
            continue;
        }
        let promote = match day.category {
            DayCategory::WeeklyOff => day.hours_worked > Decimal::ZERO,
            DayCategory::FestivalPaid => day.hours_worked > Decimal::ZERO,
            _ => false,
        };
        if promote {
            debug!(date = %day.date, "full-week off day promoted to bonus");
            day.category = DayCategory::ExtraWorkBonus;
        }
    }
}
