//! Group policy model.
//!
//! This module defines the [`GroupPolicy`] enum that governs which days of
//! the week are working days and how absences may be offset. The variants
//! replace the string codes `group_1`..`group_4` used by the legacy payroll
//! schedules with a closed enum so that an unhandled policy is a compile
//! error, not a silent fall-through.

use serde::{Deserialize, Serialize};

/// The weekly/holiday rule set for an employee group.
///
/// Each variant fixes four things at once: whether the last day of the week
/// is a weekly off, whether festival holidays are paid off, whether a
/// monthly casual-leave quota exists, and whether work on weekly-off or
/// festival days can offset weekday absences.
///
/// # Example
///
/// ```
/// use reconcile_engine::models::GroupPolicy;
///
/// let policy = GroupPolicy::WeekOffWithCasual;
/// assert!(policy.has_weekly_off());
/// assert!(policy.grants_leave_quota());
/// assert!(policy.allows_offset());
///
/// assert!(!GroupPolicy::AllDaysWorking.recognizes_festivals());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupPolicy {
    /// Mon-Sat working, monthly leave quota, festivals paid; absences beyond
    /// the quota are unpaid (legacy `group_1`).
    PlainWeek,
    /// Mon-Sat working, monthly leave quota, festivals paid; worked Sundays
    /// and festivals offset absences, full 7-day weeks earn a bonus day
    /// (legacy `group_2`).
    WeekOffWithCasual,
    /// Same as [`GroupPolicy::WeekOffWithCasual`] but without the monthly
    /// leave quota (legacy `group_3`).
    WeekOffNoCasual,
    /// Every day of the week is a working day; no quota, no festival pay,
    /// no offsets (legacy `group_4`).
    AllDaysWorking,
}

impl GroupPolicy {
    /// Returns true when the last day of the week is a non-working day.
    pub fn has_weekly_off(&self) -> bool {
        !matches!(self, GroupPolicy::AllDaysWorking)
    }

    /// Returns true when festival holidays are paid non-working days.
    pub fn recognizes_festivals(&self) -> bool {
        !matches!(self, GroupPolicy::AllDaysWorking)
    }

    /// Returns true when the policy grants the monthly casual-leave quota.
    pub fn grants_leave_quota(&self) -> bool {
        matches!(self, GroupPolicy::PlainWeek | GroupPolicy::WeekOffWithCasual)
    }

    /// Returns true when worked weekly-off or festival days can offset
    /// weekday absences and full weeks earn a bonus day.
    pub fn allows_offset(&self) -> bool {
        matches!(
            self,
            GroupPolicy::WeekOffWithCasual | GroupPolicy::WeekOffNoCasual
        )
    }
}

impl std::fmt::Display for GroupPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupPolicy::PlainWeek => write!(f, "PlainWeek"),
            GroupPolicy::WeekOffWithCasual => write!(f, "WeekOffWithCasual"),
            GroupPolicy::WeekOffNoCasual => write!(f, "WeekOffNoCasual"),
            GroupPolicy::AllDaysWorking => write!(f, "AllDaysWorking"),
        }
    }
}
