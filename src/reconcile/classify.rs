//! Initial day classification.
//!
//! Assigns each calendar date its first category from contract boundaries,
//! the period calendar, and the aggregated attendance hours. The
//! compensation stage may later re-tag absences and weekly offs.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::ReconcileConfig;
use crate::models::{ClassifiedDay, DayCategory, PayPeriod};

use super::calendar::CalendarDay;

/// Classifies every date of the period, in date order.
///
/// Classification precedence per date:
///
/// 1. Outside the contract boundaries: [`DayCategory::OutOfContract`]
/// 2. Weekly off: [`DayCategory::WeeklyOff`]
/// 3. Recognized festival: [`DayCategory::FestivalPaid`]
/// 4. Hours at or above the full-day threshold: [`DayCategory::FullPresent`]
/// 5. Hours at or above the half-day threshold: [`DayCategory::HalfPresent`]
/// 6. Otherwise: [`DayCategory::AbsentLop`]
///
/// Hours worked are carried through unchanged even on off days and
/// festivals; the compensation stage reads them to find offset credits.
pub fn classify_days(
    calendar: &[CalendarDay],
    hours_by_date: &BTreeMap<NaiveDate, Decimal>,
    period: &PayPeriod,
    config: &ReconcileConfig,
) -> Vec<ClassifiedDay> {
    calendar
        .iter()
        .map(|day| {
            let hours = hours_by_date
                .get(&day.date)
                .copied()
                .unwrap_or(Decimal::ZERO);
            let category = if !period.in_contract(day.date) {
                DayCategory::OutOfContract
            } else if day.is_weekly_off() {
                DayCategory::WeeklyOff
            } else if day.is_festival {
                DayCategory::FestivalPaid
            } else if hours >= config.full_day_threshold {
                DayCategory::FullPresent
            } else if hours >= config.half_day_threshold {
                DayCategory::HalfPresent
            } else {
                DayCategory::AbsentLop
            };
            ClassifiedDay {
                date: day.date,
                category,
                hours_worked: hours,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FestivalHoliday, GroupPolicy};
    use crate::reconcile::calendar::build_calendar;
    use std::str::FromStr;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_period() -> PayPeriod {
        PayPeriod {
            start_date: make_date("2026-02-01"),
            end_date: make_date("2026-02-28"),
            employee_id: "emp_001".to_string(),
            contract_wage: Decimal::from(15000),
            contract_start: None,
            contract_end: None,
        }
    }

    fn classify(
        period: &PayPeriod,
        policy: GroupPolicy,
        festivals: &[FestivalHoliday],
        hours: &BTreeMap<NaiveDate, Decimal>,
    ) -> Vec<ClassifiedDay> {
        let calendar = build_calendar(period, policy, festivals).unwrap();
        classify_days(&calendar, hours, period, &ReconcileConfig::default())
    }

    fn category_of(days: &[ClassifiedDay], date: &str) -> DayCategory {
        days.iter()
            .find(|d| d.date == make_date(date))
            .unwrap()
            .category
    }

    /// CLS-001: full-day threshold boundary at exactly 7.0 hours
    #[test]
    fn test_full_day_boundary() {
        let mut hours = BTreeMap::new();
        hours.insert(make_date("2026-02-02"), dec("7.0"));
        hours.insert(make_date("2026-02-03"), dec("6.999"));

        let days = classify(&create_period(), GroupPolicy::PlainWeek, &[], &hours);
        assert_eq!(category_of(&days, "2026-02-02"), DayCategory::FullPresent);
        assert_eq!(category_of(&days, "2026-02-03"), DayCategory::HalfPresent);
    }

    /// CLS-002: half-day threshold boundary at exactly 3.0 hours
    #[test]
    fn test_half_day_boundary() {
        let mut hours = BTreeMap::new();
        hours.insert(make_date("2026-02-02"), dec("3.0"));
        hours.insert(make_date("2026-02-03"), dec("2.999"));

        let days = classify(&create_period(), GroupPolicy::PlainWeek, &[], &hours);
        assert_eq!(category_of(&days, "2026-02-02"), DayCategory::HalfPresent);
        assert_eq!(category_of(&days, "2026-02-03"), DayCategory::AbsentLop);
    }

    /// CLS-003: no attendance at all is an absence
    #[test]
    fn test_no_hours_is_absent() {
        let days = classify(
            &create_period(),
            GroupPolicy::PlainWeek,
            &[],
            &BTreeMap::new(),
        );
        assert_eq!(category_of(&days, "2026-02-02"), DayCategory::AbsentLop);
    }

    /// CLS-004: weekly off beats attendance hours
    #[test]
    fn test_weekly_off_precedence() {
        let mut hours = BTreeMap::new();
        hours.insert(make_date("2026-02-08"), dec("8"));

        let days = classify(&create_period(), GroupPolicy::PlainWeek, &[], &hours);
        let day = days
            .iter()
            .find(|d| d.date == make_date("2026-02-08"))
            .unwrap();
        assert_eq!(day.category, DayCategory::WeeklyOff);
        // hours stay visible for the compensation stage
        assert_eq!(day.hours_worked, dec("8"));
    }

    /// CLS-005: festival beats attendance thresholds
    #[test]
    fn test_festival_precedence() {
        let festivals = vec![FestivalHoliday {
            date: make_date("2026-02-10"),
            name: "Test Festival".to_string(),
        }];
        let mut hours = BTreeMap::new();
        hours.insert(make_date("2026-02-10"), dec("2"));

        let days = classify(&create_period(), GroupPolicy::PlainWeek, &festivals, &hours);
        assert_eq!(category_of(&days, "2026-02-10"), DayCategory::FestivalPaid);
    }

    /// CLS-006: out-of-contract beats everything
    #[test]
    fn test_out_of_contract_precedence() {
        let mut period = create_period();
        period.contract_start = Some(make_date("2026-02-10"));

        let mut hours = BTreeMap::new();
        hours.insert(make_date("2026-02-05"), dec("8"));

        let days = classify(&period, GroupPolicy::PlainWeek, &[], &hours);
        assert_eq!(category_of(&days, "2026-02-05"), DayCategory::OutOfContract);
        // 2026-02-08 is a Sunday before the contract start
        assert_eq!(category_of(&days, "2026-02-08"), DayCategory::OutOfContract);
        assert_eq!(category_of(&days, "2026-02-10"), DayCategory::AbsentLop);
    }

    /// CLS-007: under all-days-working, Sundays follow the thresholds
    #[test]
    fn test_all_days_working_sundays_classified() {
        let mut hours = BTreeMap::new();
        hours.insert(make_date("2026-02-08"), dec("8"));

        let days = classify(&create_period(), GroupPolicy::AllDaysWorking, &[], &hours);
        assert_eq!(category_of(&days, "2026-02-08"), DayCategory::FullPresent);
        assert_eq!(category_of(&days, "2026-02-01"), DayCategory::AbsentLop);
    }

    /// CLS-008: one entry per date, in date order
    #[test]
    fn test_exhaustive_date_order() {
        let days = classify(
            &create_period(),
            GroupPolicy::PlainWeek,
            &[],
            &BTreeMap::new(),
        );
        assert_eq!(days.len(), 28);
        for pair in days.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }
}
