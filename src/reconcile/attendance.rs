//! Punch aggregation.
//!
//! Collapses raw check-in/check-out pairs into at most one hours figure per
//! calendar date, keeping the longest span when a date carries several
//! punches.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendancePunch, AttendanceRecord, PayPeriod, ReconciliationWarning};

const HOURS_PER_DAY: i64 = 24;

/// Aggregates raw punches into per-date hours.
///
/// Multiple punches on the same date are merged by taking the maximum span,
/// so a re-badged lunch break cannot undercount the day. Punches dated
/// outside the period or the contract window are dropped; punches with only
/// one recorded side contribute zero hours and emit an
/// `AMBIGUOUS_ATTENDANCE` warning.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPunch`] when a punch has a check-out
/// before its check-in, or spans 24 hours or more.
pub fn aggregate_punches(
    punches: &[AttendancePunch],
    period: &PayPeriod,
) -> EngineResult<(BTreeMap<NaiveDate, Decimal>, Vec<ReconciliationWarning>)> {
    let mut hours_by_date: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut warnings = Vec::new();

    for punch in punches {
        let Some(date) = punch.punch_date() else {
            // Both sides empty; nothing to anchor the punch to.
            continue;
        };
        if !period.contains_date(date) || !period.in_contract(date) {
            continue;
        }

        if punch.is_ambiguous() {
            warn!(date = %date, "punch has only one recorded side");
            warnings.push(ReconciliationWarning::ambiguous_attendance(date));
            hours_by_date.entry(date).or_insert(Decimal::ZERO);
            continue;
        }

        if let Some(span) = punch.span_hours() {
            if span < Decimal::ZERO {
                return Err(EngineError::InvalidPunch {
                    date,
                    message: "check-out precedes check-in".to_string(),
                });
            }
            if span >= Decimal::from(HOURS_PER_DAY) {
                return Err(EngineError::InvalidPunch {
                    date,
                    message: format!("span of {} hours is not plausible for one day", span),
                });
            }
            let entry = hours_by_date.entry(date).or_insert(Decimal::ZERO);
            if span > *entry {
                *entry = span;
            }
        }
    }

    Ok((hours_by_date, warnings))
}

/// Merges pre-aggregated attendance records into the per-date map.
///
/// Records allow callers that already hold daily totals to skip the punch
/// stage. A record for a date that also has punches wins when it reports
/// more hours. Records dated outside the period or the contract window are
/// dropped, same as punches.
///
/// # Errors
///
/// Returns [`EngineError::InvalidAttendance`] when a record reports
/// negative hours or 24 hours or more.
pub fn merge_records(
    hours_by_date: &mut BTreeMap<NaiveDate, Decimal>,
    records: &[AttendanceRecord],
    period: &PayPeriod,
) -> EngineResult<()> {
    for record in records {
        if record.hours_worked < Decimal::ZERO {
            return Err(EngineError::InvalidAttendance {
                date: record.date,
                message: "hours worked cannot be negative".to_string(),
            });
        }
        if record.hours_worked >= Decimal::from(HOURS_PER_DAY) {
            return Err(EngineError::InvalidAttendance {
                date: record.date,
                message: format!(
                    "{} hours worked is not plausible for one day",
                    record.hours_worked
                ),
            });
        }
        if !period.contains_date(record.date) || !period.in_contract(record.date) {
            continue;
        }
        let entry = hours_by_date.entry(record.date).or_insert(Decimal::ZERO);
        if record.hours_worked > *entry {
            *entry = record.hours_worked;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::str::FromStr;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn punch(date: &str, start: &str, end: &str) -> AttendancePunch {
        AttendancePunch {
            check_in: Some(make_datetime(date, start)),
            check_out: Some(make_datetime(date, end)),
        }
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

    /// AGG-001: a single full punch produces its span
    #[test]
    fn test_single_punch() {
        let punches = vec![punch("2026-02-02", "09:00:00", "17:30:00")];
        let (hours, warnings) = aggregate_punches(&punches, &create_period()).unwrap();

        assert_eq!(hours.get(&make_date("2026-02-02")), Some(&dec("8.5")));
        assert!(warnings.is_empty());
    }

    /// AGG-002: the longest punch on a date wins, spans do not sum
    #[test]
    fn test_multiple_punches_take_maximum() {
        let punches = vec![
            punch("2026-02-02", "09:00:00", "12:00:00"),
            punch("2026-02-02", "09:00:00", "17:00:00"),
            punch("2026-02-02", "13:00:00", "15:00:00"),
        ];
        let (hours, _) = aggregate_punches(&punches, &create_period()).unwrap();
        assert_eq!(hours.get(&make_date("2026-02-02")), Some(&dec("8")));
    }

    /// AGG-003: a one-sided punch warns and counts zero hours
    #[test]
    fn test_ambiguous_punch_warns() {
        let punches = vec![AttendancePunch {
            check_in: Some(make_datetime("2026-02-02", "09:00:00")),
            check_out: None,
        }];
        let (hours, warnings) = aggregate_punches(&punches, &create_period()).unwrap();

        assert_eq!(hours.get(&make_date("2026-02-02")), Some(&Decimal::ZERO));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, "AMBIGUOUS_ATTENDANCE");
    }

    /// AGG-004: an ambiguous punch does not erase a full punch on the same date
    #[test]
    fn test_ambiguous_punch_keeps_full_punch() {
        let punches = vec![
            punch("2026-02-02", "09:00:00", "17:00:00"),
            AttendancePunch {
                check_in: None,
                check_out: Some(make_datetime("2026-02-02", "21:00:00")),
            },
        ];
        let (hours, warnings) = aggregate_punches(&punches, &create_period()).unwrap();

        assert_eq!(hours.get(&make_date("2026-02-02")), Some(&dec("8")));
        assert_eq!(warnings.len(), 1);
    }

    /// AGG-005: inverted punch is rejected
    #[test]
    fn test_inverted_punch_rejected() {
        let punches = vec![punch("2026-02-02", "17:00:00", "09:00:00")];
        let result = aggregate_punches(&punches, &create_period());

        match result {
            Err(EngineError::InvalidPunch { date, .. }) => {
                assert_eq!(date, make_date("2026-02-02"));
            }
            other => panic!("Expected InvalidPunch, got {:?}", other),
        }
    }

    /// AGG-006: implausibly long punch is rejected
    #[test]
    fn test_day_long_punch_rejected() {
        let punches = vec![AttendancePunch {
            check_in: Some(make_datetime("2026-02-02", "00:00:00")),
            check_out: Some(make_datetime("2026-02-03", "06:00:00")),
        }];
        assert!(matches!(
            aggregate_punches(&punches, &create_period()),
            Err(EngineError::InvalidPunch { .. })
        ));
    }

    /// AGG-007: punches outside the period are dropped
    #[test]
    fn test_out_of_period_punch_dropped() {
        let punches = vec![punch("2026-03-02", "09:00:00", "17:00:00")];
        let (hours, warnings) = aggregate_punches(&punches, &create_period()).unwrap();
        assert!(hours.is_empty());
        assert!(warnings.is_empty());
    }

    /// AGG-011: punches before the contract start are dropped
    #[test]
    fn test_out_of_contract_punch_dropped() {
        let mut period = create_period();
        period.contract_start = Some(make_date("2026-02-10"));

        let punches = vec![punch("2026-02-05", "09:00:00", "17:00:00")];
        let (hours, warnings) = aggregate_punches(&punches, &period).unwrap();
        assert!(hours.is_empty());
        assert!(warnings.is_empty());
    }

    /// AGG-008: records merge by maximum against punch hours
    #[test]
    fn test_merge_records_takes_maximum() {
        let mut hours = BTreeMap::new();
        hours.insert(make_date("2026-02-02"), dec("6"));

        let records = vec![
            AttendanceRecord {
                date: make_date("2026-02-02"),
                hours_worked: dec("8"),
            },
            AttendanceRecord {
                date: make_date("2026-02-03"),
                hours_worked: dec("4"),
            },
        ];
        merge_records(&mut hours, &records, &create_period()).unwrap();

        assert_eq!(hours.get(&make_date("2026-02-02")), Some(&dec("8")));
        assert_eq!(hours.get(&make_date("2026-02-03")), Some(&dec("4")));
    }

    /// AGG-009: record with negative hours is rejected
    #[test]
    fn test_merge_rejects_negative_hours() {
        let mut hours = BTreeMap::new();
        let records = vec![AttendanceRecord {
            date: make_date("2026-02-02"),
            hours_worked: dec("-1"),
        }];
        assert!(matches!(
            merge_records(&mut hours, &records, &create_period()),
            Err(EngineError::InvalidAttendance { .. })
        ));
    }

    /// AGG-012: records outside the contract window are dropped
    #[test]
    fn test_out_of_contract_record_dropped() {
        let mut period = create_period();
        period.contract_end = Some(make_date("2026-02-20"));

        let mut hours = BTreeMap::new();
        let records = vec![
            AttendanceRecord {
                date: make_date("2026-02-25"),
                hours_worked: dec("8"),
            },
            AttendanceRecord {
                date: make_date("2026-02-20"),
                hours_worked: dec("8"),
            },
        ];
        merge_records(&mut hours, &records, &period).unwrap();

        assert_eq!(hours.get(&make_date("2026-02-25")), None);
        assert_eq!(hours.get(&make_date("2026-02-20")), Some(&dec("8")));
    }

    /// AGG-010: record with 24 hours is rejected
    #[test]
    fn test_merge_rejects_full_day_hours() {
        let mut hours = BTreeMap::new();
        let records = vec![AttendanceRecord {
            date: make_date("2026-02-02"),
            hours_worked: dec("24"),
        }];
        assert!(matches!(
            merge_records(&mut hours, &records, &create_period()),
            Err(EngineError::InvalidAttendance { .. })
        ));
    }
}
