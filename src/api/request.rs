//! Request types for the reconciliation engine API.
//!
//! This module defines the JSON request structures for the `/reconcile`
//! and `/reconcile/batch` endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendancePunch, AttendanceRecord, FestivalHoliday, GroupPolicy, PayPeriod,
};

/// Request body for the `/reconcile` endpoint.
///
/// Contains everything needed to reconcile one employee's pay period:
/// the period with its contract context, the group policy, and attendance
/// as raw punches, pre-aggregated records, or both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileRequest {
    /// The pay period for the reconciliation.
    pub period: PayPeriodRequest,
    /// The group policy to apply.
    pub policy: GroupPolicy,
    /// Raw check-in/check-out pairs.
    #[serde(default)]
    pub punches: Vec<PunchRequest>,
    /// Pre-aggregated daily attendance records.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecordRequest>,
    /// Festival holidays falling within the period.
    #[serde(default)]
    pub festivals: Vec<FestivalRequest>,
}

/// Request body for the `/reconcile/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReconcileRequest {
    /// The reconciliation requests, processed independently.
    pub items: Vec<ReconcileRequest>,
}

/// Pay period information in a reconciliation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// Identifier of the employee this period belongs to.
    pub employee_id: String,
    /// The monthly contract wage.
    pub contract_wage: Decimal,
    /// Optional first day of the contract.
    #[serde(default)]
    pub contract_start: Option<NaiveDate>,
    /// Optional last day of the contract.
    #[serde(default)]
    pub contract_end: Option<NaiveDate>,
}

/// One raw punch pair in a reconciliation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRequest {
    /// The check-in time, if recorded.
    #[serde(default)]
    pub check_in: Option<NaiveDateTime>,
    /// The check-out time, if recorded.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
}

/// One pre-aggregated attendance record in a reconciliation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
    /// The date the hours were worked.
    pub date: NaiveDate,
    /// Hours worked on that date.
    pub hours_worked: Decimal,
}

/// Festival holiday information in a reconciliation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FestivalRequest {
    /// The date of the festival holiday.
    pub date: NaiveDate,
    /// The name of the festival holiday.
    pub name: String,
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
            employee_id: req.employee_id,
            contract_wage: req.contract_wage,
            contract_start: req.contract_start,
            contract_end: req.contract_end,
        }
    }
}

impl From<PunchRequest> for AttendancePunch {
    fn from(req: PunchRequest) -> Self {
        AttendancePunch {
            check_in: req.check_in,
            check_out: req.check_out,
        }
    }
}

impl From<AttendanceRecordRequest> for AttendanceRecord {
    fn from(req: AttendanceRecordRequest) -> Self {
        AttendanceRecord {
            date: req.date,
            hours_worked: req.hours_worked,
        }
    }
}

impl From<FestivalRequest> for FestivalHoliday {
    fn from(req: FestivalRequest) -> Self {
        FestivalHoliday {
            date: req.date,
            name: req.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_reconcile_request() {
        let json = r#"{
            "period": {
                "start_date": "2026-02-01",
                "end_date": "2026-02-28",
                "employee_id": "emp_001",
                "contract_wage": "15000"
            },
            "policy": "week_off_with_casual",
            "attendance": [
                { "date": "2026-02-02", "hours_worked": "8" }
            ]
        }"#;

        let request: ReconcileRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.period.employee_id, "emp_001");
        assert_eq!(request.policy, GroupPolicy::WeekOffWithCasual);
        assert_eq!(request.attendance.len(), 1);
        assert!(request.punches.is_empty());
        assert!(request.festivals.is_empty());
    }

    #[test]
    fn test_deserialize_request_with_punches() {
        let json = r#"{
            "period": {
                "start_date": "2026-02-01",
                "end_date": "2026-02-28",
                "employee_id": "emp_001",
                "contract_wage": "15000"
            },
            "policy": "plain_week",
            "punches": [
                { "check_in": "2026-02-02T09:00:00", "check_out": "2026-02-02T17:00:00" },
                { "check_in": "2026-02-03T09:00:00" }
            ]
        }"#;

        let request: ReconcileRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.punches.len(), 2);
        assert!(request.punches[1].check_out.is_none());
    }

    #[test]
    fn test_period_conversion() {
        let req = PayPeriodRequest {
            start_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
            employee_id: "emp_001".to_string(),
            contract_wage: Decimal::from(15000),
            contract_start: None,
            contract_end: Some(NaiveDate::from_ymd_opt(2026, 2, 20).unwrap()),
        };

        let period: PayPeriod = req.into();
        assert_eq!(period.employee_id, "emp_001");
        assert_eq!(
            period.contract_end,
            Some(NaiveDate::from_ymd_opt(2026, 2, 20).unwrap())
        );
    }

    #[test]
    fn test_deserialize_batch_request() {
        let json = r#"{
            "items": [
                {
                    "period": {
                        "start_date": "2026-02-01",
                        "end_date": "2026-02-28",
                        "employee_id": "emp_001",
                        "contract_wage": "15000"
                    },
                    "policy": "plain_week"
                }
            ]
        }"#;

        let request: BatchReconcileRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.items.len(), 1);
    }
}
