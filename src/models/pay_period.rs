//! Pay period and festival holiday models.
//!
//! This module contains the [`PayPeriod`] and [`FestivalHoliday`] types that
//! define the calculation context for a reconciliation run.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a festival holiday recognized by the group policies.
///
/// Festival holidays are paid non-working days for the policies that
/// recognize them; under [`GroupPolicy::AllDaysWorking`] they are ignored.
///
/// [`GroupPolicy::AllDaysWorking`]: crate::models::GroupPolicy::AllDaysWorking
///
/// # Example
///
/// ```
/// use reconcile_engine::models::FestivalHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = FestivalHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///     name: "Republic Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FestivalHoliday {
    /// The date of the festival holiday.
    pub date: NaiveDate,
    /// The name of the festival holiday.
    pub name: String,
}

/// Represents a pay period for one employee, with its contract context.
///
/// A pay period defines the date window for a reconciliation run together
/// with the monthly contract wage and the optional contract boundaries.
/// The period is immutable once a computation begins; the engine only reads
/// it and produces fresh output on every run.
///
/// # Example
///
/// ```
/// use reconcile_engine::models::PayPeriod;
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
///
/// assert_eq!(period.total_days(), 28);
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// Identifier of the employee this period belongs to.
    pub employee_id: String,
    /// The monthly contract wage, resolved by the caller.
    pub contract_wage: Decimal,
    /// Optional first day of the contract; dates before it are out of contract.
    #[serde(default)]
    pub contract_start: Option<NaiveDate>,
    /// Optional last day of the contract; dates after it are out of contract.
    #[serde(default)]
    pub contract_end: Option<NaiveDate>,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Checks if a given date falls within the contract boundaries.
    ///
    /// An unset boundary is treated as unbounded on that side.
    ///
    /// # Example
    ///
    /// ```
    /// use reconcile_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let period = PayPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
    ///     employee_id: "emp_001".to_string(),
    ///     contract_wage: Decimal::from(15000),
    ///     contract_start: Some(NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()),
    ///     contract_end: None,
    /// };
    ///
    /// assert!(!period.in_contract(NaiveDate::from_ymd_opt(2026, 2, 9).unwrap()));
    /// assert!(period.in_contract(NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()));
    /// ```
    pub fn in_contract(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.contract_start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.contract_end {
            if date > end {
                return false;
            }
        }
        true
    }

    /// Returns the number of calendar days in the period, inclusive.
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Validates the period before any computation starts.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidPeriod`] if the end date is before the start
    ///   date or the contract boundaries are inverted.
    /// - [`EngineError::InvalidWage`] if the contract wage is not positive.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidPeriod {
                message: format!(
                    "end date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            });
        }
        if let (Some(start), Some(end)) = (self.contract_start, self.contract_end) {
            if end < start {
                return Err(EngineError::InvalidPeriod {
                    message: format!(
                        "contract end {} is before contract start {}",
                        end, start
                    ),
                });
            }
        }
        if self.contract_wage <= Decimal::ZERO {
            return Err(EngineError::InvalidWage {
                employee_id: self.employee_id.clone(),
                message: "wage must be positive".to_string(),
            });
        }
        Ok(())
    }
}
