//! Pay line construction.
//!
//! Turns the final day classification into monetary pay lines and aggregate
//! totals, and enforces the day-count conservation invariant.

use rust_decimal::Decimal;

use crate::config::ReconcileConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{ClassifiedDay, DayCategory, DayTotals, PayLine, PayPeriod};

/// Fixed emission order for pay lines.
const LINE_ORDER: [DayCategory; 8] = [
    DayCategory::FullPresent,
    DayCategory::HalfPresent,
    DayCategory::FestivalPaid,
    DayCategory::CasualLeave,
    DayCategory::SundayCompensated,
    DayCategory::ExtraWorkBonus,
    DayCategory::AbsentLop,
    DayCategory::OutOfContract,
];

/// Builds the pay lines and totals from the classified days.
///
/// The per-day rate divides the contract wage by calendar days, not working
/// days. One line is emitted per non-empty category in a fixed order; half
/// present days contribute 0.5 paid day to their own line and 0.5 unpaid
/// day to the absence line. The absence and out-of-contract lines carry a
/// zero amount: the deduction is implicit in the days they do not earn.
///
/// # Errors
///
/// Returns [`EngineError::ConservationViolation`] when the emitted day
/// counts do not sum to the calendar days minus remaining weekly offs.
pub fn build_pay_lines(
    days: &[ClassifiedDay],
    period: &PayPeriod,
    config: &ReconcileConfig,
) -> EngineResult<(Vec<PayLine>, DayTotals)> {
    let total_days = Decimal::from(period.total_days());
    let per_day_rate = period.contract_wage / total_days;
    let half = Decimal::new(5, 1);

    let mut counts: Vec<(DayCategory, Decimal)> =
        LINE_ORDER.iter().map(|c| (*c, Decimal::ZERO)).collect();
    let mut weekly_off_days = Decimal::ZERO;

    for day in days {
        match day.category {
            DayCategory::WeeklyOff => weekly_off_days += Decimal::ONE,
            DayCategory::HalfPresent => {
                add_count(&mut counts, DayCategory::HalfPresent, half);
                add_count(&mut counts, DayCategory::AbsentLop, half);
            }
            category => add_count(&mut counts, category, Decimal::ONE),
        }
    }

    let mut pay_lines = Vec::new();
    let mut paid_days = Decimal::ZERO;
    let mut unpaid_days = Decimal::ZERO;
    let mut out_of_contract_days = Decimal::ZERO;
    let mut gross_amount = Decimal::ZERO;

    for (category, day_count) in &counts {
        if day_count.is_zero() {
            continue;
        }
        let amount = if category.is_paid() {
            (*day_count * per_day_rate).round_dp(2)
        } else {
            Decimal::ZERO
        };
        match category {
            c if c.is_paid() => paid_days += *day_count,
            DayCategory::OutOfContract => out_of_contract_days += *day_count,
            _ => unpaid_days += *day_count,
        }
        gross_amount += amount;
        pay_lines.push(PayLine {
            label: category.label().to_string(),
            code: category.code().to_string(),
            day_count: *day_count,
            hour_count: *day_count * config.nominal_day_hours,
            amount,
        });
    }

    let accounted_days = paid_days + unpaid_days + out_of_contract_days;
    let expected = total_days - weekly_off_days;
    if accounted_days != expected {
        return Err(EngineError::ConservationViolation {
            expected,
            actual: accounted_days,
        });
    }

    let totals = DayTotals {
        total_days,
        working_days: total_days - weekly_off_days,
        weekly_off_days,
        per_day_rate,
        paid_days,
        unpaid_days,
        out_of_contract_days,
        accounted_days,
        gross_amount,
    };

    Ok((pay_lines, totals))
}

fn add_count(counts: &mut [(DayCategory, Decimal)], category: DayCategory, delta: Decimal) {
    for (c, count) in counts.iter_mut() {
        if *c == category {
            *count += delta;
            return;
        }
    }
}
