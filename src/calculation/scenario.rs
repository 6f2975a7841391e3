//! Per-shift and per-scenario pay calculation.
//!
//! These are the entry points the API, the CLI and the report formatter call.
//! None of them fail: once a shift kind, a date and a rate are typed values
//! there is nothing left to reject.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{DayPayResult, Scenario, ScenarioTotal, ShiftKind, WorkShift};

use super::categorize::categorize_hours;
use super::pay::calculate_pay;

/// Categorizes and prices a single resolved shift.
pub fn calculate_work_shift(shift: &WorkShift, hourly_rate: Decimal) -> DayPayResult {
    let breakdown = categorize_hours(shift.start(), shift.end());
    let pay = calculate_pay(&breakdown, hourly_rate);

    DayPayResult {
        shift: shift.clone(),
        breakdown,
        base_pay: pay.base_pay,
        bonus_pay: pay.bonus_pay,
        total_pay: pay.total_pay,
    }
}

/// Computes pay for `kind` worked on `date` at `hourly_rate`.
///
/// # Example
///
/// ```
/// use shift_comparator::calculation::compute;
/// use shift_comparator::models::ShiftKind;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 2026-01-12 is a Monday: 22:00 to Tuesday 07:00
/// let result = compute(ShiftKind::Night, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(), Decimal::from(13));
/// assert_eq!(result.breakdown.night, Decimal::from(8));
/// assert_eq!(result.breakdown.normal, Decimal::from(1));
/// assert_eq!(result.total_pay, Decimal::from_str("132.60").unwrap());
/// ```
pub fn compute(kind: ShiftKind, date: NaiveDate, hourly_rate: Decimal) -> DayPayResult {
    calculate_work_shift(&WorkShift::new(date, kind), hourly_rate)
}

/// Computes every shift of a saved or submitted [`Scenario`].
pub fn calculate_scenario(scenario: &Scenario) -> ScenarioTotal {
    let days: Vec<DayPayResult> = scenario
        .shifts
        .iter()
        .map(|shift| calculate_work_shift(shift, scenario.hourly_rate))
        .collect();

    let total = ScenarioTotal::from_days(scenario.name.clone(), scenario.hourly_rate, days);
    debug!(
        scenario = %total.name,
        shifts = total.days.len(),
        total_hours = %total.total_hours(),
        total_pay = %total.total_pay,
        "Scenario calculated"
    );
    total
}

/// Computes a named list of `(kind, date)` assignments at one hourly rate.
///
/// Shifts are paid independently in input order; overlapping shifts are
/// not detected.
///
/// # Example
///
/// ```
/// use shift_comparator::calculation::compute_scenario;
/// use shift_comparator::models::ShiftKind;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let tuesday = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
///
/// let total = compute_scenario(
///     "Two mornings",
///     &[(ShiftKind::Morning, monday), (ShiftKind::Morning, tuesday)],
///     Decimal::from(13),
/// );
/// assert_eq!(total.total_pay, Decimal::from(234));
/// assert_eq!(total.total_hours(), Decimal::from(18));
/// ```
pub fn compute_scenario(
    name: impl Into<String>,
    shifts: &[(ShiftKind, NaiveDate)],
    hourly_rate: Decimal,
) -> ScenarioTotal {
    let scenario = Scenario::new(
        name,
        shifts
            .iter()
            .map(|&(kind, date)| WorkShift::new(date, kind))
            .collect(),
        hourly_rate,
    );
    calculate_scenario(&scenario)
}
