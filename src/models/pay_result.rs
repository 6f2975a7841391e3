//! Pay results for single shifts and whole scenarios.
//!
//! [`DayPayResult`] is produced once per shift by the calculation module and
//! [`ScenarioTotal`] folds those results together. Both are derived values
//! and are not mutated after construction.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{HourBreakdown, WorkShift};

/// Pay for one shift.
///
/// `total_pay` always equals `base_pay + bonus_pay`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPayResult {
    /// The shift that was paid.
    pub shift: WorkShift,
    /// How the shift's hours were categorized.
    pub breakdown: HourBreakdown,
    /// Every worked hour at the base rate.
    pub base_pay: Decimal,
    /// Night and Sunday surcharges.
    pub bonus_pay: Decimal,
    /// Base plus bonus.
    pub total_pay: Decimal,
}

impl DayPayResult {
    /// Total hours worked in the shift.
    pub fn total_hours(&self) -> Decimal {
        self.breakdown.total_hours()
    }
}

/// Pay for every shift of a scenario plus the summed totals.
///
/// # Example
///
/// ```
/// use shift_comparator::models::ScenarioTotal;
/// use rust_decimal::Decimal;
///
/// let empty = ScenarioTotal::from_days("Nothing booked", Decimal::from(13), vec![]);
/// assert_eq!(empty.total_pay, Decimal::ZERO);
/// assert_eq!(empty.pay_per_hour(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioTotal {
    /// Display name of the scenario.
    pub name: String,
    /// Base hourly rate used for every shift.
    pub hourly_rate: Decimal,
    /// Per-shift results in input order.
    pub days: Vec<DayPayResult>,
    /// Bucket-wise sum of the day breakdowns.
    pub breakdown: HourBreakdown,
    /// Sum of the day base pay.
    pub base_pay: Decimal,
    /// Sum of the day bonus pay.
    pub bonus_pay: Decimal,
    /// Sum of the day total pay.
    pub total_pay: Decimal,
}

impl ScenarioTotal {
    /// Folds day results into a scenario total.
    pub fn from_days(
        name: impl Into<String>,
        hourly_rate: Decimal,
        days: Vec<DayPayResult>,
    ) -> Self {
        let (breakdown, base_pay, bonus_pay, total_pay) = days.iter().fold(
            (
                HourBreakdown::default(),
                Decimal::ZERO,
                Decimal::ZERO,
                Decimal::ZERO,
            ),
            |(breakdown, base, bonus, total), day| {
                (
                    breakdown + day.breakdown,
                    base + day.base_pay,
                    bonus + day.bonus_pay,
                    total + day.total_pay,
                )
            },
        );

        Self {
            name: name.into(),
            hourly_rate,
            days,
            breakdown,
            base_pay,
            bonus_pay,
            total_pay,
        }
    }

    /// Total hours worked across the scenario.
    pub fn total_hours(&self) -> Decimal {
        self.breakdown.total_hours()
    }

    /// Average pay per worked hour, or `None` when nothing was worked.
    pub fn pay_per_hour(&self) -> Option<Decimal> {
        let hours = self.total_hours();
        if hours.is_zero() {
            None
        } else {
            Some(self.total_pay / hours)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftKind;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_day(normal: &str, night: &str, base: &str, bonus: &str) -> DayPayResult {
        DayPayResult {
            shift: WorkShift::new(
                NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
                ShiftKind::Morning,
            ),
            breakdown: HourBreakdown {
                normal: dec(normal),
                night: dec(night),
                ..Default::default()
            },
            base_pay: dec(base),
            bonus_pay: dec(bonus),
            total_pay: dec(base) + dec(bonus),
        }
    }

    #[test]
    fn test_from_days_sums_every_field() {
        let days = vec![
            make_day("9", "0", "117", "0"),
            make_day("1", "8", "117", "15.60"),
        ];

        let total = ScenarioTotal::from_days("Mixed", dec("13"), days);

        assert_eq!(total.name, "Mixed");
        assert_eq!(total.days.len(), 2);
        assert_eq!(total.breakdown.normal, dec("10"));
        assert_eq!(total.breakdown.night, dec("8"));
        assert_eq!(total.base_pay, dec("234"));
        assert_eq!(total.bonus_pay, dec("15.60"));
        assert_eq!(total.total_pay, dec("249.60"));
        assert_eq!(total.total_hours(), dec("18"));
    }

    #[test]
    fn test_from_days_keeps_input_order() {
        let days = vec![
            make_day("1", "8", "117", "15.60"),
            make_day("9", "0", "117", "0"),
        ];

        let total = ScenarioTotal::from_days("Ordered", dec("13"), days);
        assert_eq!(total.days[0].bonus_pay, dec("15.60"));
        assert_eq!(total.days[1].bonus_pay, dec("0"));
    }

    #[test]
    fn test_pay_per_hour() {
        let total = ScenarioTotal::from_days("One", dec("13"), vec![make_day("9", "0", "117", "0")]);
        assert_eq!(total.pay_per_hour(), Some(dec("13")));
    }

    #[test]
    fn test_empty_scenario_totals_are_zero() {
        let total = ScenarioTotal::from_days("Empty", dec("13"), vec![]);
        assert_eq!(total.total_pay, Decimal::ZERO);
        assert!(total.breakdown.is_empty());
        assert_eq!(total.pay_per_hour(), None);
    }
}
